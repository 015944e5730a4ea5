use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shopdesk_client::ClientError;

use crate::error::AdminError;

impl IntoResponse for AdminError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            AdminError::Client(ClientError::Transport(e)) => {
                tracing::error!(error = %e, "backend unreachable");
                json_error(StatusCode::BAD_GATEWAY, "backend_unreachable", "the backend API could not be reached")
            }
            AdminError::Client(e) => {
                tracing::error!(error = %e, "backend request could not be built");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "client_error", e.to_string())
            }
            AdminError::Decode { what, source } => {
                tracing::error!(what, error = %source, "undecodable backend payload");
                json_error(StatusCode::BAD_GATEWAY, "bad_backend_payload", self.to_string())
            }
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
