use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use shopdesk_client::Url;

use crate::{
    app::{errors, Links},
    outcome::{Notice, Outcome, RedirectTarget},
};

// Only used to percent-encode query strings; never requested.
const LOCAL_ORIGIN: &str = "http://admin.local/";

/// Render an action outcome. Pages go to the template layer as JSON.
pub fn respond(outcome: Outcome, links: &Links) -> Response {
    match outcome {
        Outcome::Render(page) => (StatusCode::OK, Json(page)).into_response(),
        Outcome::Redirect { target, notice } => {
            let path = match target {
                RedirectTarget::Login => links.login_path.as_str(),
                RedirectTarget::ProductList => links.product_list_path.as_str(),
            };
            Redirect::to(&location(path, notice.as_ref())).into_response()
        }
        Outcome::NotFound => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

/// Redirect location carrying a one-shot notice as a query parameter.
pub fn location(path: &str, notice: Option<&Notice>) -> String {
    let Some(notice) = notice else {
        return path.to_string();
    };
    let key = match notice {
        Notice::Success(_) => "success",
        Notice::Error(_) => "error",
    };

    match Url::parse(LOCAL_ORIGIN).and_then(|base| base.join(path)) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair(key, notice.text());
            format!("{}?{}", url.path(), url.query().unwrap_or_default())
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "dropping notice on unparseable redirect path");
            path.to_string()
        }
    }
}
