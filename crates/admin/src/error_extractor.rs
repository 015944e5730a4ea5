//! User-facing messages from backend failure bodies.
//!
//! The backend reports failures as `{"message": "..."}`, but proxies, crashes
//! and misconfigured endpoints return anything at all. Extraction is total:
//! every input yields a message.

use serde::Deserialize;

/// Shown when a failure body carries no usable message.
pub const FALLBACK_MESSAGE: &str = "An error occurred.";

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default, alias = "Message")]
    message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedMessage {
    Message(String),
    Fallback,
}

impl ExtractedMessage {
    pub fn into_message(self) -> String {
        match self {
            ExtractedMessage::Message(m) => m,
            ExtractedMessage::Fallback => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Parse a failure body into its envelope message, if it has one.
pub fn parse_error_body(raw_body: &str) -> ExtractedMessage {
    match serde_json::from_str::<ErrorEnvelope>(raw_body) {
        Ok(ErrorEnvelope { message: Some(m) }) => ExtractedMessage::Message(m),
        Ok(_) => ExtractedMessage::Fallback,
        Err(e) => {
            tracing::debug!(error = %e, "backend error body is not an error envelope");
            ExtractedMessage::Fallback
        }
    }
}

pub fn extract_message(raw_body: &str) -> String {
    parse_error_body(raw_body).into_message()
}
