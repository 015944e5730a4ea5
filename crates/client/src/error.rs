use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a complete response (DNS, refused
    /// connection, timeout, body read failure).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid request path `{0}`")]
    InvalidPath(String),

    #[error("invalid base url `{0}`")]
    InvalidBaseUrl(String),
}
