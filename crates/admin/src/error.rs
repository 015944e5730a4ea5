//! Failures that abort an admin action.
//!
//! Missing sessions, invalid input and backend rejections are not errors here:
//! they are ordinary [`Outcome`](crate::Outcome)s. What remains is the backend
//! being unreachable or answering 2xx with a body we cannot decode.

use thiserror::Error;

use shopdesk_client::ClientError;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("backend returned an undecodable {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl AdminError {
    pub fn decode(what: &'static str, source: serde_json::Error) -> Self {
        AdminError::Decode { what, source }
    }

    /// The backend could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, AdminError::Client(ClientError::Transport(_)))
    }
}
