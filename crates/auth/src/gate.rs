//! Authentication gate checked first by every admin action.

use thiserror::Error;

use crate::session::SessionContext;

/// The session carries no usable token.
///
/// Callers redirect to the login entry point and do no further work.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("authentication required")]
pub struct AuthFailure;

/// Return the session's bearer token, or `AuthFailure` if it is absent or empty.
pub fn require_token(session: &SessionContext) -> Result<&str, AuthFailure> {
    match session.token() {
        Some(token) if !token.is_empty() => Ok(token),
        _ => {
            tracing::debug!("no session token; access denied");
            Err(AuthFailure)
        }
    }
}
