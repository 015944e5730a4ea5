use serde::{Deserialize, Serialize};

/// Key under which the login flow stores the bearer token.
pub const SESSION_TOKEN_KEY: &str = "JWToken";

/// Per-request session context.
///
/// Built once at the edge of a request from whatever session mechanism is in
/// use and passed explicitly into every action. Read-only: nothing in this
/// workspace sets or clears the token.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    token: Option<String>,
}

impl SessionContext {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

// Tokens must never end up in logs.
impl core::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionContext")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
