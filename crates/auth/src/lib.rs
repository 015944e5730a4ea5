//! `shopdesk-auth` - session token consumption (no issuance).
//!
//! Tokens are opaque: this crate never decodes or verifies them. Presence of a
//! non-empty token is the only authorization signal the admin surface uses;
//! the backend API performs the real verification on every proxied call.

pub mod gate;
pub mod session;

pub use gate::{require_token, AuthFailure};
pub use session::{SessionContext, SESSION_TOKEN_KEY};
