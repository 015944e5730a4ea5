use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use shopdesk_auth::{require_token, SessionContext, SESSION_TOKEN_KEY};

use crate::{
    app::{respond::respond, Links},
    outcome::Outcome,
};

/// Gate the product pages on the session token, then attach the request's
/// [`SessionContext`] for handlers to pick up.
///
/// Runs before any path or body extraction, so a token-less request is sent
/// to the login page whatever else is wrong with it.
pub async fn session_middleware(
    State(links): State<Arc<Links>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let session = session_from_headers(req.headers());
    if require_token(&session).is_err() {
        tracing::debug!(path = %req.uri().path(), "no session token, redirecting to login");
        return respond(Outcome::to_login(), &links);
    }

    req.extensions_mut().insert(session);
    next.run(req).await
}

/// Read the session token from the `Cookie` header(s).
pub fn session_from_headers(headers: &HeaderMap) -> SessionContext {
    let token = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_TOKEN_KEY)
        .map(|(_, value)| value.trim_matches('"').to_string());

    SessionContext::new(token)
}
