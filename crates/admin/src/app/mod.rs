//! HTTP wiring (Axum router + shared state).
//!
//! - `routes/`: handlers, one file per area
//! - `respond.rs`: turning action outcomes into HTTP responses
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use shopdesk_client::{ApiClient, ClientError};

use crate::{config::AdminConfig, middleware, orchestrator::ProductFormOrchestrator};

pub mod errors;
pub mod respond;
pub mod routes;

/// Mount point of the product pages.
pub const PRODUCTS_MOUNT: &str = "/admin/products";

/// Redirect destinations outside the orchestrator's knowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub login_path: String,
    pub product_list_path: String,
}

impl Links {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            product_list_path: PRODUCTS_MOUNT.to_string(),
        }
    }
}

/// Build the full HTTP router from configuration (entrypoint used by `main.rs`).
pub fn build_app(config: &AdminConfig) -> Result<Router, ClientError> {
    let api = ApiClient::new(&config.api_base_url)?;
    let orchestrator = ProductFormOrchestrator::new(api);
    Ok(router_with(orchestrator, Links::new(config.login_path.clone())))
}

/// Build the router around an existing orchestrator.
pub fn router_with(orchestrator: ProductFormOrchestrator, links: Links) -> Router {
    let links = Arc::new(links);
    let products = routes::products::router()
        .layer(Extension(Arc::new(orchestrator)))
        .layer(Extension(links.clone()))
        .layer(axum::middleware::from_fn_with_state(
            links,
            middleware::session_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest(PRODUCTS_MOUNT, products)
        .layer(ServiceBuilder::new())
}
