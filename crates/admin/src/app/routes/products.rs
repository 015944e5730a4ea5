use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use shopdesk_auth::SessionContext;
use shopdesk_core::ProductId;
use shopdesk_products::ProductFormFields;

use crate::app::{errors, respond::respond, Links};
use crate::orchestrator::ProductFormOrchestrator;
use crate::outcome::{Notice, Outcome};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/create", get(show_create_form).post(create_product))
        .route("/:id", get(product_detail))
        .route("/:id/edit", get(show_edit_form).post(update_product))
}

/// One-shot notice forwarded by a redirect.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeParams {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl NoticeParams {
    fn into_notice(self) -> Option<Notice> {
        self.error
            .map(Notice::Error)
            .or_else(|| self.success.map(Notice::Success))
    }
}

pub async fn list_products(
    Extension(orchestrator): Extension<Arc<ProductFormOrchestrator>>,
    Extension(links): Extension<Arc<Links>>,
    Extension(session): Extension<SessionContext>,
    Query(params): Query<NoticeParams>,
) -> Response {
    match orchestrator.list(&session).await {
        Ok(Outcome::Render(page)) => {
            let page = page.with_notice(params.into_notice());
            respond(Outcome::Render(page), &links)
        }
        Ok(outcome) => respond(outcome, &links),
        Err(e) => e.into_response(),
    }
}

pub async fn product_detail(
    Extension(orchestrator): Extension<Arc<ProductFormOrchestrator>>,
    Extension(links): Extension<Arc<Links>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return invalid_id();
    };
    match orchestrator.detail(&session, id).await {
        Ok(outcome) => respond(outcome, &links),
        Err(e) => e.into_response(),
    }
}

pub async fn show_create_form(
    Extension(orchestrator): Extension<Arc<ProductFormOrchestrator>>,
    Extension(links): Extension<Arc<Links>>,
    Extension(session): Extension<SessionContext>,
) -> Response {
    match orchestrator.show_create_form(&session).await {
        Ok(outcome) => respond(outcome, &links),
        Err(e) => e.into_response(),
    }
}

pub async fn create_product(
    Extension(orchestrator): Extension<Arc<ProductFormOrchestrator>>,
    Extension(links): Extension<Arc<Links>>,
    Extension(session): Extension<SessionContext>,
    Form(fields): Form<ProductFormFields>,
) -> Response {
    match orchestrator.create(&session, fields).await {
        Ok(outcome) => respond(outcome, &links),
        Err(e) => e.into_response(),
    }
}

pub async fn show_edit_form(
    Extension(orchestrator): Extension<Arc<ProductFormOrchestrator>>,
    Extension(links): Extension<Arc<Links>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return invalid_id();
    };
    match orchestrator.show_edit_form(&session, id).await {
        Ok(outcome) => respond(outcome, &links),
        Err(e) => e.into_response(),
    }
}

pub async fn update_product(
    Extension(orchestrator): Extension<Arc<ProductFormOrchestrator>>,
    Extension(links): Extension<Arc<Links>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
    Form(fields): Form<ProductFormFields>,
) -> Response {
    match orchestrator.update_route(&session, &id, fields).await {
        Ok(outcome) => respond(outcome, &links),
        Err(e) => e.into_response(),
    }
}

fn parse_id(raw: &str) -> Option<ProductId> {
    raw.parse().ok()
}

fn invalid_id() -> Response {
    errors::json_error(StatusCode::NOT_FOUND, "not_found", "invalid product id")
}
