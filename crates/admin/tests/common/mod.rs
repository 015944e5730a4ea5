//! Stub backend API for black-box tests: canned responses per route plus a log
//! of every request it received.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::json;

use shopdesk_admin::ProductFormOrchestrator;
use shopdesk_auth::SessionContext;
use shopdesk_client::ApiClient;

pub const TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
pub struct SeenRequest {
    /// `"METHOD /path"`, e.g. `"GET /api/product"`.
    pub line: String,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Clone, Default)]
struct Script {
    routes: Arc<Mutex<HashMap<String, (u16, String)>>>,
    log: Arc<Mutex<Vec<SeenRequest>>>,
}

pub struct StubBackend {
    pub base_url: String,
    script: Script,
    handle: tokio::task::JoinHandle<()>,
}

impl StubBackend {
    pub async fn spawn() -> Self {
        let script = Script::default();
        let app = Router::new().fallback(handle).with_state(script.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            script,
            handle,
        }
    }

    /// Answer `line` (e.g. `"GET /api/product"`) with a canned status and body.
    pub fn respond(&self, line: &str, status: u16, body: impl Into<String>) {
        self.script
            .routes
            .lock()
            .unwrap()
            .insert(line.to_string(), (status, body.into()));
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.script.log.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.line).collect()
    }

    pub fn orchestrator(&self) -> ProductFormOrchestrator {
        ProductFormOrchestrator::new(ApiClient::new(&self.base_url).unwrap())
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle(
    State(script): State<Script>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let line = format!("{} {}", method, uri.path());
    script.log.lock().unwrap().push(SeenRequest {
        line: line.clone(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let canned = script.routes.lock().unwrap().get(&line).cloned();
    match canned {
        Some((status, body)) => (StatusCode::from_u16(status).unwrap(), body).into_response(),
        None => (StatusCode::NOT_FOUND, "no such route").into_response(),
    }
}

pub fn session() -> SessionContext {
    SessionContext::with_token(TOKEN)
}

pub fn product_json(id: &str, name: &str, category: &str, brand: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "Lightweight",
        "gender": 2,
        "categoryId": category,
        "brandId": brand,
    })
}

pub const PRODUCT_ID: &str = "0190a5d2-7c44-7b7e-9a43-6b1f0f9c2a11";
pub const CATEGORY_ID: &str = "0190a5d2-7c44-7b7e-9a43-6b1f0f9c2a12";
pub const BRAND_ID: &str = "0190a5d2-7c44-7b7e-9a43-6b1f0f9c2a13";
pub const NIL: &str = "00000000-0000-0000-0000-000000000000";
