//! Admin front-end for product records: every action is proxied to the
//! backend API on behalf of the signed-in operator.
//!
//! - `orchestrator`: the product actions (list, detail, create, edit)
//! - `reference`: category/brand dropdown loading
//! - `error_extractor`: user-facing messages from backend error bodies
//! - `outcome`: what an action hands to the view layer
//! - `app`: axum wiring (router, handlers, session middleware)

pub mod app;
pub mod config;
pub mod error;
pub mod error_extractor;
pub mod middleware;
pub mod orchestrator;
pub mod outcome;
pub mod reference;

pub use config::{AdminConfig, ConfigError};
pub use error::AdminError;
pub use error_extractor::{extract_message, parse_error_body, ExtractedMessage, FALLBACK_MESSAGE};
pub use orchestrator::ProductFormOrchestrator;
pub use outcome::{DropdownOptions, FormMode, Notice, Outcome, Page, ProductForm, RedirectTarget, View};
pub use reference::ReferenceDataLoader;
