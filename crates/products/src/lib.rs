//! Product catalogue shapes and form rules.
//!
//! This crate holds the typed projections of backend records the admin surface
//! works with, plus the deterministic parts of form handling: binding raw form
//! fields, the ordered validation rules and the outbound field list. No IO, no
//! HTTP.

pub mod catalog;
pub mod input;
pub mod payload;
pub mod product;
pub mod validation;

pub use catalog::{BrandRecord, CategoryRecord, OptionPair, RecordKey, to_option_pairs};
pub use input::{BindingError, BoundInput, ProductFormFields, ProductInput};
pub use payload::ProductPayload;
pub use product::{Gender, ProductRecord};
pub use validation::{validate, ValidationFailure, DESCRIPTION_MAX_CHARS};
