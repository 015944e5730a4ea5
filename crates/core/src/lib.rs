//! `shopdesk-core` - shared domain building blocks.
//!
//! Pure types only: identifiers, the domain error model and marker traits.
//! No HTTP, no IO.

pub mod error;
pub mod id;
pub mod value_object;

pub use error::DomainError;
pub use id::{BrandId, CategoryId, ProductId};
pub use value_object::ValueObject;
