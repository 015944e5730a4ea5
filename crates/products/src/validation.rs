//! Field rules applied to product input before any write call.
//!
//! Rules run in a fixed order and stop at the first failure, so a submission
//! only ever reports one message. Re-submitting starts again from the first
//! rule.

use serde::Serialize;
use thiserror::Error;

use crate::input::ProductInput;

/// Maximum description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationFailure {
    #[error("Product name is required.")]
    NameRequired,

    #[error("Description must not exceed 500 characters.")]
    DescriptionTooLong,

    #[error("Please select a valid category.")]
    CategoryRequired,

    #[error("Please select a valid brand.")]
    BrandRequired,
}

impl ValidationFailure {
    /// User-facing message shown on the re-rendered form.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Apply the product field rules in order.
pub fn validate(input: &ProductInput) -> Result<(), ValidationFailure> {
    let name = input.name.as_deref().unwrap_or("");
    if name.trim().is_empty() {
        return Err(ValidationFailure::NameRequired);
    }

    // Whitespace-only descriptions count as absent.
    if let Some(description) = input.description.as_deref() {
        if !description.trim().is_empty() && description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ValidationFailure::DescriptionTooLong);
        }
    }

    if input.category_id.is_nil() {
        return Err(ValidationFailure::CategoryRequired);
    }

    if input.brand_id.is_nil() {
        return Err(ValidationFailure::BrandRequired);
    }

    Ok(())
}
