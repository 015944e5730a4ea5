//! Form input: raw submitted fields and their typed binding.
//!
//! Binding never fails outright. A field that cannot be converted keeps its
//! default (nil id, default gender) and records a [`BindingError`]; the caller
//! treats any binding error as a structurally invalid submission.

use serde::{Deserialize, Serialize};

use shopdesk_core::{BrandId, CategoryId, ProductId};

use crate::product::{Gender, ProductRecord};

/// Fields exactly as the browser submitted them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProductFormFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub gender: Option<String>,
    pub category_id: Option<String>,
    pub brand_id: Option<String>,
}

/// Typed product input used to re-render forms and build outbound payloads.
///
/// `id` is set only for updates (taken from the route, never from the form).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub gender: Gender,
    pub category_id: CategoryId,
    pub brand_id: BrandId,
}

/// A submitted field that could not be converted to its typed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingError {
    pub field: &'static str,
    pub message: String,
}

impl BindingError {
    pub fn invalid(field: &'static str, raw: &str) -> Self {
        Self {
            field,
            message: format!("The value '{raw}' is not valid for {field}."),
        }
    }
}

/// Result of binding raw fields: the typed input plus any conversion errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundInput {
    pub input: ProductInput,
    pub errors: Vec<BindingError>,
}

impl BoundInput {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl ProductFormFields {
    /// Convert raw fields into a [`ProductInput`].
    ///
    /// Empty strings bind to "absent": `None` for text, nil for ids, the
    /// default for gender.
    pub fn bind(&self) -> BoundInput {
        let mut errors = Vec::new();

        let gender = match non_empty(&self.gender) {
            None => Gender::default(),
            Some(raw) => match raw.trim().parse::<i32>().ok().and_then(|v| Gender::try_from(v).ok()) {
                Some(g) => g,
                None => {
                    errors.push(BindingError::invalid("Gender", raw));
                    Gender::default()
                }
            },
        };

        let category_id = match non_empty(&self.category_id) {
            None => CategoryId::nil(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                errors.push(BindingError::invalid("CategoryId", raw));
                CategoryId::nil()
            }),
        };

        let brand_id = match non_empty(&self.brand_id) {
            None => BrandId::nil(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                errors.push(BindingError::invalid("BrandId", raw));
                BrandId::nil()
            }),
        };

        BoundInput {
            input: ProductInput {
                id: None,
                name: non_empty(&self.name).map(str::to_owned),
                description: non_empty(&self.description).map(str::to_owned),
                gender,
                category_id,
                brand_id,
            },
            errors,
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl ProductInput {
    /// Attach the route id, turning a create-shaped input into an update.
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<ProductRecord> for ProductInput {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: Some(record.id),
            name: Some(record.name),
            description: record.description,
            gender: record.gender,
            category_id: record.category_id,
            brand_id: record.brand_id,
        }
    }
}
