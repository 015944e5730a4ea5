use serde::{Deserialize, Serialize};

use shopdesk_core::{BrandId, CategoryId, DomainError, ProductId};

/// Target audience of a product.
///
/// Travels as its integer discriminant, both in backend JSON and in the
/// multipart fields of create/update calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Gender {
    #[default]
    Male = 0,
    Female = 1,
    Unisex = 2,
}

impl Gender {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Gender {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Gender::Male),
            1 => Ok(Gender::Female),
            2 => Ok(Gender::Unisex),
            other => Err(DomainError::validation(format!("unknown gender value {other}"))),
        }
    }
}

impl From<Gender> for i32 {
    fn from(value: Gender) -> Self {
        value.as_i32()
    }
}

/// A product as the backend API reports it.
///
/// Only ever a transient copy for display or edit pre-fill; the backend owns
/// the record. Property names are accepted in camelCase or PascalCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(alias = "Id")]
    pub id: ProductId,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    #[serde(alias = "Gender")]
    pub gender: Gender,
    #[serde(alias = "CategoryId")]
    pub category_id: CategoryId,
    #[serde(alias = "BrandId")]
    pub brand_id: BrandId,
}

impl ProductRecord {
    /// Decode a single record from a backend response body.
    pub fn decode(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Decode a list of records from a backend response body.
    pub fn decode_list(body: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(body)
    }
}
