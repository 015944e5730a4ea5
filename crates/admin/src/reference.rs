//! Category and brand options for the product form selectors.

use serde::de::DeserializeOwned;

use shopdesk_client::AuthorizedClient;
use shopdesk_products::{to_option_pairs, BrandRecord, CategoryRecord, OptionPair};

use crate::{error::AdminError, outcome::DropdownOptions};

/// Loads both selector lists for one request.
///
/// Nothing is cached: every form render fetches both lists again.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceDataLoader<'a> {
    api: AuthorizedClient<'a>,
}

impl<'a> ReferenceDataLoader<'a> {
    pub fn new(api: AuthorizedClient<'a>) -> Self {
        Self { api }
    }

    /// Fetch categories and brands concurrently.
    ///
    /// A list the backend refuses or garbles comes back empty so the form can
    /// still render; only transport failures are errors.
    pub async fn load_dropdown_options(&self) -> Result<DropdownOptions, AdminError> {
        let (categories, brands) = tokio::try_join!(
            self.load::<CategoryRecord>("category"),
            self.load::<BrandRecord>("brand"),
        )?;

        Ok(DropdownOptions { categories, brands })
    }

    async fn load<R>(&self, path: &'static str) -> Result<Vec<OptionPair>, AdminError>
    where
        R: DeserializeOwned,
        for<'r> &'r R: Into<OptionPair>,
    {
        let resp = self.api.get(path).await?;

        if !resp.is_success() {
            tracing::warn!(path, status = resp.status().as_u16(), "reference list unavailable");
            return Ok(Vec::new());
        }

        let body = resp.body().trim();
        if body.is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Option<Vec<R>>>(body) {
            Ok(records) => Ok(to_option_pairs(&records.unwrap_or_default())),
            Err(e) => {
                tracing::warn!(path, error = %e, "reference list undecodable");
                Ok(Vec::new())
            }
        }
    }
}
