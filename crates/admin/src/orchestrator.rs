//! Product actions of the admin surface.
//!
//! Every action checks the session first; without a token it redirects to the
//! login page before touching the backend. Write actions validate locally and
//! only then call the backend, re-rendering the form (with freshly loaded
//! dropdowns) on any failure.

use shopdesk_auth::{require_token, SessionContext};
use shopdesk_client::{payload_form, ApiClient, AuthorizedClient};
use shopdesk_core::ProductId;
use shopdesk_products::{
    validate, BindingError, BoundInput, ProductFormFields, ProductInput, ProductPayload, ProductRecord,
};

use crate::{
    error::AdminError,
    error_extractor::extract_message,
    outcome::{FormMode, Notice, Outcome, Page, ProductForm, View},
    reference::ReferenceDataLoader,
};

const PRODUCTS_PATH: &str = "product";

pub const CREATE_SUCCESS: &str = "Product added successfully!";
pub const CREATE_FAILED_PREFIX: &str = "Failed to add product: ";
pub const UPDATE_SUCCESS: &str = "Product updated successfully!";
pub const UPDATE_FAILED_PREFIX: &str = "Failed to update product: ";
pub const EDIT_NOT_FOUND_PREFIX: &str = "Product not found: ";
pub const INVALID_SUBMISSION: &str = "Invalid data. Please check again!";

#[derive(Debug, Clone)]
pub struct ProductFormOrchestrator {
    api: ApiClient,
}

impl ProductFormOrchestrator {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Product list. A backend failure shows an empty list, not an error page.
    pub async fn list(&self, session: &SessionContext) -> Result<Outcome, AdminError> {
        let Ok(token) = require_token(session) else {
            return Ok(Outcome::to_login());
        };

        let resp = self.api.authorized(token).get(PRODUCTS_PATH).await?;
        if !resp.is_success() {
            tracing::warn!(status = resp.status().as_u16(), "product list unavailable");
            return Ok(Outcome::render(View::ProductList(Vec::new())));
        }

        let products = ProductRecord::decode_list(resp.body())
            .map_err(|e| AdminError::decode("product list", e))?;
        Ok(Outcome::render(View::ProductList(products)))
    }

    pub async fn detail(&self, session: &SessionContext, id: ProductId) -> Result<Outcome, AdminError> {
        let Ok(token) = require_token(session) else {
            return Ok(Outcome::to_login());
        };

        let resp = self.api.authorized(token).get(&product_path(id)).await?;
        if !resp.is_success() {
            tracing::debug!(%id, status = resp.status().as_u16(), "product not found");
            return Ok(Outcome::NotFound);
        }

        let product =
            ProductRecord::decode(resp.body()).map_err(|e| AdminError::decode("product", e))?;
        Ok(Outcome::render(View::ProductDetail(product)))
    }

    pub async fn show_create_form(&self, session: &SessionContext) -> Result<Outcome, AdminError> {
        let Ok(token) = require_token(session) else {
            return Ok(Outcome::to_login());
        };
        let api = self.api.authorized(token);

        let form = self.form(api, FormMode::Create, ProductInput::default()).await?;
        Ok(Outcome::render(View::ProductForm(form)))
    }

    pub async fn create(
        &self,
        session: &SessionContext,
        fields: ProductFormFields,
    ) -> Result<Outcome, AdminError> {
        let Ok(token) = require_token(session) else {
            return Ok(Outcome::to_login());
        };
        let api = self.api.authorized(token);

        let bound = fields.bind();
        let input = bound.input;
        if !bound.errors.is_empty() {
            let errors = bound.errors.into_iter().map(|e| e.message).collect();
            let form = self.form(api, FormMode::Create, input).await?.with_errors(errors);
            return Ok(Outcome::render(View::ProductForm(form)));
        }

        if let Err(failure) = validate(&input) {
            tracing::debug!(?failure, "create rejected by validation");
            let form = self
                .form(api, FormMode::Create, input)
                .await?
                .with_errors(vec![failure.message()]);
            return Ok(Outcome::render(View::ProductForm(form)));
        }

        let form = payload_form(&ProductPayload::from_input(&input));
        let resp = api.post(PRODUCTS_PATH, form).await?;

        if !resp.is_success() {
            let message = extract_message(resp.body());
            tracing::warn!(status = resp.status().as_u16(), %message, "backend rejected product create");
            let form = self.form(api, FormMode::Create, input).await?;
            let page = Page::new(View::ProductForm(form))
                .with_notice(Some(Notice::error(format!("{CREATE_FAILED_PREFIX}{message}"))));
            return Ok(Outcome::Render(page));
        }

        tracing::info!("product created");
        Ok(Outcome::to_list(Notice::success(CREATE_SUCCESS)))
    }

    pub async fn show_edit_form(
        &self,
        session: &SessionContext,
        id: ProductId,
    ) -> Result<Outcome, AdminError> {
        let Ok(token) = require_token(session) else {
            return Ok(Outcome::to_login());
        };
        let api = self.api.authorized(token);

        let resp = api.get(&product_path(id)).await?;
        if !resp.is_success() {
            tracing::warn!(%id, status = resp.status().as_u16(), "product to edit not found");
            let notice = Notice::error(format!("{EDIT_NOT_FOUND_PREFIX}{}", resp.body()));
            return Ok(Outcome::to_list(notice));
        }

        let product =
            ProductRecord::decode(resp.body()).map_err(|e| AdminError::decode("product", e))?;
        let input = ProductInput::from(product);

        let form = self.form(api, FormMode::Edit(id), input).await?;
        Ok(Outcome::render(View::ProductForm(form)))
    }

    pub async fn update(
        &self,
        session: &SessionContext,
        id: ProductId,
        fields: ProductFormFields,
    ) -> Result<Outcome, AdminError> {
        let Ok(token) = require_token(session) else {
            return Ok(Outcome::to_login());
        };
        self.update_bound(self.api.authorized(token), id, fields.bind()).await
    }

    /// Update addressed by the raw route segment. A segment that is not a
    /// product id binds to nil and marks the submission invalid.
    pub async fn update_route(
        &self,
        session: &SessionContext,
        raw_id: &str,
        fields: ProductFormFields,
    ) -> Result<Outcome, AdminError> {
        let Ok(token) = require_token(session) else {
            return Ok(Outcome::to_login());
        };

        let mut bound = fields.bind();
        let id = raw_id.parse().unwrap_or_else(|_| {
            bound.errors.push(BindingError::invalid("Id", raw_id));
            ProductId::nil()
        });
        self.update_bound(self.api.authorized(token), id, bound).await
    }

    async fn update_bound(
        &self,
        api: AuthorizedClient<'_>,
        id: ProductId,
        bound: BoundInput,
    ) -> Result<Outcome, AdminError> {
        let input = bound.input.with_id(id);
        if !bound.errors.is_empty() {
            let errors = bound.errors.into_iter().map(|e| e.message).collect();
            let form = self.form(api, FormMode::Edit(id), input).await?.with_errors(errors);
            let page = Page::new(View::ProductForm(form))
                .with_notice(Some(Notice::error(INVALID_SUBMISSION)));
            return Ok(Outcome::Render(page));
        }

        if let Err(failure) = validate(&input) {
            tracing::debug!(%id, ?failure, "update rejected by validation");
            let form = self
                .form(api, FormMode::Edit(id), input)
                .await?
                .with_errors(vec![failure.message()]);
            return Ok(Outcome::render(View::ProductForm(form)));
        }

        let form = payload_form(&ProductPayload::from_input(&input));
        let resp = api.put(&product_path(id), form).await?;

        if !resp.is_success() {
            let message = extract_message(resp.body());
            tracing::warn!(%id, status = resp.status().as_u16(), %message, "backend rejected product update");
            let form = self.form(api, FormMode::Edit(id), input).await?;
            let page = Page::new(View::ProductForm(form))
                .with_notice(Some(Notice::error(format!("{UPDATE_FAILED_PREFIX}{message}"))));
            return Ok(Outcome::Render(page));
        }

        tracing::info!(%id, "product updated");
        Ok(Outcome::to_list(Notice::success(UPDATE_SUCCESS)))
    }

    /// Every form render goes through here so dropdowns are always reloaded.
    async fn form(
        &self,
        api: AuthorizedClient<'_>,
        mode: FormMode,
        input: ProductInput,
    ) -> Result<ProductForm, AdminError> {
        let options = ReferenceDataLoader::new(api).load_dropdown_options().await?;
        Ok(ProductForm::new(mode, input, options))
    }
}

fn product_path(id: ProductId) -> String {
    format!("{PRODUCTS_PATH}/{id}")
}
