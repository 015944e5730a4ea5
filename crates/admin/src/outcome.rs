//! What an admin action hands back: a page to render, a redirect, or not-found.

use serde::Serialize;

use shopdesk_core::ProductId;
use shopdesk_products::{OptionPair, ProductInput, ProductRecord};

/// One-shot message displayed on the next render and then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice::Success(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice::Error(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(t) | Notice::Error(t) => t,
        }
    }
}

/// Category and brand selectors for the product form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DropdownOptions {
    pub categories: Vec<OptionPair>,
    pub brands: Vec<OptionPair>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

/// Create/edit form state: the (possibly user-submitted) input, dropdowns and
/// any field-level errors from the last submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductForm {
    pub mode: FormMode,
    pub input: ProductInput,
    pub options: DropdownOptions,
    pub errors: Vec<String>,
}

impl ProductForm {
    pub fn new(mode: FormMode, input: ProductInput, options: DropdownOptions) -> Self {
        Self {
            mode,
            input,
            options,
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "model", rename_all = "snake_case")]
pub enum View {
    ProductList(Vec<ProductRecord>),
    ProductDetail(ProductRecord),
    ProductForm(ProductForm),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    #[serde(flatten)]
    pub view: View,
    pub notice: Option<Notice>,
}

impl Page {
    pub fn new(view: View) -> Self {
        Self { view, notice: None }
    }

    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectTarget {
    Login,
    ProductList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(Page),
    Redirect {
        target: RedirectTarget,
        notice: Option<Notice>,
    },
    NotFound,
}

impl Outcome {
    pub fn render(view: View) -> Self {
        Outcome::Render(Page::new(view))
    }

    pub fn to_login() -> Self {
        Outcome::Redirect {
            target: RedirectTarget::Login,
            notice: None,
        }
    }

    pub fn to_list(notice: Notice) -> Self {
        Outcome::Redirect {
            target: RedirectTarget::ProductList,
            notice: Some(notice),
        }
    }

    /// The form rendered by this outcome, if any.
    pub fn form(&self) -> Option<&ProductForm> {
        match self {
            Outcome::Render(Page {
                view: View::ProductForm(form),
                ..
            }) => Some(form),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Outcome::Render(page) => page.notice.as_ref(),
            Outcome::Redirect { notice, .. } => notice.as_ref(),
            Outcome::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_serializes_view_tag_and_notice() {
        let page = Page::new(View::ProductList(Vec::new())).with_notice(Some(Notice::success("Saved")));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["view"], "product_list");
        assert_eq!(json["model"], serde_json::json!([]));
        assert_eq!(json["notice"]["kind"], "success");
        assert_eq!(json["notice"]["text"], "Saved");
    }

    #[test]
    fn form_accessor_only_matches_form_pages() {
        assert!(Outcome::NotFound.form().is_none());
        assert!(Outcome::to_login().form().is_none());

        let form = ProductForm::new(FormMode::Create, ProductInput::default(), DropdownOptions::default());
        let outcome = Outcome::render(View::ProductForm(form.clone()));
        assert_eq!(outcome.form(), Some(&form));
    }
}
