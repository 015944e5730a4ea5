//! Outbound field list for create/update calls.

use crate::input::ProductInput;

/// Named text parts of a product write request, in wire order.
///
/// Every part is always present: absent name/description are sent as empty
/// strings, gender as its integer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPayload {
    parts: Vec<(&'static str, String)>,
}

impl ProductPayload {
    pub fn from_input(input: &ProductInput) -> Self {
        Self {
            parts: vec![
                ("Name", input.name.clone().unwrap_or_default()),
                ("Description", input.description.clone().unwrap_or_default()),
                ("Gender", input.gender.as_i32().to_string()),
                ("CategoryId", input.category_id.to_string()),
                ("BrandId", input.brand_id.to_string()),
            ],
        }
    }

    pub fn parts(&self) -> &[(&'static str, String)] {
        &self.parts
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Gender;
    use shopdesk_core::{BrandId, CategoryId};

    #[test]
    fn absent_text_fields_are_sent_as_empty_strings() {
        let input = ProductInput {
            gender: Gender::Unisex,
            category_id: CategoryId::new(),
            brand_id: BrandId::new(),
            ..ProductInput::default()
        };
        let payload = ProductPayload::from_input(&input);

        let names: Vec<_> = payload.parts().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["Name", "Description", "Gender", "CategoryId", "BrandId"]);
        assert_eq!(payload.get("Name"), Some(""));
        assert_eq!(payload.get("Description"), Some(""));
        assert_eq!(payload.get("Gender"), Some("2"));
        assert_eq!(payload.get("CategoryId"), Some(input.category_id.to_string().as_str()));
    }

    #[test]
    fn name_is_sent_untrimmed() {
        let input = ProductInput {
            name: Some("  Boot ".to_string()),
            ..ProductInput::default()
        };
        assert_eq!(ProductPayload::from_input(&input).get("Name"), Some("  Boot "));
    }
}
