//! Reference data used to populate the category and brand selectors.

use serde::{Deserialize, Serialize};

use shopdesk_core::ValueObject;

/// Identifier of a reference record as it appears on the wire.
///
/// The backend uses UUID strings, but numeric keys are accepted too; either
/// way only the textual form is ever used (as an option value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Text(String),
    Number(i64),
}

impl core::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RecordKey::Text(s) => f.write_str(s),
            RecordKey::Number(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(alias = "Id")]
    pub id: RecordKey,
    #[serde(alias = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRecord {
    #[serde(alias = "Id")]
    pub id: RecordKey,
    #[serde(alias = "Name")]
    pub name: String,
}

/// One selectable entry of a dropdown: submitted value + visible label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionPair {
    pub value: String,
    pub label: String,
}

impl OptionPair {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl ValueObject for OptionPair {}

impl From<&CategoryRecord> for OptionPair {
    fn from(record: &CategoryRecord) -> Self {
        OptionPair::new(record.id.to_string(), record.name.clone())
    }
}

impl From<&BrandRecord> for OptionPair {
    fn from(record: &BrandRecord) -> Self {
        OptionPair::new(record.id.to_string(), record.name.clone())
    }
}

/// Project reference records 1:1 into option pairs, preserving order.
pub fn to_option_pairs<'a, R>(records: &'a [R]) -> Vec<OptionPair>
where
    &'a R: Into<OptionPair>,
{
    records.iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_render_as_plain_digits() {
        let records: Vec<CategoryRecord> =
            serde_json::from_str(r#"[{"id":1,"name":"Shoes"}]"#).unwrap();
        assert_eq!(to_option_pairs(&records), vec![OptionPair::new("1", "Shoes")]);
    }

    #[test]
    fn uuid_ids_are_kept_verbatim_and_order_is_preserved() {
        let records: Vec<BrandRecord> = serde_json::from_str(
            r#"[
                {"id":"0190a5d2-7c44-7b7e-9a43-6b1f0f9c2a13","name":"Acme"},
                {"id":"0190a5d2-7c44-7b7e-9a43-6b1f0f9c2a14","name":"Zenith"}
            ]"#,
        )
        .unwrap();

        let pairs = to_option_pairs(&records);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].value, "0190a5d2-7c44-7b7e-9a43-6b1f0f9c2a13");
        assert_eq!(pairs[0].label, "Acme");
        assert_eq!(pairs[1].label, "Zenith");
    }

    #[test]
    fn pascal_case_records_decode() {
        let records: Vec<BrandRecord> = serde_json::from_str(r#"[{"Id":7,"Name":"Acme"}]"#).unwrap();
        assert_eq!(to_option_pairs(&records), vec![OptionPair::new("7", "Acme")]);
    }

    #[test]
    fn empty_list_projects_to_no_options() {
        let records: Vec<CategoryRecord> = Vec::new();
        assert!(to_option_pairs(&records).is_empty());
    }
}
