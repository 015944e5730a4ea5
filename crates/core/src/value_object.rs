//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two with the same attribute values are the
/// same value. Dropdown option pairs are the typical example here: they are
/// rebuilt from backend data on every request and compared field by field.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct OptionPair {
///     value: String,
///     label: String,
/// }
///
/// impl ValueObject for OptionPair {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
