//! Projection of a record onto a declared field order

use super::field::{FieldValue, Fields, MISSING_FIELD_PLACEHOLDER};
use std::borrow::Cow;

/// Look up every declared name in `record`, in declaration order.
///
/// Absent fields become [`MISSING_FIELD_PLACEHOLDER`] so positional formats
/// keep their column count.
pub fn extract<'a, S>(record: &'a Fields, ordered_names: &[S]) -> Vec<Cow<'a, FieldValue>>
where
    S: AsRef<str>,
{
    ordered_names
        .iter()
        .map(|name| match record.get(name.as_ref()) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(FieldValue::String(MISSING_FIELD_PLACEHOLDER.to_string())),
        })
        .collect()
}
