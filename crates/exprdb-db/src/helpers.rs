//! Row-to-entity parsing helpers.
//!
//! Every `Record` implementation converts a column-indexed `libsql::Row` into
//! a typed entity. These helpers isolate the parsing of nullable columns and
//! stored discriminator strings.

use exprdb_core::enums::FeatureKind;

use crate::error::DatabaseError;

/// Parse a stored `source_type` value.
///
/// # Errors
///
/// Returns `DatabaseError::Core(CoreError::InvalidDiscriminator)` if the
/// value is not one of the four feature tags.
pub fn parse_feature_kind(s: &str) -> Result<FeatureKind, DatabaseError> {
    Ok(s.parse::<FeatureKind>()?)
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all exprdb-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}
