//! Codec for the store's flat-text position field.
//!
//! The hosted record store keeps a document's positions in a plain text
//! column. This is the single encode/decode boundary for that field; the
//! rest of the crate only ever sees `Vec<LineItem>`.

use kontor_shared::{AppError, AppResult};

use super::types::LineItem;

/// Serializes a position list for the store's text field.
pub fn encode_items(items: &[LineItem]) -> AppResult<String> {
    serde_json::to_string(items).map_err(|err| AppError::Serialization(err.to_string()))
}

/// Hydrates a stored position list.
///
/// Blank or unparseable text yields an empty list instead of failing the
/// whole record: a document with a corrupt position field still loads and
/// can be repaired in the editor.
#[must_use]
pub fn decode_items(raw: &str) -> Vec<LineItem> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_default()
}
