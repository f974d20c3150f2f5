//! Table cell formatting for name records.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use serde_json::Value;

use crate::net::types::{FeatureValue, value_text};

pub const NOTES_PREVIEW_CHARS: usize = 50;
pub const NO_FEATURES: &str = "None";
pub const NO_NOTES: &str = "No notes";

/// Summarize a record's feature value for the Features column.
pub fn feature_summary(value: Option<&FeatureValue>) -> String {
    match value {
        Some(FeatureValue::List(items)) => items.join(", "),
        Some(flags @ FeatureValue::Flags(_)) => {
            let keys = flags.true_keys();
            if keys.is_empty() { NO_FEATURES.to_owned() } else { keys.join(", ") }
        }
        Some(FeatureValue::Text(text)) => text.clone(),
        Some(FeatureValue::Other(Value::Array(items))) => items.iter().map(value_text).collect::<Vec<_>>().join(", "),
        Some(FeatureValue::Other(_)) | None => NO_FEATURES.to_owned(),
    }
}

/// Shorten notes for the Notes column: at most 50 characters, then `...`.
pub fn notes_preview(notes: &str) -> String {
    if notes.is_empty() {
        return NO_NOTES.to_owned();
    }
    match notes.char_indices().nth(NOTES_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &notes[..cut]),
        None => notes.to_owned(),
    }
}

/// Hover text for the Notes cell; `None` omits the attribute.
pub fn notes_title(notes: Option<&str>) -> Option<String> {
    notes.filter(|n| !n.is_empty()).map(str::to_owned)
}
