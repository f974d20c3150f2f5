//! Wire schema for the name-bank REST API.
//!
//! DESIGN
//! ======
//! Response records are decoded leniently: identifiers may be any JSON
//! number or a string, text fields may be `null` or scalars, and feature data
//! may arrive as a flag mapping, a list, or a pre-joined string. Request bodies are strict and
//! always shaped the same way.
//!
//! The search endpoint answers with one of several envelopes;
//! [`parse_name_list`] is the only place that knows about them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Server-assigned record identifier.
///
/// Numbers keep their JSON form, so floats and values past `i64::MAX`
/// round-trip unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameId {
    Number(Number),
    Text(String),
}

impl From<i64> for NameId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral floats print without the trailing `.0`.
            Self::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < 1e15 => write!(f, "{x:.0}"),
                _ => write!(f, "{n}"),
            },
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Feature data as it appears on a record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Feature keys listed directly.
    List(Vec<String>),
    /// Flag mapping; only values that are exactly `true` count as set.
    Flags(Map<String, Value>),
    /// Pre-joined `", "` delimited feature keys.
    Text(String),
    /// Anything else the server sent.
    Other(Value),
}

impl FeatureValue {
    /// Keys whose flag value is exactly `true`, in mapping order.
    /// Empty for non-mapping shapes.
    pub fn true_keys(&self) -> Vec<String> {
        match self {
            Self::Flags(flags) => flags
                .iter()
                .filter(|(_, v)| **v == Value::Bool(true))
                .map(|(k, _)| k.clone())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// One name-bank entry as returned by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NameRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameid: Option<NameId>,
    /// Alternate identifier some responses use instead of `nameid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NameId>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namefeatures: Option<FeatureValue>,
    /// Alternate feature field used by older responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureValue>,
}

impl NameRecord {
    /// The record identity: `nameid`, falling back to `id`.
    pub fn identifier(&self) -> Option<&NameId> {
        self.nameid.as_ref().or(self.id.as_ref())
    }

    /// The feature value shown in the table: `namefeatures`, else `features`.
    pub fn feature_value(&self) -> Option<&FeatureValue> {
        self.namefeatures.as_ref().or(self.features.as_ref())
    }

    /// Notes text, empty when absent.
    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().unwrap_or_default()
    }
}

/// Body for `/search/searchnames`. Absent fields are omitted entirely.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namefeatures: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchCriteria {
    /// Unfiltered listing capped at `limit` rows.
    pub fn all(limit: u32) -> Self {
        Self { limit: Some(limit), ..Self::default() }
    }
}

/// Body for `/names/createname`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateNameRequest {
    pub name: String,
    pub category: String,
    pub notes: String,
    pub namefeatures: Map<String, Value>,
}

/// Body for `/names/updatename`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateNameRequest {
    pub nameid: NameId,
    pub name: String,
    pub category: String,
    pub notes: String,
    pub namefeatures: Map<String, Value>,
}

/// Body for `/names/deletename`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeleteNameRequest {
    pub nameid: NameId,
}

/// Normalize a search response into a record list.
///
/// Envelopes are tried in order: `{success, data}` with a truthy `success`,
/// a bare array, then `{names}`. The first match wins; anything else yields
/// an empty list. Elements that do not decode as records are skipped.
pub fn parse_name_list(response: &Value) -> Vec<NameRecord> {
    let rows = if is_truthy(response.get("success")) && is_present(response.get("data")) {
        response.get("data")
    } else if response.is_array() {
        Some(response)
    } else if is_present(response.get("names")) {
        response.get("names")
    } else {
        None
    };

    let Some(Value::Array(rows)) = rows else {
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| match NameRecord::deserialize(row) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("skipping malformed name record: {e}");
                None
            }
        })
        .collect()
}

fn is_present(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !v.is_null())
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Render a JSON value as display text: strings verbatim, `null` empty,
/// anything else in its JSON form.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.as_ref().map(value_text).unwrap_or_default())
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.as_ref().map(value_text))
}
