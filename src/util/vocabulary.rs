//! Fixed category and feature-flag vocabularies embedded in the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server does not publish its vocabulary, so the forms, the search
//! criteria builder and the request builders all read from these tables.
//! Feature mappings sent to the server always carry every known flag, in
//! table order.

#[cfg(test)]
#[path = "vocabulary_test.rs"]
mod vocabulary_test;

use serde_json::{Map, Value};

/// Categories offered by the create, update and search forms.
pub const CATEGORIES: [&str; 22] = [
    "aitechnology",
    "beauty",
    "beveragesna",
    "confectionary",
    "energyutilities",
    "entertainment",
    "fashion",
    "financeinvestment",
    "fragrance",
    "grocery",
    "healthpharma",
    "insurance",
    "neobanksfintech",
    "personalcare",
    "pets",
    "propertyrealest",
    "retailecomm",
    "sportfitness",
    "technology",
    "telcointernet",
    "travelhospitality",
    "wellness",
];

/// A boolean style descriptor and its checkbox label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureFlag {
    pub key: &'static str,
    pub label: &'static str,
}

/// The closed set of feature flags, in display and wire order.
pub const FEATURES: [FeatureFlag; 17] = [
    FeatureFlag { key: "realword", label: "Real Word" },
    FeatureFlag { key: "composite", label: "Composite" },
    FeatureFlag { key: "lightlycoined", label: "Lightly Coined" },
    FeatureFlag { key: "coined", label: "Coined" },
    FeatureFlag { key: "alphanumeric", label: "Alphanumeric" },
    FeatureFlag { key: "oneword", label: "One Word" },
    FeatureFlag { key: "twowords", label: "Two Words" },
    FeatureFlag { key: "professional", label: "Professional" },
    FeatureFlag { key: "personable", label: "Personable" },
    FeatureFlag { key: "hightech", label: "High Tech" },
    FeatureFlag { key: "sensory", label: "Sensory" },
    FeatureFlag { key: "accessible", label: "Accessible" },
    FeatureFlag { key: "sophisticated", label: "Sophisticated" },
    FeatureFlag { key: "trusted", label: "Trusted" },
    FeatureFlag { key: "optimistic", label: "Optimistic" },
    FeatureFlag { key: "descriptive", label: "Descriptive" },
    FeatureFlag { key: "playful", label: "Playful" },
];

/// Whether `category` is one of the known categories.
pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

/// A non-empty category outside the known list, kept selectable while editing.
pub fn unlisted_category(category: &str) -> Option<String> {
    (!category.is_empty() && !is_known_category(category)).then(|| category.to_owned())
}

/// Display label for a feature key, falling back to the key itself.
pub fn feature_label(key: &str) -> &str {
    FEATURES
        .iter()
        .find(|flag| flag.key == key)
        .map_or(key, |flag| flag.label)
}

/// Build the full flag mapping: `true` for every selected key, `false` for
/// every other known key. Selected keys outside the vocabulary are dropped.
pub fn feature_flags<S: AsRef<str>>(selected: &[S]) -> Map<String, Value> {
    FEATURES
        .iter()
        .map(|flag| {
            let checked = selected.iter().any(|s| s.as_ref() == flag.key);
            (flag.key.to_owned(), Value::Bool(checked))
        })
        .collect()
}
