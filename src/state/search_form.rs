//! Advanced search form state.
//!
//! Unlike create/update, the feature mapping is only sent when at least one
//! feature is checked; an unchecked form sends no feature filter at all.

#[cfg(test)]
#[path = "search_form_test.rs"]
mod search_form_test;

use crate::net::error::ApiError;
use crate::net::types::{NameRecord, SearchCriteria};
use crate::util::vocabulary::feature_flags;

pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search names. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchForm {
    /// Empty means all categories.
    pub category: String,
    pub features: Vec<String>,
}

impl SearchForm {
    pub fn has_feature(&self, key: &str) -> bool {
        self.features.iter().any(|f| f == key)
    }

    pub fn toggle_feature(&mut self, key: &str) {
        if self.has_feature(key) {
            self.features.retain(|f| f != key);
        } else {
            self.features.push(key.to_owned());
        }
    }

    pub fn to_criteria(&self) -> SearchCriteria {
        SearchCriteria {
            category: (!self.category.is_empty()).then(|| self.category.clone()),
            namefeatures: (!self.features.is_empty()).then(|| feature_flags(&self.features)),
            limit: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchFormState {
    pub form: SearchForm,
    pub busy: bool,
    pub error: Option<String>,
}

impl SearchFormState {
    /// Start a search and return its criteria, or `None` if one is running.
    pub fn begin_submit(&mut self) -> Option<SearchCriteria> {
        if self.busy {
            return None;
        }
        self.busy = true;
        self.error = None;
        Some(self.form.to_criteria())
    }

    /// Apply a search completion. Successful results are handed back for
    /// the parent and the form resets; failures keep the form open.
    pub fn finish(&mut self, result: Result<Vec<NameRecord>, ApiError>) -> Option<Vec<NameRecord>> {
        self.busy = false;
        match result {
            Ok(results) => {
                *self = Self::default();
                Some(results)
            }
            Err(_) => {
                self.error = Some(SEARCH_FAILED_MESSAGE.to_owned());
                None
            }
        }
    }

    /// "Clear Filters": reset selections and error, stay open.
    pub fn clear_filters(&mut self) {
        self.form = SearchForm::default();
        self.error = None;
    }

    /// Reset for a close request. Ignored while busy.
    pub fn close(&mut self) -> bool {
        if self.busy {
            return false;
        }
        *self = Self::default();
        true
    }
}
