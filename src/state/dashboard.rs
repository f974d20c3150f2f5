//! Dashboard list state: records, filter text, fetch status.
//!
//! DESIGN
//! ======
//! Every fetch takes a sequence token from `begin_fetch`. Completions carrying
//! an older token are dropped, so a slow response can never overwrite a newer
//! listing or a search result set.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::error::ApiError;
use crate::net::types::NameRecord;

/// Row cap for the unfiltered listing.
pub const FETCH_LIMIT: u32 = 50;
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch names. Please try again.";
pub const SEARCH_RESULTS_STATUS: &str = "Active search results";
pub const SEARCH_EMPTY_STATUS: &str = "No results found";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub names: Vec<NameRecord>,
    pub search_text: String,
    pub loading: bool,
    pub error: Option<String>,
    /// Status line shown while search results replace the listing.
    pub search_status: Option<String>,
    pub fetch_seq: u64,
}

impl DashboardState {
    /// Start a fetch: set loading, clear the error, return the new token.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.error = None;
        self.fetch_seq
    }

    /// Apply a fetch completion. Returns `false` when `seq` is stale and the
    /// result was ignored.
    pub fn finish_fetch(&mut self, seq: u64, result: Result<Vec<NameRecord>, ApiError>) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(names) => {
                self.names = names;
                self.error = None;
            }
            Err(_) => self.error = Some(FETCH_FAILED_MESSAGE.to_owned()),
        }
        true
    }

    /// Replace the listing with a search result set. Any fetch still in
    /// flight is invalidated.
    pub fn apply_search_results(&mut self, results: Vec<NameRecord>) {
        self.fetch_seq += 1;
        self.loading = false;
        let status = if results.is_empty() { SEARCH_EMPTY_STATUS } else { SEARCH_RESULTS_STATUS };
        self.search_status = Some(status.to_owned());
        self.names = results;
    }

    /// Drop the active search and start a fresh unfiltered fetch.
    pub fn clear_search(&mut self) -> u64 {
        self.search_status = None;
        self.begin_fetch()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Rows matching the current filter text.
    pub fn visible_names(&self) -> Vec<NameRecord> {
        filter_names(&self.names, &self.search_text)
    }

    /// Nothing to show yet; the full-area spinner replaces the table.
    pub fn is_initial_load(&self) -> bool {
        self.loading && self.names.is_empty()
    }

    /// Reloading over existing rows; the table stays with an inline spinner.
    pub fn is_refreshing(&self) -> bool {
        self.loading && !self.names.is_empty()
    }

    /// Placeholder text for an empty table.
    pub fn empty_message(&self) -> String {
        if self.search_text.is_empty() {
            "No names available".to_owned()
        } else {
            format!("No names found matching \"{}\"", self.search_text)
        }
    }
}

/// Case-insensitive substring match on `name` or `category`.
/// Empty `text` returns every record.
pub fn filter_names(names: &[NameRecord], text: &str) -> Vec<NameRecord> {
    if text.is_empty() {
        return names.to_vec();
    }
    let needle = text.to_lowercase();
    names
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle) || r.category.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
