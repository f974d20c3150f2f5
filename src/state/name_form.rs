//! Form state shared by the create and update name modals.
//!
//! DESIGN
//! ======
//! `NameForm` holds the field values and builds request bodies;
//! `NameFormState` pairs it with submission status and owns the
//! submit/success/failure/close transitions. Components only move values
//! between these structs and the DOM.

#[cfg(test)]
#[path = "name_form_test.rs"]
mod name_form_test;

use std::time::Duration;

use serde_json::Value;

use crate::net::error::ApiError;
use crate::net::types::{CreateNameRequest, FeatureValue, NameId, NameRecord, UpdateNameRequest};
use crate::util::vocabulary::feature_flags;

pub const CREATE_SUCCESS_MESSAGE: &str = "Name created successfully!";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create name. Please try again.";
pub const UPDATE_SUCCESS_MESSAGE: &str = "Name updated successfully!";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update name. Please try again.";

/// How long the success message stays up before the parent is notified.
pub const SUCCESS_CLOSE_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NameForm {
    /// Read-only identifier; set only when editing an existing record.
    pub nameid: Option<NameId>,
    pub name: String,
    pub category: String,
    pub notes: String,
    /// Checked feature keys in the order they were checked.
    pub features: Vec<String>,
}

impl NameForm {
    /// Derive form values from a record being edited.
    ///
    /// Features come from, in order: the `true` keys of a `namefeatures`
    /// mapping, a `features` list, or a `features` string split on `", "`.
    pub fn from_record(record: &NameRecord) -> Self {
        let features = match (&record.namefeatures, &record.features) {
            (Some(flags @ FeatureValue::Flags(_)), _) => flags.true_keys(),
            (_, Some(FeatureValue::List(list))) => list.clone(),
            (_, Some(FeatureValue::Text(text))) => text
                .split(", ")
                .filter(|part| !part.trim().is_empty())
                .map(str::to_owned)
                .collect(),
            _ => Vec::new(),
        };
        Self {
            nameid: record.identifier().cloned(),
            name: record.name.clone(),
            category: record.category.clone(),
            notes: record.notes_text().to_owned(),
            features,
        }
    }

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

    /// Name and category are both required.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.category.is_empty()
    }

    pub fn to_create_request(&self) -> CreateNameRequest {
        CreateNameRequest {
            name: self.name.clone(),
            category: self.category.clone(),
            notes: self.notes.clone(),
            namefeatures: feature_flags(&self.features),
        }
    }

    /// `None` when the form has no identifier to update.
    pub fn to_update_request(&self) -> Option<UpdateNameRequest> {
        Some(UpdateNameRequest {
            nameid: self.nameid.clone()?,
            name: self.name.clone(),
            category: self.category.clone(),
            notes: self.notes.clone(),
            namefeatures: feature_flags(&self.features),
        })
    }
}

/// What a close request turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    /// A request is in flight; the modal stays open.
    Ignored,
    /// Closed without saving.
    Dismissed,
    /// Closed during the post-save delay; the save is reported now.
    Saved,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NameFormState {
    pub form: NameForm,
    pub busy: bool,
    /// Saved and waiting out [`SUCCESS_CLOSE_DELAY`]; nothing can be submitted.
    pub saved: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl NameFormState {
    pub fn for_record(record: &NameRecord) -> Self {
        Self { form: NameForm::from_record(record), ..Self::default() }
    }

    /// Submit is offered only when idle and the required fields are filled.
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.saved && self.form.is_complete()
    }

    /// Mark a submission in flight. Returns `false` if one cannot start.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.busy = true;
        self.error = None;
        self.success = None;
        true
    }

    /// Apply a create completion. On success the fields reset; returns
    /// whether the parent should be notified after [`SUCCESS_CLOSE_DELAY`].
    pub fn finish_create(&mut self, result: &Result<Value, ApiError>) -> bool {
        self.busy = false;
        match result {
            Ok(_) => {
                self.saved = true;
                self.success = Some(CREATE_SUCCESS_MESSAGE.to_owned());
                self.form = NameForm::default();
                true
            }
            Err(_) => {
                self.error = Some(CREATE_FAILED_MESSAGE.to_owned());
                false
            }
        }
    }

    /// Apply an update completion; field values are kept either way.
    pub fn finish_update(&mut self, result: &Result<Value, ApiError>) -> bool {
        self.busy = false;
        match result {
            Ok(_) => {
                self.saved = true;
                self.success = Some(UPDATE_SUCCESS_MESSAGE.to_owned());
                true
            }
            Err(_) => {
                self.error = Some(UPDATE_FAILED_MESSAGE.to_owned());
                false
            }
        }
    }

    /// Reset everything for a close request. Ignored while busy. Closing
    /// during the post-save delay consumes the pending save notification.
    pub fn close(&mut self) -> CloseOutcome {
        if self.busy {
            return CloseOutcome::Ignored;
        }
        let outcome = if self.saved { CloseOutcome::Saved } else { CloseOutcome::Dismissed };
        *self = Self::default();
        outcome
    }

    /// Claim the pending save notification after the delay. Returns `false`
    /// when a close already reported it.
    pub fn take_saved(&mut self) -> bool {
        std::mem::take(&mut self.saved)
    }
}
