//! Which dashboard modal is open.
//!
//! DESIGN
//! ======
//! A single value with one variant per modal, so at most one modal can be
//! open. The update variant carries the record being edited.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::net::types::NameRecord;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    CreateOpen,
    UpdateOpen(NameRecord),
    SearchOpen,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalEvent {
    OpenCreate,
    OpenUpdate(NameRecord),
    OpenSearch,
    Close,
}

impl ModalState {
    /// Next state after `event`. Opening any modal replaces the current one.
    #[must_use]
    pub fn apply(self, event: ModalEvent) -> Self {
        match event {
            ModalEvent::OpenCreate => Self::CreateOpen,
            ModalEvent::OpenUpdate(record) => Self::UpdateOpen(record),
            ModalEvent::OpenSearch => Self::SearchOpen,
            ModalEvent::Close => Self::Closed,
        }
    }
}
