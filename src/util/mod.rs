//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `vocabulary` holds the embedded category/feature tables, `display` formats
//! record fields for the table, and `timer` isolates the browser-only delay
//! used after successful saves.

pub mod display;
pub mod timer;
pub mod vocabulary;
