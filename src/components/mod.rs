//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Modals own their form state and talk to the API client from context;
//! they report back to the dashboard only through callbacks. The table,
//! spinner and banner are presentational.

pub mod create_name_modal;
pub mod error_message;
pub mod form_fields;
pub mod loading_spinner;
pub mod modal_frame;
pub mod name_table;
pub mod search_names_modal;
pub mod update_name_modal;
