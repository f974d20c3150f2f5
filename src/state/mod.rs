//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain struct with pure transition methods. Pages and
//! components wrap them in `RwSignal`s, which keeps the behavior testable
//! without a browser.

pub mod dashboard;
pub mod modal;
pub mod name_form;
pub mod search_form;
pub mod table;
