//! Networking modules for the name-bank REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema and
//! response normalization, and `error` holds the failure taxonomy.

pub mod api;
pub mod error;
pub mod types;
