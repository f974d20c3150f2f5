//! # namebank
//!
//! Leptos + WASM admin dashboard for the Name Bank service.
//!
//! This crate contains the dashboard page, its table and modal components,
//! the pure state transitions behind them, and the REST client that talks
//! to the name bank backend. Browser-only code sits behind the `csr`
//! feature so the state and wire logic test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
