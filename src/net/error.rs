//! Error taxonomy for name-bank API calls.
//!
//! ERROR HANDLING
//! ==============
//! These errors are logged, never displayed. UI surfaces map every variant
//! to the same generic "please try again" message for the action at hand.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Network calls are only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}
