//! API endpoint configuration resolved at build time.
//!
//! The WASM bundle has no process environment at runtime, so the base URL is
//! captured from `NAMEBANK_API_BASE_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://api.example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_base_url(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Build config from the `NAMEBANK_API_BASE_URL` value captured at
    /// compile time, falling back to [`DEFAULT_API_BASE_URL`].
    pub fn from_env() -> Self {
        Self::from_optional(option_env!("NAMEBANK_API_BASE_URL"))
    }

    /// Build config from an explicit base URL. Trailing slashes are trimmed.
    pub fn from_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    fn from_optional(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if !value.is_empty() => Self::from_base_url(value),
            _ => Self::default(),
        }
    }
}
