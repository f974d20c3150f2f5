use super::*;

#[test]
fn default_uses_placeholder_base_url() {
    assert_eq!(ApiConfig::default().base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_base_url_trims_trailing_slashes() {
    let cfg = ApiConfig::from_base_url("https://names.example.test/api//");
    assert_eq!(cfg.base_url, "https://names.example.test/api");
}

#[test]
fn from_optional_missing_falls_back_to_default() {
    assert_eq!(ApiConfig::from_optional(None), ApiConfig::default());
}

#[test]
fn from_optional_blank_falls_back_to_default() {
    assert_eq!(ApiConfig::from_optional(Some("   ")), ApiConfig::default());
}

#[test]
fn from_optional_uses_provided_value() {
    let cfg = ApiConfig::from_optional(Some(" http://localhost:8080/ "));
    assert_eq!(cfg.base_url, "http://localhost:8080");
}
