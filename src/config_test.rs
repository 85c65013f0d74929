use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ApiConfig::new("https://api.example.test:3000//").unwrap();
    assert_eq!(cfg.base_url, "https://api.example.test:3000");
}

#[test]
fn new_rejects_blank_url() {
    assert_eq!(ApiConfig::new("   "), Err(ConfigError::EmptyBaseUrl));
}

#[test]
fn new_rejects_non_http_scheme() {
    let err = ApiConfig::new("ftp://files.example.test").unwrap_err();
    assert!(err.to_string().contains("http:// or https://"));
}

#[test]
fn resolve_defaults_when_unset() {
    assert_eq!(ApiConfig::resolve(None).base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_falls_back_on_invalid_value() {
    assert_eq!(ApiConfig::resolve(Some("not a url")).base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_uses_valid_value() {
    assert_eq!(ApiConfig::resolve(Some("http://10.0.0.5:3000/")).base_url, "http://10.0.0.5:3000");
}
