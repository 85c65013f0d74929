//! API configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client talks to exactly one API server. The browser has no process
//! environment, so the base URL is baked in when the WASM bundle is built
//! (`SEEDLING_API_BASE_URL`) and falls back to a local development server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL must not be empty")]
    EmptyBaseUrl,
    #[error("API base URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build config from an explicit base URL, trimming trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URL is blank or not http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self { base_url })
    }

    /// Build config from the `SEEDLING_API_BASE_URL` value captured at
    /// compile time, or [`DEFAULT_API_BASE_URL`] when it was not set or is
    /// unusable.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("SEEDLING_API_BASE_URL"))
    }

    fn resolve(raw: Option<&str>) -> Self {
        match raw.map(Self::new) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("ignoring SEEDLING_API_BASE_URL: {e}");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_owned()));
    }
    Ok(trimmed.to_owned())
}
