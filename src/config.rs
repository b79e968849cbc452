//! Client configuration captured at build time.
//!
//! The API base URL is baked into the WASM bundle from `PARKING_API_URL`
//! when the crate is compiled, the same way bundlers inline `VITE_*` values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Errors produced while validating configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The configured API base URL is empty.
    #[error("API base URL is empty")]
    EmptyBaseUrl,

    /// The configured API base URL does not use http or https.
    #[error("API base URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every API path is appended to, without a trailing `/`.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `PARKING_API_URL`: default `http://localhost:5000/api`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the captured URL is empty or not http(s).
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_base_url(option_env!("PARKING_API_URL"))
    }

    /// Build config from an optional raw base URL.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `raw` is present but empty or not http(s).
    pub fn from_base_url(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_owned()));
        }
        Ok(Self { api_base_url: trimmed.to_owned() })
    }
}
