//! Site server configuration.
//!
//! DESIGN
//! ======
//! Configuration is read from `FOLIO_*` environment variables (a `.env` file
//! is loaded first by `main`). Parsing goes through a lookup function so the
//! rules can be tested without touching the process environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `FOLIO_PORT` | `3000` |
//! | `FOLIO_BACKEND_URL` | `http://127.0.0.1:8000` |
//! | `FOLIO_ASSETS_DIR` | `./public` |
//! | `FOLIO_MAX_UPLOAD_BYTES` | 10 MiB |
//! | `FOLIO_PROXY_TIMEOUT_SECS` | `30` |

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_ASSETS_DIR: &str = "./public";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
    #[error("FOLIO_BACKEND_URL must start with http:// or https://, got '{0}'")]
    InvalidBackendUrl(String),
}

/// Typed server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Backend REST origin without a trailing slash.
    pub backend_url: String,
    /// Directory served for everything not matched by a route (images, uploads, favicon).
    pub assets_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub proxy_timeout_secs: u64,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("FOLIO_PORT", get("FOLIO_PORT"), DEFAULT_PORT)?;
        let backend_url = get("FOLIO_BACKEND_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(backend_url));
        }
        let assets_dir = PathBuf::from(get("FOLIO_ASSETS_DIR").unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_owned()));
        let max_upload_bytes =
            parse_or("FOLIO_MAX_UPLOAD_BYTES", get("FOLIO_MAX_UPLOAD_BYTES"), DEFAULT_MAX_UPLOAD_BYTES)?;
        let proxy_timeout_secs =
            parse_or("FOLIO_PROXY_TIMEOUT_SECS", get("FOLIO_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;

        Ok(Self { port, backend_url, assets_dir, max_upload_bytes, proxy_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
