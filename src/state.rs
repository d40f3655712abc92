//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! site server keeps no data of its own; it only holds the HTTP client and
//! the backend origin used by the `/api` pass-through.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::proxy::ProxyError;

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Shared application state. Clone is required by Axum; the client is
/// internally reference counted.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend origin without a trailing slash.
    pub backend_url: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`ProxyError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }

    /// Backend URL for an incoming path and query, e.g. `/api/works?x=1`.
    pub fn upstream_url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.backend_url)
    }
}
