//! `/api/*` pass-through to the backend REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server. Requests under `/api/` are
//! replayed against `FOLIO_BACKEND_URL` with the same method, path, query and
//! body; only `content-type`, `authorization` and `accept` are carried over.
//! The upstream status, `content-type` and body are relayed unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Any failure to reach or read the backend becomes `502 Bad Gateway` with a
//! short JSON body; the page then falls back to its built-in works.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers forwarded to the backend.
pub const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("http client could not be built: {0}")]
    ClientBuild(String),
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api pass-through failed");
        let body = serde_json::json!({ "error": "backend unavailable" });
        (StatusCode::BAD_GATEWAY, axum::Json(body)).into_response()
    }
}

/// Forward one request to the backend and relay its response.
///
/// # Errors
///
/// Returns [`ProxyError::Upstream`] when the backend cannot be reached or its
/// body cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    let url = state.upstream_url(path_and_query);
    tracing::debug!(%method, %url, "forwarding api request");

    let mut request = state.http.request(method, &url);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name, value);
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}
