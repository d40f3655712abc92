//! REST DTOs for the admin endpoints.
//!
//! Work rows and the contact body are `gallery` types (`WorkItem`,
//! `ContactForm`); only the admin session payloads live here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/admin/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdminLoginRequest<'a> {
    pub password: &'a str,
}

/// Successful login: a bearer token and its expiry (ISO-8601, backend local time).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}
