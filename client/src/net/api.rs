//! REST API helpers for the portfolio backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The works fetch reports a typed `LoadError` because the caller turns it
//! into a catalog fallback. Everything else returns `Option`/`Result<_, String>`
//! so failures become a toast, never a panic during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gallery::error::LoadError;
use gallery::forms::ContactForm;
use gallery::work::WorkItem;

use super::types::AdminLoginResponse;

pub const WORKS_ENDPOINT: &str = "/api/works";
pub const CONTACT_ENDPOINT: &str = "/api/contact";
pub const ADMIN_LOGIN_ENDPOINT: &str = "/api/admin/login";
pub const ADMIN_VERIFY_ENDPOINT: &str = "/api/admin/verify";
pub const ADMIN_LOGOUT_ENDPOINT: &str = "/api/admin/logout";

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Parse a `/api/works` body. Rows may carry fields the UI ignores.
#[cfg(any(test, feature = "hydrate"))]
fn decode_works(body: &str) -> Result<Vec<WorkItem>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16) -> String {
    format!("contact request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if status == 401 { "invalid password".to_owned() } else { format!("login failed: {status}") }
}

#[cfg(any(test, feature = "hydrate"))]
fn create_work_failed_message(status: u16) -> String {
    format!("add work failed: {status}")
}

/// Fetch the work list with one `GET /api/works`. No retry.
///
/// # Errors
///
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn fetch_works() -> Result<Vec<WorkItem>, LoadError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(WORKS_ENDPOINT)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(LoadError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| LoadError::Transport(e.to_string()))?;
        decode_works(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(LoadError::Transport("not available on server".to_owned()))
    }
}

/// Submit the contact form via `POST /api/contact`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn send_contact(form: &ContactForm) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(contact_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err("not available on server".to_owned())
    }
}

/// Exchange the admin password for a token via `POST /api/admin/login`.
///
/// # Errors
///
/// Returns `"invalid password"` on 401, or another error string.
pub async fn admin_login(password: &str) -> Result<AdminLoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::AdminLoginRequest { password };
        let resp = gloo_net::http::Request::post(ADMIN_LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<AdminLoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = password;
        Err("not available on server".to_owned())
    }
}

/// Check a stored token with `GET /api/admin/verify`.
///
/// `Some(valid)` when the backend answered, `None` when it could not be
/// reached (the token is then neither trusted nor discarded).
pub async fn verify_admin(token: &str) -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ADMIN_VERIFY_ENDPOINT)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .ok()?;
        Some(resp.ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Revoke a token via `POST /api/admin/logout`. Best effort.
pub async fn admin_logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(ADMIN_LOGOUT_ENDPOINT)
            .header("Authorization", &bearer(token))
            .send()
            .await
        {
            log::warn!("admin logout request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Upload a new work as multipart `POST /api/works`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
#[cfg(feature = "hydrate")]
pub async fn create_work(token: &str, form: &web_sys::FormData) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(WORKS_ENDPOINT)
        .header("Authorization", &bearer(token))
        .body(form.clone())
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(create_work_failed_message(resp.status()));
    }
    Ok(())
}
