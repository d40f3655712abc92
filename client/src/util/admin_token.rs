//! Admin token persistence in `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort browser-only behavior: a blocked or missing
//! `localStorage` just means the admin logs in again next visit. SSR paths
//! no-op.

#[cfg(test)]
#[path = "admin_token_test.rs"]
mod admin_token_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "adminToken";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the stored admin token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly issued token.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if storage.set_item(STORAGE_KEY, token).is_err() {
                log::warn!("admin token could not be stored");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored token (logout or rejected verification).
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if storage.remove_item(STORAGE_KEY).is_err() {
                log::warn!("admin token could not be cleared");
            }
        }
    }
}
