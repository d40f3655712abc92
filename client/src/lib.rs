//! # client
//!
//! Leptos + WASM frontend for the folio portfolio site.
//!
//! The page is server-rendered by the `folio` binary (feature `ssr`) and then
//! hydrated in the browser (feature `hydrate`). All gallery behavior (catalog,
//! filtering, pagination, lightbox transitions, input mapping) lives in the
//! DOM-free `gallery` crate; this crate renders it and wires browser events,
//! timers and REST calls into it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` provides the shared `RwSignal` contexts, `pages::home` orchestrates
//! startup (catalog load, admin token check, global shortcuts), `components`
//! render page sections, `net` talks to the backend through the site server's
//! `/api` pass-through, and `util` isolates `web-sys` access.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already initialized".into());
    }
    leptos::mount::hydrate_body(app::App);
}
