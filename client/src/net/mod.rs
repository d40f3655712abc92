//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! All requests go to same-origin `/api/*`; the site server forwards them to
//! the backend. `api` issues the calls and `types` holds the admin payloads.

pub mod api;
pub mod types;
