//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`gallery`, `admin`, `ui`, `notice`). Each model
//! is a plain struct wrapped in one `RwSignal` provided from `app::App`, so a
//! component only subscribes to the concern it renders.

pub mod admin;
pub mod gallery;
pub mod notice;
pub mod ui;
