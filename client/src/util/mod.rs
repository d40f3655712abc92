//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Each helper compiles to a no-op (or a neutral value) without the
//! `hydrate` feature so SSR stays deterministic.

pub mod admin_token;
pub mod dom;
pub mod timers;
