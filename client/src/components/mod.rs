//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio sections and overlays while reading and
//! writing shared state from Leptos context providers. Pure rules live in the
//! `gallery` crate; components only wire them to the DOM.

pub mod about;
pub mod admin_panel;
pub mod chrome;
pub mod contact_form;
pub mod cursor;
pub mod hero;
pub mod lightbox;
pub mod notification;
pub mod reveal;
pub mod site_header;
pub mod work_card;
pub mod works_section;
