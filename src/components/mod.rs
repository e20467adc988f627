//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared widgets while reading shared
//! state from Leptos context providers; route-level orchestration stays in
//! `pages`.

pub mod footer;
pub mod navbar;
pub mod project_card;
pub mod project_form;
pub mod protected;
pub mod toaster;
