//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections while reading/writing shared state from
//! Leptos context providers.

pub mod faq_accordion;
pub mod registration_form;
pub mod theme_toggle;
