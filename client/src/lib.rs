//! # landing-client
//!
//! Leptos + WASM frontend for the landing page: a dark-mode toggle, a
//! collapsible FAQ, and a registration form with inline validation.
//!
//! Validation rules live in `validation` as pure functions, view-model state
//! lives in `state`, and `components` only translate that state into DOM
//! classes and text.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;
pub mod validation;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
