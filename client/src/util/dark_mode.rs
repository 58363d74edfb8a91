//! Dark mode body-class adapter.
//!
//! Adds or removes the `dark-mode` class on `<body>`. Requires a browser
//! environment; the preference is never written to storage, so every page
//! load starts light.
//!
//! TRADE-OFFS
//! ==========
//! SSR and native test builds have no document, so these helpers no-op there
//! and the server-rendered markup stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
use crate::state::theme::DARK_MODE_CLASS;

/// Apply or clear the dark-mode class on `<body>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let classes = body.class_list();
        let _ = if enabled {
            classes.add_1(DARK_MODE_CLASS)
        } else {
            classes.remove_1(DARK_MODE_CLASS)
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
