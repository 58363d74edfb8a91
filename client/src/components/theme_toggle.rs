//! Button that switches the page between light and dark mode.

use leptos::prelude::*;

use crate::state::theme::ThemeState;

/// Theme toggle button. The label names the mode a click switches to.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    // Keep the body class in step with state; effects only run in the browser.
    Effect::new(move || crate::util::dark_mode::apply(theme.with(|t| t.dark_mode)));

    let on_click = move |_| {
        let dark = theme.try_update(ThemeState::toggle).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        log::debug!("theme toggled: dark_mode={dark}");
        #[cfg(not(feature = "hydrate"))]
        let _ = dark;
    };

    view! {
        <button id="modeToggle" class="btn mode-toggle" type="button" on:click=on_click>
            {move || theme.with(|t| t.button_label())}
        </button>
    }
}
