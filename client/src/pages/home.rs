//! Landing page: theme toggle, FAQ, and registration form.

use leptos::prelude::*;

use crate::components::faq_accordion::FaqAccordion;
use crate::components::registration_form::RegistrationForm;
use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Welcome"</h1>
                <ThemeToggle/>
            </header>
            <main class="page-main">
                <FaqAccordion/>
                <RegistrationForm/>
            </main>
        </div>
    }
}
