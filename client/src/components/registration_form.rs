//! Registration form with inline validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin adapter over `RegistrationState`: every input event revalidates its
//! own field, submit validates all three, and the view mirrors the resulting
//! statuses as the `invalid` class plus the adjacent `.error` text.

use leptos::prelude::*;

use crate::state::registration::RegistrationState;
use crate::validation::Field;

/// Registration form with name, email, and password inputs.
#[component]
pub fn RegistrationForm() -> impl IntoView {
    let form = expect_context::<RwSignal<RegistrationState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = form.try_update(RegistrationState::submit).unwrap_or(false);
        #[cfg(feature = "hydrate")]
        log::debug!("registration submitted: accepted={accepted}");
        #[cfg(not(feature = "hydrate"))]
        let _ = accepted;
    };

    let message_color = move || form.with(|f| f.message.map_or("", |m| m.kind.color()));
    let message_text = move || form.with(|f| f.message.map_or("", |m| m.text));

    view! {
        <form id="userForm" class="registration-form" novalidate=true on:submit=on_submit>
            <h2>"Register"</h2>
            <FormField field=Field::Name/>
            <FormField field=Field::Email/>
            <FormField field=Field::Password/>
            <button class="btn" type="submit">"Submit"</button>
            <p id="formMessage" class="form-message" style:color=message_color>
                {message_text}
            </p>
        </form>
    }
}

/// Element id, label text, and input type for each field.
fn field_markup(field: Field) -> (&'static str, &'static str, &'static str) {
    match field {
        Field::Name => ("name", "Name", "text"),
        Field::Email => ("email", "Email", "email"),
        Field::Password => ("password", "Password", "password"),
    }
}

#[component]
fn FormField(field: Field) -> impl IntoView {
    let form = expect_context::<RwSignal<RegistrationState>>();
    let (id, label, input_type) = field_markup(field);

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                name=id
                type=input_type
                class=move || if form.with(|f| f.status(field).is_invalid()) { "invalid" } else { "" }
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| {
                        f.set_value(field, value);
                    });
                }
            />
            <span class="error">{move || form.with(|f| f.status(field).error_text())}</span>
        </div>
    }
}
