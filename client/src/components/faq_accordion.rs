//! Collapsible FAQ list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each question is a button whose sibling answer gains the `active` class
//! while open. Open state lives in `FaqState`, keyed by entry index.

use leptos::prelude::*;

use crate::content::{FAQ_ENTRIES, FaqEntry};
use crate::state::faq::{ACTIVE_CLASS, FaqState};

/// FAQ section rendering every entry in `FAQ_ENTRIES`.
#[component]
pub fn FaqAccordion() -> impl IntoView {
    view! {
        <section class="faq">
            <h2>"Frequently Asked Questions"</h2>
            {FAQ_ENTRIES
                .iter()
                .enumerate()
                .map(|(index, entry)| view! { <FaqItem index=index entry=entry/> })
                .collect_view()}
        </section>
    }
}

#[component]
fn FaqItem(index: usize, entry: &'static FaqEntry) -> impl IntoView {
    let faq = expect_context::<RwSignal<FaqState>>();

    view! {
        <div class="faq-item">
            <button
                class="faq-question"
                type="button"
                on:click=move |_| {
                    faq.update(|f| {
                        f.toggle(index);
                    });
                }
            >
                {entry.question}
            </button>
            <div class=move || {
                if faq.with(|f| f.is_open(index)) {
                    format!("faq-answer {ACTIVE_CLASS}")
                } else {
                    "faq-answer".to_owned()
                }
            }>
                <p>{entry.answer}</p>
            </div>
        </div>
    }
}
