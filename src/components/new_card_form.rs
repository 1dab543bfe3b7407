//! New Card Form Component
//!
//! Add-card button that opens an inline form for one column.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::use_board;

#[component]
pub fn NewCardForm(column_id: String) -> impl IntoView {
    let ctx = use_board();

    let (is_open, set_is_open) = signal(false);
    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();

    // Focus once the form is visible
    Effect::new(move |_| {
        if is_open.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let create_card = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        // Blank text keeps the form open
        if ctx.create_card(&column_id, &text).is_some() {
            set_new_text.set(String::new());
            set_is_open.set(false);
        }
    };

    view! {
        <button
            type="button"
            class="add-card-button"
            style=move || if is_open.get() { "display: none;" } else { "display: block;" }
            on:click=move |_| set_is_open.set(true)
        >
            "+ Add another card"
        </button>

        <form
            class="card-form"
            style=move || if is_open.get() { "display: block;" } else { "display: none;" }
            on:submit=create_card
        >
            <input
                type="text"
                class="text-input"
                placeholder="Enter a title for this card..."
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <div class="card-form-actions">
                <button type="submit">"Add card"</button>
                <button type="button" class="close-form" on:click=move |_| set_is_open.set(false)>
                    "✗"
                </button>
            </div>
        </form>
    }
}
