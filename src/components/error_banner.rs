//! Error Banner Component
//!
//! Shows the last failed board mutation until dismissed.

use leptos::prelude::*;

use crate::context::use_board;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_board();

    move || {
        ctx.last_error().map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <span>{message}</span>
                    <button class="close-btn" on:click=move |_| ctx.dismiss_error()>"✗"</button>
                </div>
            }
        })
    }
}
