//! Phantom Component
//!
//! Non-interactive copy of the dragged card that follows the pointer.

use leptos::prelude::*;

use crate::context::use_board;

#[component]
pub fn Phantom() -> impl IntoView {
    let ctx = use_board();

    move || {
        ctx.phantom().map(|ghost| {
            let style = format!(
                "position: fixed; left: {}px; top: {}px; width: {}px; pointer-events: none; opacity: {};",
                ghost.phantom.left, ghost.phantom.top, ghost.phantom.width, ghost.opacity
            );
            view! {
                <div class="card phantom" style=style>
                    <div class="content">{ghost.content}</div>
                </div>
            }
        })
    }
}
