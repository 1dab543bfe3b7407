//! Card Component
//!
//! A single card: content plus close button. Pointer-down starts a drag.

use leptos::prelude::*;

use kanban_core::Card;
use leptos_dragdrop::{mouse_point, target_within, touch_point, CLOSE_BUTTON_SELECTOR};

use crate::context::use_board;

#[component]
pub fn CardView(card: Card) -> impl IntoView {
    let ctx = use_board();

    let id = card.id.clone();
    let lifted_id = id.clone();
    // The lifted card stays in the DOM (touch events keep their target) but takes no space
    let card_class = move || {
        if ctx.dragged_id().as_deref() == Some(lifted_id.as_str()) {
            "card lifted"
        } else {
            "card"
        }
    };

    let mouse_id = id.clone();
    let on_mousedown = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || target_within(ev.target(), CLOSE_BUTTON_SELECTOR) {
            return;
        }
        // No text selection while dragging
        ev.prevent_default();
        ctx.begin_drag(&mouse_id, ev.target(), mouse_point(&ev));
    };

    let touch_id = id.clone();
    let on_touchstart = move |ev: web_sys::TouchEvent| {
        if target_within(ev.target(), CLOSE_BUTTON_SELECTOR) {
            return;
        }
        // Suppress the emulated mousedown/mouseup that would follow the tap
        ev.prevent_default();
        if let Some(point) = touch_point(&ev) {
            ctx.begin_drag(&touch_id, ev.target(), point);
        }
    };

    let remove_id = id.clone();

    view! {
        <div
            class=card_class
            data-id=id
            data-column=card.column_id
            on:mousedown=on_mousedown
            on:touchstart=on_touchstart
        >
            <div class="content">{card.content}</div>
            <div class="btn-close-card">
                <button
                    class="close-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.remove_card(&remove_id);
                    }
                >
                    "✗"
                </button>
            </div>
        </div>
    }
}
