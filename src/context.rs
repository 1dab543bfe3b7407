//! Board Context
//!
//! Shared handle provided via Leptos Context API. Turns DOM input into
//! calls on the board store and owns the drag's document listeners.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use kanban_core::{Card, ColumnEntry, DragStart, Point};
use leptos_dragdrop::{
    closest, column_at, create_drag_binding, element_rect, probe_at, DragBinding, PointerPhase,
    CARDS_CONTAINER_SELECTOR, CARD_SELECTOR,
};

use crate::store::{self, AppStore, PhantomView};

#[derive(Clone, Copy)]
pub struct BoardContext {
    store: AppStore,
    binding: DragBinding,
}

/// Get the board context; provided by `App`
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}

impl BoardContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            binding: create_drag_binding(),
        }
    }

    pub fn column_entries(&self, column_id: &str) -> Vec<ColumnEntry> {
        store::store_column_entries(&self.store, column_id)
    }

    pub fn dragged_id(&self) -> Option<String> {
        store::store_dragged_id(&self.store)
    }

    pub fn phantom(&self) -> Option<PhantomView> {
        store::store_phantom(&self.store)
    }

    pub fn last_error(&self) -> Option<String> {
        store::store_last_error(&self.store)
    }

    pub fn dismiss_error(&self) {
        store::store_dismiss_error(&self.store);
    }

    pub fn create_card(&self, column_id: &str, text: &str) -> Option<Card> {
        store::store_create_card(&self.store, column_id, text)
    }

    pub fn remove_card(&self, card_id: &str) {
        store::store_remove_card(&self.store, card_id);
    }

    /// Pointer-down inside a card element. Ignored while another drag is active.
    pub fn begin_drag(&self, card_id: &str, target: Option<web_sys::EventTarget>, pointer: Point) {
        if store::store_is_dragging_untracked(&self.store) {
            return;
        }
        let Some(card_el) = target
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| closest(&el, CARD_SELECTOR))
        else {
            return;
        };
        let card_rect = element_rect(&card_el);
        let container_top = closest(&card_el, CARDS_CONTAINER_SELECTOR)
            .map(|container| element_rect(&container).top)
            .unwrap_or(card_rect.top);

        let start = DragStart {
            pointer,
            card_rect,
            container_top,
        };
        if !store::store_start_drag(&self.store, card_id, start) {
            return;
        }

        let ctx = *self;
        let bound = self.binding.bind(move |phase| match phase {
            PointerPhase::Move(point) => ctx.pointer_moved(point),
            PointerPhase::End(point) => ctx.pointer_released(point),
        });
        if !bound {
            store::store_cancel_drag(&self.store);
        }
    }

    fn pointer_moved(&self, point: Point) {
        let hover = probe_at(point);
        store::store_drag_move(&self.store, point, hover.as_ref());
    }

    fn pointer_released(&self, point: Option<Point>) {
        self.binding.release();
        let over = point.and_then(column_at);
        store::store_drop(&self.store, over.as_deref());
    }
}
