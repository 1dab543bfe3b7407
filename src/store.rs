//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use kanban_core::{
    generate_card_id, Card, ColumnEntry, DomainError, DragStart, DropOutcome, HoverProbe, Kanban,
    Phantom, Point,
};

use crate::storage::LocalStorageStore;

/// Global application state with field-level reactivity
#[derive(Debug, Store)]
pub struct AppState {
    /// Board, drag session and persistence
    pub kanban: Kanban<LocalStorageStore>,
    /// Last failed mutation, shown until dismissed
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new(kanban: Kanban<LocalStorageStore>) -> Self {
        Self {
            kanban,
            last_error: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Phantom geometry plus what it shows
#[derive(Debug, Clone, PartialEq)]
pub struct PhantomView {
    pub phantom: Phantom,
    pub content: String,
    pub opacity: f64,
}

// ========================
// Store Helper Functions
// ========================

fn record_error(store: &AppStore, action: &str, err: DomainError) {
    log::error!("{} failed: {}", action, err);
    *store.last_error().write() = Some(format!("Could not {}: {}", action, err));
}

pub fn store_last_error(store: &AppStore) -> Option<String> {
    store.last_error().get()
}

pub fn store_dismiss_error(store: &AppStore) {
    *store.last_error().write() = None;
}

/// Rendered entries of a column (tracked)
pub fn store_column_entries(store: &AppStore, column_id: &str) -> Vec<ColumnEntry> {
    store.kanban().read().column_entries(column_id)
}

/// Id of the lifted card (tracked)
pub fn store_dragged_id(store: &AppStore) -> Option<String> {
    store.kanban().read().session().dragged_id().map(str::to_string)
}

pub fn store_is_dragging_untracked(store: &AppStore) -> bool {
    store.kanban().read_untracked().session().is_dragging()
}

/// Phantom to draw, if a drag is active (tracked)
pub fn store_phantom(store: &AppStore) -> Option<PhantomView> {
    let kanban = store.kanban().read();
    let session = kanban.session();
    let phantom = session.phantom()?;
    let card = kanban.board().card(session.dragged_id()?)?;
    Some(PhantomView {
        phantom,
        content: card.content.clone(),
        opacity: kanban.config().phantom_opacity,
    })
}

/// Create a card from form text. `None` for blank text or on failure.
pub fn store_create_card(store: &AppStore, column_id: &str, text: &str) -> Option<Card> {
    let id = generate_card_id(js_sys::Date::now() as u64, js_sys::Math::random());
    let result = store.kanban().write().create_card(column_id, text, id);
    match result {
        Ok(card) => card,
        Err(err) => {
            record_error(store, "add card", err);
            None
        }
    }
}

pub fn store_remove_card(store: &AppStore, card_id: &str) {
    let result = store.kanban().write().remove_card(card_id);
    match result {
        Ok(true) => log::info!("card {} removed", card_id),
        Ok(false) => log::warn!("card {} was already gone", card_id),
        Err(err) => record_error(store, "remove card", err),
    }
}

/// Lift a card. Returns whether a drag is now active for it.
pub fn store_start_drag(store: &AppStore, card_id: &str, start: DragStart) -> bool {
    let result = store.kanban().write().start_drag(card_id, start);
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("drag not started for {}: {}", card_id, err);
            false
        }
    }
}

pub fn store_drag_move(store: &AppStore, pointer: Point, hover: Option<&HoverProbe>) {
    store.kanban().write().drag_move(pointer, hover);
}

pub fn store_drop(store: &AppStore, over_column: Option<&str>) {
    let result = store.kanban().write().drop(over_column);
    match result {
        Ok(DropOutcome::Committed { card_id, column_id, index }) => {
            log::info!("card {} dropped into {} at {}", card_id, column_id, index);
        }
        Ok(DropOutcome::Reverted { card_id }) => log::debug!("card {} returned to its origin", card_id),
        Ok(DropOutcome::Idle) => {}
        Err(err) => record_error(store, "move card", err),
    }
}

pub fn store_cancel_drag(store: &AppStore) {
    store.kanban().write().cancel_drag();
}
