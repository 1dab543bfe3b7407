//! Leptos DragDrop Utilities
//!
//! Browser side of the kanban drag engine: pointer sampling for mouse and
//! touch, drag-scoped document listeners and DOM probing. All placement
//! decisions are made by `kanban-core`; this crate only measures.

mod listeners;
mod pointer;
mod probe;

use leptos::prelude::*;

pub use listeners::{DragListeners, PointerPhase};
pub use pointer::{mouse_point, touch_point, touch_release_point};
pub use probe::*;

/// Holds the document listeners of the active drag, if any
#[derive(Clone, Copy)]
pub struct DragBinding {
    listeners: StoredValue<Option<DragListeners>, LocalStorage>,
}

pub fn create_drag_binding() -> DragBinding {
    DragBinding {
        listeners: StoredValue::new_local(None),
    }
}

impl DragBinding {
    /// Start listening for move/end. Returns false when registration failed.
    pub fn bind<F>(&self, handler: F) -> bool
    where
        F: Fn(PointerPhase) + 'static,
    {
        self.release();
        match DragListeners::bind(handler) {
            Ok(listeners) => {
                self.listeners.set_value(Some(listeners));
                true
            }
            Err(err) => {
                log::error!("failed to bind drag listeners: {:?}", err);
                false
            }
        }
    }

    /// Stop listening. Usually called from inside one of the listeners, so
    /// the closures are freed on the next tick rather than mid-call.
    pub fn release(&self) {
        let mut taken = None;
        self.listeners.update_value(|slot| taken = slot.take());
        if let Some(listeners) = taken {
            listeners.unregister();
            gloo_timers::callback::Timeout::new(0, move || drop(listeners)).forget();
        }
    }
}
