//! Drag-scoped document listeners
//!
//! Move/end listeners for mouse and touch exist only while a drag is
//! active: registered by [`DragListeners::bind`], removed when the value
//! is dropped.

use std::rc::Rc;

use kanban_core::Point;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, MouseEvent, TouchEvent};

use crate::pointer::{mouse_point, touch_point, touch_release_point};

/// Unified pointer input delivered to the drag handler
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerPhase {
    Move(Point),
    /// Release point, if the event carried one
    End(Option<Point>),
}

pub struct DragListeners {
    document: Document,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    mouse_up: Closure<dyn FnMut(MouseEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
}

impl DragListeners {
    /// Register move/end listeners on the document, all feeding `handler`
    pub fn bind<F>(handler: F) -> Result<Self, JsValue>
    where
        F: Fn(PointerPhase) + 'static,
    {
        let document = web_sys::window()
            .and_then(|win| win.document())
            .ok_or_else(|| JsValue::from_str("document is not available"))?;
        let handler: Rc<dyn Fn(PointerPhase)> = Rc::new(handler);

        let on_phase = handler.clone();
        let mouse_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            ev.prevent_default();
            on_phase(PointerPhase::Move(mouse_point(&ev)));
        });

        let on_phase = handler.clone();
        let mouse_up = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            on_phase(PointerPhase::End(Some(mouse_point(&ev))));
        });

        let on_phase = handler.clone();
        let touch_move = Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
            ev.prevent_default();
            if let Some(point) = touch_point(&ev) {
                on_phase(PointerPhase::Move(point));
            }
        });

        let on_phase = handler;
        let touch_end = Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
            on_phase(PointerPhase::End(touch_release_point(&ev)));
        });

        let listeners = Self {
            document,
            mouse_move,
            mouse_up,
            touch_move,
            touch_end,
        };
        // Anything registered before a failure is removed again on drop
        listeners.register()?;
        Ok(listeners)
    }

    fn register(&self) -> Result<(), JsValue> {
        let doc = &self.document;
        // Non-passive so preventDefault stops the page from scrolling mid-drag
        let active = AddEventListenerOptions::new();
        active.set_passive(false);

        doc.add_event_listener_with_callback("mousemove", self.mouse_move.as_ref().unchecked_ref())?;
        doc.add_event_listener_with_callback("mouseup", self.mouse_up.as_ref().unchecked_ref())?;
        doc.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            self.touch_move.as_ref().unchecked_ref(),
            &active,
        )?;
        doc.add_event_listener_with_callback("touchend", self.touch_end.as_ref().unchecked_ref())?;
        doc.add_event_listener_with_callback("touchcancel", self.touch_end.as_ref().unchecked_ref())?;
        Ok(())
    }
}

impl DragListeners {
    /// Detach from the document; the closures stay alive until drop
    pub fn unregister(&self) {
        let doc = &self.document;
        let _ = doc.remove_event_listener_with_callback("mousemove", self.mouse_move.as_ref().unchecked_ref());
        let _ = doc.remove_event_listener_with_callback("mouseup", self.mouse_up.as_ref().unchecked_ref());
        let _ = doc.remove_event_listener_with_callback("touchmove", self.touch_move.as_ref().unchecked_ref());
        let _ = doc.remove_event_listener_with_callback("touchend", self.touch_end.as_ref().unchecked_ref());
        let _ = doc.remove_event_listener_with_callback("touchcancel", self.touch_end.as_ref().unchecked_ref());
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        self.unregister();
    }
}
