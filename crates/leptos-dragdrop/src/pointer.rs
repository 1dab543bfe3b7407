//! Pointer sampling
//!
//! Mouse and touch events reduced to one viewport point.

use kanban_core::Point;
use web_sys::{MouseEvent, Touch, TouchEvent};

pub fn mouse_point(ev: &MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// First active touch, for touchstart and touchmove
pub fn touch_point(ev: &TouchEvent) -> Option<Point> {
    pick_touch(ev.touches().get(0), ev.changed_touches().get(0), false).map(|t| touch_to_point(&t))
}

/// The touch that was lifted, for touchend and touchcancel
pub fn touch_release_point(ev: &TouchEvent) -> Option<Point> {
    pick_touch(ev.touches().get(0), ev.changed_touches().get(0), true).map(|t| touch_to_point(&t))
}

fn touch_to_point(touch: &Touch) -> Point {
    Point::new(touch.client_x() as f64, touch.client_y() as f64)
}

/// On release only the changed touch counts; other fingers may still be down
fn pick_touch<T>(active: Option<T>, changed: Option<T>, releasing: bool) -> Option<T> {
    if releasing {
        changed
    } else {
        active.or(changed)
    }
}
