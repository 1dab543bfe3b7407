//! DOM probing
//!
//! Reads the markup contract: a cards-container (`.cards`) carries its
//! column id in `data-column`; its children are `.card` elements with
//! `data-id`, plus at most one `.placeholder`.

use kanban_core::{HoverProbe, Point, Rect, Sibling};
use wasm_bindgen::JsCast;
use web_sys::Element;

pub const CARDS_CONTAINER_SELECTOR: &str = ".cards";
pub const CARD_SELECTOR: &str = ".card";
pub const CLOSE_BUTTON_SELECTOR: &str = ".close-btn";
pub const CARD_CLASS: &str = "card";
pub const PLACEHOLDER_CLASS: &str = "placeholder";
pub const COLUMN_ATTR: &str = "data-column";
pub const CARD_ID_ATTR: &str = "data-id";

pub fn element_rect(el: &Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Nearest ancestor (or self) matching `selector`
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

/// True when an event target sits inside an element matching `selector`
pub fn target_within(target: Option<web_sys::EventTarget>, selector: &str) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| closest(&el, selector))
        .is_some()
}

/// Cards-container under a viewport point
pub fn container_at(point: Point) -> Option<Element> {
    let document = web_sys::window()?.document()?;
    let below = document.element_from_point(point.x as f32, point.y as f32)?;
    closest(&below, CARDS_CONTAINER_SELECTOR)
}

/// Column id of the cards-container under a viewport point
pub fn column_at(point: Point) -> Option<String> {
    container_at(point)?.get_attribute(COLUMN_ATTR)
}

/// Container under the pointer with its children's boxes in DOM order.
/// A container without a column id is not a drop target.
pub fn probe_at(point: Point) -> Option<HoverProbe> {
    let container = container_at(point)?;
    let column_id = container.get_attribute(COLUMN_ATTR)?;
    let children = container.children();
    let siblings = (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| {
            let classes = child.class_list();
            if classes.contains(PLACEHOLDER_CLASS) {
                Some(Sibling::placeholder(element_rect(&child)))
            } else if classes.contains(CARD_CLASS) {
                child
                    .get_attribute(CARD_ID_ATTR)
                    .map(|id| Sibling::card(id, element_rect(&child)))
            } else {
                None
            }
        })
        .collect();
    Some(HoverProbe { column_id, siblings })
}
