//! Drag Session
//!
//! Lifecycle of one drag gesture as an explicit `Idle` / `Dragging` state
//! machine. The session owns the only placeholder and phantom; it never
//! mutates the board. A drop yields a [`DropOutcome`] that the caller commits.
//!
//! The card is lifted at start: its slot turns into the placeholder right
//! away, so a column never shows two slots for one card.

use crate::config::DEFAULT_EDGE_RATIO;
use crate::error::{DomainError, DomainResult};
use crate::geometry::{Point, Rect};
use crate::position::{resolve, Sibling};

/// Measurements captured on pointer-down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStart {
    pub pointer: Point,
    /// The card's box before it was lifted
    pub card_rect: Rect,
    /// Top edge of the origin cards-container; the phantom never rises above it
    pub container_top: f64,
}

/// The cards-container under the pointer and its children in DOM order
#[derive(Debug, Clone, PartialEq)]
pub struct HoverProbe {
    pub column_id: String,
    pub siblings: Vec<Sibling>,
}

/// Reserved drop slot: `index` among the column's non-dragged cards
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub column_id: String,
    pub index: usize,
    pub height: f64,
}

/// Floating copy of the dragged card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phantom {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// No drag was active
    Idle,
    /// Released outside a cards-container, or over one without the placeholder
    Reverted { card_id: String },
    /// Place the card at `index` of `column_id`
    Committed {
        card_id: String,
        column_id: String,
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveDrag {
    card_id: String,
    origin_column: String,
    offset: Point,
    card_rect: Rect,
    container_top: f64,
    phantom: Phantom,
    placeholder: Placeholder,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    edge_ratio: f64,
    state: DragState,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(DEFAULT_EDGE_RATIO)
    }
}

impl DragSession {
    pub fn new(edge_ratio: f64) -> Self {
        Self {
            edge_ratio,
            state: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    fn active(&self) -> Option<&ActiveDrag> {
        match &self.state {
            DragState::Dragging(drag) => Some(drag),
            DragState::Idle => None,
        }
    }

    pub fn dragged_id(&self) -> Option<&str> {
        self.active().map(|drag| drag.card_id.as_str())
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.active().map(|drag| &drag.placeholder)
    }

    pub fn phantom(&self) -> Option<Phantom> {
        self.active().map(|drag| drag.phantom)
    }

    /// Lift a card. The placeholder takes its slot with the card's height.
    pub fn start(
        &mut self,
        card_id: &str,
        origin_column: &str,
        origin_index: usize,
        start: DragStart,
    ) -> DomainResult<()> {
        if let Some(current) = self.dragged_id() {
            return Err(DomainError::Conflict(format!("card {} is already being dragged", current)));
        }
        let offset = start.pointer - start.card_rect.top_left();
        let mut drag = ActiveDrag {
            card_id: card_id.to_string(),
            origin_column: origin_column.to_string(),
            offset,
            card_rect: start.card_rect,
            container_top: start.container_top,
            phantom: Phantom {
                left: start.card_rect.left,
                top: start.card_rect.top,
                width: start.card_rect.width,
            },
            placeholder: Placeholder {
                column_id: origin_column.to_string(),
                index: origin_index,
                height: start.card_rect.height,
            },
        };
        drag.follow(start.pointer);
        log::debug!("drag start: card {} from {}[{}]", card_id, origin_column, origin_index);
        self.state = DragState::Dragging(drag);
        Ok(())
    }

    /// Track the pointer. With no container under it the placeholder stays
    /// where it is; otherwise it moves into that container at the resolved slot.
    pub fn move_to(&mut self, pointer: Point, hover: Option<&HoverProbe>) {
        let edge_ratio = self.edge_ratio;
        let DragState::Dragging(drag) = &mut self.state else {
            return;
        };
        drag.follow(pointer);

        let Some(probe) = hover else {
            return;
        };
        let target = resolve(pointer.y, &probe.siblings, &drag.card_id, edge_ratio);
        let ordered: Vec<&str> = probe
            .siblings
            .iter()
            .filter_map(Sibling::card_id)
            .filter(|id| *id != drag.card_id)
            .collect();
        let index = target.slot_in(&ordered);

        if drag.placeholder.column_id != probe.column_id {
            log::debug!("placeholder enters column {}", probe.column_id);
        }
        drag.placeholder = Placeholder {
            column_id: probe.column_id.clone(),
            index,
            height: drag.card_rect.height,
        };
    }

    /// End the gesture over `over_column` (the cards-container under the
    /// release point, if any). The session is idle afterwards.
    pub fn drop(&mut self, over_column: Option<&str>) -> DropOutcome {
        let DragState::Dragging(drag) = std::mem::take(&mut self.state) else {
            return DropOutcome::Idle;
        };
        let placeholder = drag.placeholder;
        match over_column {
            Some(column) if placeholder.column_id == column => {
                log::debug!("drop: card {} into {}[{}]", drag.card_id, column, placeholder.index);
                DropOutcome::Committed {
                    card_id: drag.card_id,
                    column_id: placeholder.column_id,
                    index: placeholder.index,
                }
            }
            _ => {
                log::debug!("drop: card {} reverted to {}", drag.card_id, drag.origin_column);
                DropOutcome::Reverted { card_id: drag.card_id }
            }
        }
    }

    /// Abandon any drag. Safe to call when idle; returns the card that was lifted.
    pub fn cancel(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(drag) => {
                log::debug!("drag cancelled: card {}", drag.card_id);
                Some(drag.card_id)
            }
            DragState::Idle => None,
        }
    }
}

impl ActiveDrag {
    fn follow(&mut self, pointer: Point) {
        self.phantom.left = pointer.x - self.offset.x;
        self.phantom.top = (pointer.y - self.offset.y).max(self.container_top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_at(pointer: Point) -> DragStart {
        DragStart {
            pointer,
            card_rect: Rect::new(10.0, 100.0, 200.0, 40.0),
            container_top: 90.0,
        }
    }

    fn column_b(siblings: Vec<Sibling>) -> HoverProbe {
        HoverProbe {
            column_id: "b".to_string(),
            siblings,
        }
    }

    fn dragging() -> DragSession {
        let mut session = DragSession::default();
        session
            .start("x", "a", 1, start_at(Point::new(30.0, 110.0)))
            .unwrap();
        session
    }

    #[test]
    fn test_start_lifts_card_into_placeholder() {
        let session = dragging();
        assert!(session.is_dragging());
        assert_eq!(session.dragged_id(), Some("x"));
        assert_eq!(
            session.placeholder(),
            Some(&Placeholder {
                column_id: "a".to_string(),
                index: 1,
                height: 40.0
            })
        );
        let phantom = session.phantom().unwrap();
        assert_eq!((phantom.left, phantom.top, phantom.width), (10.0, 100.0, 200.0));
    }

    #[test]
    fn test_second_start_is_rejected() {
        let mut session = dragging();
        let err = session
            .start("y", "a", 0, start_at(Point::new(0.0, 0.0)))
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(session.dragged_id(), Some("x"));
    }

    #[test]
    fn test_phantom_follows_pointer_with_offset_and_clamp() {
        let mut session = dragging();
        session.move_to(Point::new(130.0, 310.0), None);
        let phantom = session.phantom().unwrap();
        assert_eq!((phantom.left, phantom.top), (110.0, 300.0));

        // pointer far above the container: top pinned to the container edge
        session.move_to(Point::new(30.0, 0.0), None);
        assert_eq!(session.phantom().unwrap().top, 90.0);
    }

    #[test]
    fn test_no_container_leaves_placeholder_alone() {
        let mut session = dragging();
        let before = session.placeholder().cloned();
        session.move_to(Point::new(900.0, 900.0), None);
        assert_eq!(session.placeholder().cloned(), before);
    }

    #[test]
    fn test_entering_another_column_moves_placeholder() {
        let mut session = dragging();
        session.move_to(Point::new(400.0, 10.0), Some(&column_b(vec![])));
        assert_eq!(
            session.placeholder(),
            Some(&Placeholder {
                column_id: "b".to_string(),
                index: 0,
                height: 40.0
            })
        );

        let siblings = vec![
            Sibling::placeholder(Rect::new(300.0, 0.0, 200.0, 40.0)),
            Sibling::card("p", Rect::new(300.0, 50.0, 200.0, 40.0)),
            Sibling::card("q", Rect::new(300.0, 100.0, 200.0, 40.0)),
        ];
        session.move_to(Point::new(400.0, 135.0), Some(&column_b(siblings)));
        assert_eq!(session.placeholder().unwrap().index, 2);
    }

    #[test]
    fn test_drop_over_placeholder_column_commits() {
        let mut session = dragging();
        session.move_to(Point::new(400.0, 10.0), Some(&column_b(vec![])));
        assert_eq!(
            session.drop(Some("b")),
            DropOutcome::Committed {
                card_id: "x".to_string(),
                column_id: "b".to_string(),
                index: 0
            }
        );
        assert!(!session.is_dragging());
        assert!(session.placeholder().is_none());
        assert!(session.phantom().is_none());
    }

    #[test]
    fn test_drop_outside_or_elsewhere_reverts() {
        let mut session = dragging();
        assert_eq!(
            session.drop(None),
            DropOutcome::Reverted { card_id: "x".to_string() }
        );

        let mut session = dragging();
        // placeholder is still in "a"
        assert_eq!(
            session.drop(Some("b")),
            DropOutcome::Reverted { card_id: "x".to_string() }
        );
        assert_eq!(session.drop(Some("a")), DropOutcome::Idle);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut session = dragging();
        assert_eq!(session.cancel(), Some("x".to_string()));
        assert_eq!(session.cancel(), None);
        assert!(!session.is_dragging());
        session.move_to(Point::new(0.0, 0.0), None);
        assert!(session.phantom().is_none());
    }
}
