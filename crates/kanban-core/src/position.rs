//! Position Resolver
//!
//! Picks the placeholder slot inside a cards-container from the pointer's
//! vertical position. The top band of the first card and the bottom band of
//! the last card win over the midpoint scan, which keeps the placeholder from
//! flickering at the column ends when cards have uneven heights.

use crate::geometry::Rect;

/// What a child of a cards-container is
#[derive(Debug, Clone, PartialEq)]
pub enum SiblingKind {
    Card(String),
    Placeholder,
}

/// A child of a cards-container with its on-screen box, in DOM order
#[derive(Debug, Clone, PartialEq)]
pub struct Sibling {
    pub kind: SiblingKind,
    pub rect: Rect,
}

impl Sibling {
    pub fn card(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            kind: SiblingKind::Card(id.into()),
            rect,
        }
    }

    pub fn placeholder(rect: Rect) -> Self {
        Self {
            kind: SiblingKind::Placeholder,
            rect,
        }
    }

    pub fn card_id(&self) -> Option<&str> {
        match &self.kind {
            SiblingKind::Card(id) => Some(id),
            SiblingKind::Placeholder => None,
        }
    }
}

/// Where the placeholder goes
#[derive(Debug, Clone, PartialEq)]
pub enum InsertionTarget {
    /// Pointer is in the top band of the first card
    BeforeFirst(String),
    /// Pointer is in the bottom band of the last card
    AfterLast(String),
    /// First card whose midpoint lies below the pointer
    BeforeSibling(String),
    /// Empty container, or pointer below every midpoint
    AppendToEnd,
}

impl InsertionTarget {
    /// Slot index among the container's non-dragged cards, given their ids in order
    pub fn slot_in(&self, ordered_ids: &[&str]) -> usize {
        match self {
            InsertionTarget::BeforeFirst(_) => 0,
            InsertionTarget::AfterLast(_) | InsertionTarget::AppendToEnd => ordered_ids.len(),
            InsertionTarget::BeforeSibling(id) => ordered_ids
                .iter()
                .position(|candidate| *candidate == id)
                .unwrap_or(ordered_ids.len()),
        }
    }
}

/// Resolve the insertion point for `pointer_y` among `siblings`.
///
/// `siblings` is the container's children in DOM order. The dragged card and
/// the placeholder are never ranked. When the container's trailing card is
/// the dragged card itself, the after-last band is skipped so the card is not
/// inserted after itself.
pub fn resolve(pointer_y: f64, siblings: &[Sibling], dragged_id: &str, edge_ratio: f64) -> InsertionTarget {
    let ranked: Vec<(&str, &Rect)> = siblings
        .iter()
        .filter_map(|sibling| match sibling.card_id() {
            Some(id) if id != dragged_id => Some((id, &sibling.rect)),
            _ => None,
        })
        .collect();

    let (Some(&(first_id, first)), Some(&(last_id, last))) = (ranked.first(), ranked.last()) else {
        return InsertionTarget::AppendToEnd;
    };

    if pointer_y < first.top + first.height * edge_ratio {
        return InsertionTarget::BeforeFirst(first_id.to_string());
    }

    let trailing_is_dragged = siblings
        .iter()
        .rev()
        .find_map(Sibling::card_id)
        .is_some_and(|id| id == dragged_id);
    if pointer_y > last.bottom() - last.height * edge_ratio && !trailing_is_dragged {
        return InsertionTarget::AfterLast(last_id.to_string());
    }

    ranked
        .iter()
        .find(|(_, rect)| rect.mid_y() > pointer_y)
        .map(|(id, _)| InsertionTarget::BeforeSibling(id.to_string()))
        .unwrap_or(InsertionTarget::AppendToEnd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EDGE_RATIO;

    /// Cards stacked from y=0, each `height` tall with an 10px gap
    fn stack(ids: &[&str], height: f64) -> Vec<Sibling> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| Sibling::card(*id, Rect::new(0.0, i as f64 * (height + 10.0), 200.0, height)))
            .collect()
    }

    #[test]
    fn test_empty_container_appends() {
        assert_eq!(resolve(50.0, &[], "x", DEFAULT_EDGE_RATIO), InsertionTarget::AppendToEnd);
    }

    #[test]
    fn test_only_dragged_and_placeholder_appends() {
        let siblings = vec![
            Sibling::placeholder(Rect::new(0.0, 0.0, 200.0, 40.0)),
            Sibling::card("x", Rect::new(0.0, 0.0, 0.0, 0.0)),
        ];
        assert_eq!(resolve(10.0, &siblings, "x", DEFAULT_EDGE_RATIO), InsertionTarget::AppendToEnd);
    }

    #[test]
    fn test_top_band_of_first_card_inserts_before_first() {
        for n in 1..6 {
            let ids: Vec<String> = (0..n).map(|i| format!("c{}", i)).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let siblings = stack(&refs, 40.0);
            // first card spans 0..40, band ends at 12
            for y in [-100.0, 0.0, 11.9] {
                assert_eq!(
                    resolve(y, &siblings, "dragged", DEFAULT_EDGE_RATIO),
                    InsertionTarget::BeforeFirst("c0".to_string()),
                    "n={} y={}",
                    n,
                    y
                );
            }
        }
    }

    #[test]
    fn test_bottom_band_of_last_card_appends() {
        for n in 2..6 {
            let ids: Vec<String> = (0..n).map(|i| format!("c{}", i)).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let siblings = stack(&refs, 40.0);
            let last = siblings.last().unwrap().rect;
            for y in [last.bottom() - 11.9, last.bottom(), last.bottom() + 500.0] {
                assert_eq!(
                    resolve(y, &siblings, "dragged", DEFAULT_EDGE_RATIO),
                    InsertionTarget::AfterLast(format!("c{}", n - 1)),
                    "n={} y={}",
                    n,
                    y
                );
            }
        }
    }

    #[test]
    fn test_midpoint_scan_between_cards() {
        // a: 0..40 (mid 20), b: 50..90 (mid 70), c: 100..140 (mid 120)
        let siblings = stack(&["a", "b", "c"], 40.0);
        assert_eq!(
            resolve(15.0, &siblings, "z", DEFAULT_EDGE_RATIO),
            InsertionTarget::BeforeSibling("a".to_string())
        );
        assert_eq!(
            resolve(45.0, &siblings, "z", DEFAULT_EDGE_RATIO),
            InsertionTarget::BeforeSibling("b".to_string())
        );
        assert_eq!(
            resolve(95.0, &siblings, "z", DEFAULT_EDGE_RATIO),
            InsertionTarget::BeforeSibling("c".to_string())
        );
        // below c's midpoint but above its bottom band (128)
        assert_eq!(resolve(125.0, &siblings, "z", DEFAULT_EDGE_RATIO), InsertionTarget::AppendToEnd);
    }

    #[test]
    fn test_dragged_and_placeholder_are_not_ranked() {
        let mut siblings = vec![Sibling::placeholder(Rect::new(0.0, 0.0, 200.0, 40.0))];
        siblings.push(Sibling::card("dragged", Rect::new(0.0, 0.0, 0.0, 0.0)));
        siblings.push(Sibling::card("a", Rect::new(0.0, 50.0, 200.0, 40.0)));
        siblings.push(Sibling::card("b", Rect::new(0.0, 100.0, 200.0, 40.0)));
        // 55 is inside a's top band, a being the first ranked card
        assert_eq!(
            resolve(55.0, &siblings, "dragged", DEFAULT_EDGE_RATIO),
            InsertionTarget::BeforeFirst("a".to_string())
        );
    }

    #[test]
    fn test_trailing_dragged_card_skips_after_last_band() {
        let siblings = vec![
            Sibling::card("a", Rect::new(0.0, 0.0, 200.0, 40.0)),
            Sibling::card("dragged", Rect::new(0.0, 50.0, 200.0, 40.0)),
        ];
        // inside a's bottom band; falls through to the midpoint scan
        assert_eq!(resolve(35.0, &siblings, "dragged", DEFAULT_EDGE_RATIO), InsertionTarget::AppendToEnd);
        // without the dragged card trailing, the same point is an after-last hit
        assert_eq!(
            resolve(35.0, &siblings[..1], "dragged", DEFAULT_EDGE_RATIO),
            InsertionTarget::AfterLast("a".to_string())
        );
    }

    #[test]
    fn test_uneven_heights_use_each_cards_own_band() {
        let siblings = vec![
            Sibling::card("tall", Rect::new(0.0, 0.0, 200.0, 200.0)),
            Sibling::card("short", Rect::new(0.0, 210.0, 200.0, 20.0)),
        ];
        // tall's band ends at 60, midpoint at 100
        assert_eq!(
            resolve(59.0, &siblings, "z", DEFAULT_EDGE_RATIO),
            InsertionTarget::BeforeFirst("tall".to_string())
        );
        assert_eq!(
            resolve(150.0, &siblings, "z", DEFAULT_EDGE_RATIO),
            InsertionTarget::BeforeSibling("short".to_string())
        );
        // short's bottom band starts at 224
        assert_eq!(
            resolve(225.0, &siblings, "z", DEFAULT_EDGE_RATIO),
            InsertionTarget::AfterLast("short".to_string())
        );
    }

    #[test]
    fn test_slot_in() {
        let ids = ["a", "b", "c"];
        assert_eq!(InsertionTarget::BeforeFirst("a".into()).slot_in(&ids), 0);
        assert_eq!(InsertionTarget::BeforeSibling("b".into()).slot_in(&ids), 1);
        assert_eq!(InsertionTarget::AfterLast("c".into()).slot_in(&ids), 3);
        assert_eq!(InsertionTarget::AppendToEnd.slot_in(&[]), 0);
        assert_eq!(InsertionTarget::BeforeSibling("gone".into()).slot_in(&ids), 3);
    }
}
