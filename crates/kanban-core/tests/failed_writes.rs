//! A storage write that fails must leave the board exactly as stored.

use std::cell::Cell;
use std::rc::Rc;

use kanban_core::{
    BoardConfig, CardRecord, CardStore, DomainError, DomainResult, DragStart, HoverProbe, Kanban,
    MemoryStore, Point, Rect,
};

/// Memory store whose writes can be switched off
#[derive(Debug, Clone, Default)]
struct FailingStore {
    inner: MemoryStore,
    failing: Rc<Cell<bool>>,
}

impl FailingStore {
    fn fail_writes(&self, failing: bool) {
        self.failing.set(failing);
    }
}

impl CardStore for FailingStore {
    fn load(&self) -> Vec<CardRecord> {
        self.inner.load()
    }

    fn save(&self, records: &[CardRecord]) -> DomainResult<()> {
        if self.failing.get() {
            return Err(DomainError::Internal("quota exceeded".to_string()));
        }
        self.inner.save(records)
    }
}

fn board_with_x_and_y() -> (Kanban<FailingStore>, FailingStore) {
    let store = FailingStore::default();
    let mut kanban = Kanban::load(BoardConfig::default(), store.clone()).unwrap();
    kanban.create_card("todo", "X", "X".to_string()).unwrap();
    kanban.create_card("todo", "Y", "Y".to_string()).unwrap();
    (kanban, store)
}

fn ids(kanban: &Kanban<FailingStore>, column: &str) -> Vec<String> {
    kanban
        .board()
        .column(column)
        .unwrap()
        .cards
        .iter()
        .map(|card| card.id.clone())
        .collect()
}

fn stored(store: &FailingStore) -> Vec<(String, String, u32)> {
    store
        .load()
        .into_iter()
        .map(|r| (r.id, r.column_id, r.order))
        .collect()
}

#[test]
fn failed_commit_restores_board() {
    let (mut kanban, store) = board_with_x_and_y();
    let stored_before = stored(&store);

    kanban
        .start_drag(
            "Y",
            DragStart {
                pointer: Point::new(20.0, 70.0),
                card_rect: Rect::new(0.0, 50.0, 200.0, 40.0),
                container_top: 0.0,
            },
        )
        .unwrap();
    let done = HoverProbe {
        column_id: "done".to_string(),
        siblings: Vec::new(),
    };
    kanban.drag_move(Point::new(620.0, 30.0), Some(&done));

    store.fail_writes(true);
    let result = kanban.drop(Some("done"));

    assert!(matches!(result, Err(DomainError::Internal(_))));
    assert!(!kanban.session().is_dragging());
    assert_eq!(ids(&kanban, "todo"), vec!["X", "Y"]);
    assert!(ids(&kanban, "done").is_empty());
    assert_eq!(kanban.board().card("Y").unwrap().column_id, "todo");
    assert_eq!(stored(&store), stored_before);

    let reloaded = Kanban::load(BoardConfig::default(), store.clone()).unwrap();
    assert_eq!(ids(&reloaded, "todo"), ids(&kanban, "todo"));
}

#[test]
fn failed_create_adds_nothing() {
    let (mut kanban, store) = board_with_x_and_y();
    store.fail_writes(true);

    assert!(kanban.create_card("todo", "Z", "Z".to_string()).is_err());
    assert_eq!(ids(&kanban, "todo"), vec!["X", "Y"]);
    assert_eq!(store.load().len(), 2);

    // the id is free again once writes recover
    store.fail_writes(false);
    let card = kanban.create_card("todo", "Z", "Z".to_string()).unwrap().unwrap();
    assert_eq!(card.order, 2);
    assert_eq!(ids(&kanban, "todo"), vec!["X", "Y", "Z"]);
}

#[test]
fn failed_remove_keeps_card() {
    let (mut kanban, store) = board_with_x_and_y();
    store.fail_writes(true);

    assert!(kanban.remove_card("X").is_err());
    assert_eq!(ids(&kanban, "todo"), vec!["X", "Y"]);
    assert_eq!(store.load().len(), 2);
}
