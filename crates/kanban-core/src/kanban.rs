//! Kanban
//!
//! Board, drag session and persistence wired together. Every entry point
//! the UI calls lives here: load, create, remove, start drag, move, drop.

use crate::board::{Board, ColumnEntry};
use crate::card::Card;
use crate::config::BoardConfig;
use crate::error::{DomainError, DomainResult};
use crate::geometry::Point;
use crate::order_sync::OrderSync;
use crate::session::{DragSession, DragStart, DropOutcome, HoverProbe};
use crate::store::CardStore;

#[derive(Debug, Clone)]
pub struct Kanban<S> {
    config: BoardConfig,
    board: Board,
    session: DragSession,
    sync: OrderSync<S>,
}

impl<S: CardStore> Kanban<S> {
    /// Build the columns from `config` and render the stored cards into them
    pub fn load(config: BoardConfig, store: S) -> DomainResult<Self> {
        let records = store.load();
        let board = Board::load(&config, records)?;
        log::info!(
            "board loaded: {} columns, {} cards",
            board.columns().len(),
            board.card_count()
        );
        Ok(Self {
            session: DragSession::new(config.edge_ratio),
            config,
            board,
            sync: OrderSync::new(store),
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        self.sync.store()
    }

    /// Add a card at the end of `column_id`. Blank text is ignored and
    /// returns `None`.
    pub fn create_card(&mut self, column_id: &str, text: &str, id: String) -> DomainResult<Option<Card>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let card = self.board.add_card(Card::new(id, text, column_id))?.clone();
        if let Err(e) = self.sync.append(&card) {
            self.board.remove_card(&card.id);
            log::error!("card {} not saved, board left unchanged: {}", card.id, e);
            return Err(e);
        }
        Ok(Some(card))
    }

    /// Drop a card's record, then detach it. Returns whether the card
    /// existed. A failed write leaves the board and any drag untouched.
    pub fn remove_card(&mut self, card_id: &str) -> DomainResult<bool> {
        let removed = self.sync.remove(card_id)?;
        if self.session.dragged_id() == Some(card_id) {
            self.session.cancel();
        }
        let detached = self.board.remove_card(card_id).is_some();
        Ok(detached || removed)
    }

    pub fn start_drag(&mut self, card_id: &str, start: DragStart) -> DomainResult<()> {
        let (col, idx) = self
            .board
            .locate(card_id)
            .ok_or_else(|| DomainError::NotFound(format!("card {}", card_id)))?;
        let column_id = self.board.columns()[col].id.clone();
        self.session.start(card_id, &column_id, idx, start)
    }

    pub fn drag_move(&mut self, pointer: Point, hover: Option<&HoverProbe>) {
        self.session.move_to(pointer, hover);
    }

    /// Release over `over_column`. A committed drop moves the card and
    /// rewrites storage; a reverted one leaves board and storage as they
    /// were before the drag. If the write fails the board is restored too.
    pub fn drop(&mut self, over_column: Option<&str>) -> DomainResult<DropOutcome> {
        let outcome = self.session.drop(over_column);
        if let DropOutcome::Committed { card_id, column_id, index } = &outcome {
            let before = self.board.clone();
            if let Err(e) = self.commit_move(card_id, column_id, *index) {
                self.board = before;
                log::error!("drop of card {} not saved, board restored: {}", card_id, e);
                return Err(e);
            }
        }
        Ok(outcome)
    }

    fn commit_move(&mut self, card_id: &str, column_id: &str, index: usize) -> DomainResult<()> {
        self.board.move_card(card_id, column_id, index)?;
        self.sync.commit(&mut self.board, column_id, card_id)
    }

    pub fn cancel_drag(&mut self) -> Option<String> {
        self.session.cancel()
    }

    /// What a column shows right now: its cards top-to-bottom with the
    /// placeholder spliced in at its slot. The lifted card keeps its place in
    /// the list (so its element survives) but is flagged so it takes no space.
    pub fn column_entries(&self, column_id: &str) -> Vec<ColumnEntry> {
        let Some(column) = self.board.column(column_id) else {
            return Vec::new();
        };
        let lifted = self.session.dragged_id();
        let placeholder = self
            .session
            .placeholder()
            .filter(|placeholder| placeholder.column_id == column_id);

        let mut entries = Vec::with_capacity(column.cards.len() + 1);
        let mut slot = 0;
        for card in &column.cards {
            let is_lifted = lifted == Some(card.id.as_str());
            if !is_lifted {
                if let Some(placeholder) = placeholder.filter(|p| p.index == slot) {
                    entries.push(ColumnEntry::Placeholder { height: placeholder.height });
                }
                slot += 1;
            }
            entries.push(ColumnEntry::Card {
                card: card.clone(),
                lifted: is_lifted,
            });
        }
        if let Some(placeholder) = placeholder.filter(|p| p.index >= slot) {
            entries.push(ColumnEntry::Placeholder { height: placeholder.height });
        }
        entries
    }
}
