//! Order Sync
//!
//! Keeps the persisted card list in step with the board.

use crate::board::Board;
use crate::card::Card;
use crate::error::DomainResult;
use crate::store::CardStore;

#[derive(Debug, Clone)]
pub struct OrderSync<S> {
    store: S,
}

impl<S: CardStore> OrderSync<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// After a drop: move the card into `target_column_id`, then rewrite the
    /// whole list from the board, renumbering every column. Gaps left by
    /// earlier removals are compacted here.
    pub fn commit(&self, board: &mut Board, target_column_id: &str, card_id: &str) -> DomainResult<()> {
        board.assign_column(card_id, target_column_id)?;
        let records = board.renumber();
        self.store.save(&records)?;
        log::info!(
            "card {} committed to {}, {} cards saved",
            card_id,
            target_column_id,
            records.len()
        );
        Ok(())
    }

    /// Drop the record with `card_id`. Other orders are left untouched.
    /// Returns whether a record was removed.
    pub fn remove(&self, card_id: &str) -> DomainResult<bool> {
        let mut records = self.store.load();
        let before = records.len();
        records.retain(|record| record.id != card_id);
        if records.len() == before {
            return Ok(false);
        }
        self.store.save(&records)?;
        log::info!("card {} removed from storage", card_id);
        Ok(true)
    }

    /// Add one new record, leaving every other record as stored
    pub fn append(&self, card: &Card) -> DomainResult<()> {
        let mut records = self.store.load();
        records.push(card.to_record());
        self.store.save(&records)?;
        log::info!("card {} appended to {} at {}", card.id, card.column_id, card.order);
        Ok(())
    }
}
