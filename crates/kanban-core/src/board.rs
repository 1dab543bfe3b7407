//! Board State
//!
//! Columns in their fixed order, each holding its cards top-to-bottom.
//! This is the authoritative visual order; the UI renders from it.

use crate::card::{Card, CardRecord};
use crate::config::BoardConfig;
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub cards: Vec<Card>,
}

/// One rendered slot of a column while a drag may be in progress
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnEntry {
    /// `lifted` marks the card being dragged; it stays mounted but takes no space
    Card { card: Card, lifted: bool },
    Placeholder { height: f64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Build the empty column layout. A layout the board cannot be drawn
    /// from (no columns, blank or duplicate ids) is a fatal error.
    pub fn from_config(config: &BoardConfig) -> DomainResult<Self> {
        config.validate()?;
        let columns = config
            .columns
            .iter()
            .map(|column| Column {
                id: column.id.clone(),
                title: column.title.clone(),
                cards: Vec::new(),
            })
            .collect();
        Ok(Self { columns })
    }

    /// Build the board and place persisted records into their columns.
    ///
    /// Each column is sorted by the stored `order` (stable, so records that
    /// share an order keep their array order). Records for unknown columns
    /// are skipped.
    pub fn load(config: &BoardConfig, records: Vec<CardRecord>) -> DomainResult<Self> {
        let mut board = Self::from_config(config)?;
        for record in records {
            match board.columns.iter_mut().find(|c| c.id == record.column_id) {
                Some(column) => column.cards.push(Card::from(record)),
                None => log::warn!(
                    "skipping card {} for unknown column '{}'",
                    record.id,
                    record.column_id
                ),
            }
        }
        for column in &mut board.columns {
            column.cards.sort_by_key(|card| card.order);
        }
        Ok(board)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    fn column_mut(&mut self, column_id: &str) -> DomainResult<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| c.id == column_id)
            .ok_or_else(|| DomainError::NotFound(format!("column '{}'", column_id)))
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.locate(card_id)
            .map(|(col, idx)| &self.columns[col].cards[idx])
    }

    /// (column index, position within column)
    pub fn locate(&self, card_id: &str) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(col, column)| {
            column
                .cards
                .iter()
                .position(|card| card.id == card_id)
                .map(|idx| (col, idx))
        })
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// Append a card to the end of its column with order = current count
    pub fn add_card(&mut self, mut card: Card) -> DomainResult<&Card> {
        if self.locate(&card.id).is_some() {
            return Err(DomainError::Conflict(format!("card {} already exists", card.id)));
        }
        let column = self.column_mut(&card.column_id)?;
        card.order = column.cards.len() as u32;
        column.cards.push(card);
        Ok(&column.cards[column.cards.len() - 1])
    }

    /// Detach a card and insert it at `index` of `column_id`.
    ///
    /// `index` counts the target column's cards without the moved card, so
    /// it is the placeholder slot as seen during the drag. Out-of-range
    /// indexes append.
    pub fn move_card(&mut self, card_id: &str, column_id: &str, index: usize) -> DomainResult<()> {
        // Check the target before detaching so a bad column loses nothing
        self.column_mut(column_id)?;
        let (col, idx) = self
            .locate(card_id)
            .ok_or_else(|| DomainError::NotFound(format!("card {}", card_id)))?;
        let card = self.columns[col].cards.remove(idx);
        let target = self.column_mut(column_id)?;
        let index = index.min(target.cards.len());
        target.cards.insert(index, card);
        Ok(())
    }

    /// Record which column a card now belongs to
    pub fn assign_column(&mut self, card_id: &str, column_id: &str) -> DomainResult<()> {
        let (col, idx) = self
            .locate(card_id)
            .ok_or_else(|| DomainError::NotFound(format!("card {}", card_id)))?;
        self.columns[col].cards[idx].column_id = column_id.to_string();
        Ok(())
    }

    pub fn remove_card(&mut self, card_id: &str) -> Option<Card> {
        let (col, idx) = self.locate(card_id)?;
        Some(self.columns[col].cards.remove(idx))
    }

    /// Re-derive every card's column and order from its position and return
    /// the full record list, columns in board order, cards top-to-bottom.
    pub fn renumber(&mut self) -> Vec<CardRecord> {
        let mut records = Vec::with_capacity(self.card_count());
        for column in &mut self.columns {
            for (index, card) in column.cards.iter_mut().enumerate() {
                card.column_id.clone_from(&column.id);
                card.order = index as u32;
                records.push(card.to_record());
            }
        }
        records
    }
}
