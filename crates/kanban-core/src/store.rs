//! Card Store
//!
//! The persisted card list is one JSON array under one key, rewritten in
//! full on every mutation. Backends only move that blob around.

use std::cell::RefCell;
use std::rc::Rc;

use crate::card::CardRecord;
use crate::error::DomainResult;

/// Persistence backend for the ordered card list
pub trait CardStore {
    /// Read the whole list. Missing or unreadable data is an empty list.
    fn load(&self) -> Vec<CardRecord>;

    /// Replace the whole list in a single write
    fn save(&self, records: &[CardRecord]) -> DomainResult<()>;
}

/// Parse a stored blob; anything unusable becomes an empty list
pub fn decode_records(raw: Option<&str>) -> Vec<CardRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Option<Vec<CardRecord>>>(raw) {
        Ok(records) => records.unwrap_or_default(),
        Err(e) => {
            log::warn!("ignoring unreadable card data: {}", e);
            Vec::new()
        }
    }
}

pub fn encode_records(records: &[CardRecord]) -> DomainResult<String> {
    Ok(serde_json::to_string(records)?)
}

/// In-memory store holding the raw blob. Clones share the same blob.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary stored string, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            blob: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl CardStore for MemoryStore {
    fn load(&self) -> Vec<CardRecord> {
        decode_records(self.blob.borrow().as_deref())
    }

    fn save(&self, records: &[CardRecord]) -> DomainResult<()> {
        let encoded = encode_records(records)?;
        *self.blob.borrow_mut() = Some(encoded);
        Ok(())
    }
}
