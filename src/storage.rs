//! Browser Storage
//!
//! `localStorage` backend for the card list.

use kanban_core::{decode_records, encode_records, CardRecord, CardStore, DomainError, DomainResult};

/// Card list stored as one JSON blob under `key`
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl CardStore for LocalStorageStore {
    fn load(&self) -> Vec<CardRecord> {
        let raw = local_storage().and_then(|storage| storage.get_item(&self.key).ok().flatten());
        decode_records(raw.as_deref())
    }

    fn save(&self, records: &[CardRecord]) -> DomainResult<()> {
        let encoded = encode_records(records)?;
        let storage = local_storage()
            .ok_or_else(|| DomainError::Internal("localStorage is not available".to_string()))?;
        storage
            .set_item(&self.key, &encoded)
            .map_err(|e| DomainError::Internal(format!("localStorage write failed: {:?}", e)))
    }
}
