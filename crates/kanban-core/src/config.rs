//! Board Configuration
//!
//! Column layout and drag tuning, loadable from JSON with every field defaulted.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{DomainError, DomainResult};

/// Key the card list is stored under
pub const DEFAULT_STORAGE_KEY: &str = "cards";

/// Fraction of the first/last card height treated as the before-first/after-last band
pub const DEFAULT_EDGE_RATIO: f64 = 0.3;

const DEFAULT_PHANTOM_OPACITY: f64 = 0.8;

/// A fixed column of the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub id: String,
    pub title: String,
}

impl ColumnConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_columns")]
    pub columns: Vec<ColumnConfig>,
    #[serde(default = "default_edge_ratio")]
    pub edge_ratio: f64,
    #[serde(default = "default_phantom_opacity")]
    pub phantom_opacity: f64,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_columns() -> Vec<ColumnConfig> {
    vec![
        ColumnConfig::new("todo", "To Do"),
        ColumnConfig::new("in-progress", "In Progress"),
        ColumnConfig::new("done", "Done"),
    ]
}

fn default_edge_ratio() -> f64 {
    DEFAULT_EDGE_RATIO
}

fn default_phantom_opacity() -> f64 {
    DEFAULT_PHANTOM_OPACITY
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            columns: default_columns(),
            edge_ratio: default_edge_ratio(),
            phantom_opacity: default_phantom_opacity(),
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON configuration block
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let config: BoardConfig = serde_json::from_str(raw)
            .map_err(|e| DomainError::InvalidInput(format!("board config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the column layout and tuning values
    pub fn validate(&self) -> DomainResult<()> {
        if self.storage_key.is_empty() {
            return Err(DomainError::InvalidInput("storage key is empty".to_string()));
        }
        if self.columns.is_empty() {
            return Err(DomainError::InvalidInput("board has no columns".to_string()));
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.id.trim().is_empty() {
                return Err(DomainError::InvalidInput("column id is empty".to_string()));
            }
            if !seen.insert(column.id.as_str()) {
                return Err(DomainError::InvalidInput(format!("duplicate column id '{}'", column.id)));
            }
        }
        if !(self.edge_ratio > 0.0 && self.edge_ratio <= 0.5) {
            return Err(DomainError::InvalidInput(format!(
                "edge ratio {} outside (0, 0.5]",
                self.edge_ratio
            )));
        }
        if !(self.phantom_opacity > 0.0 && self.phantom_opacity <= 1.0) {
            return Err(DomainError::InvalidInput(format!(
                "phantom opacity {} outside (0, 1]",
                self.phantom_opacity
            )));
        }
        Ok(())
    }
}
