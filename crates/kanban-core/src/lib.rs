//! Kanban Core
//!
//! Pure board model and drag-and-drop engine.
//! Nothing here touches the browser; the UI feeds pointer samples and
//! element rectangles in and renders whatever state comes out.

mod error;
mod config;
mod card;
mod board;
mod geometry;
mod position;
mod session;
mod store;
mod order_sync;
mod kanban;

pub use error::{DomainError, DomainResult};
pub use config::{BoardConfig, ColumnConfig, DEFAULT_EDGE_RATIO, DEFAULT_STORAGE_KEY};
pub use card::{generate_card_id, Card, CardRecord};
pub use board::{Board, Column, ColumnEntry};
pub use geometry::{Point, Rect};
pub use position::{resolve, InsertionTarget, Sibling, SiblingKind};
pub use session::{DragSession, DragStart, DropOutcome, HoverProbe, Phantom, Placeholder};
pub use store::{decode_records, encode_records, CardStore, MemoryStore};
pub use order_sync::OrderSync;
pub use kanban::Kanban;
