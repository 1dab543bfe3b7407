//! Card Model
//!
//! In-memory card value and its flat persisted record.

use serde::{Deserialize, Serialize};

const ID_PREFIX: &str = "id-";
const RANDOM_DIGITS: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A card as held by the board
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub content: String,
    pub column_id: String,
    /// Zero-based position within the column, rewritten on every commit
    pub order: u32,
}

impl Card {
    pub fn new(id: impl Into<String>, content: impl Into<String>, column_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            column_id: column_id.into(),
            order: 0,
        }
    }

    pub fn to_record(&self) -> CardRecord {
        CardRecord {
            id: self.id.clone(),
            content: self.content.clone(),
            column_id: self.column_id.clone(),
            order: self.order,
        }
    }
}

/// Persisted card record `{id, content, columnId, order}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: String,
    pub content: String,
    pub column_id: String,
    /// Older boards saved new cards without an order
    #[serde(default)]
    pub order: u32,
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        Self {
            id: record.id,
            content: record.content,
            column_id: record.column_id,
            order: record.order,
        }
    }
}

/// Build a card id from a millisecond timestamp and a random fraction in [0, 1).
///
/// Format: `id-<millis base36>-<9 base36 digits of the fraction>`.
/// Collisions are not checked.
pub fn generate_card_id(now_millis: u64, random: f64) -> String {
    format!(
        "{}{}-{}",
        ID_PREFIX,
        to_base36(now_millis),
        fraction_to_base36(random, RANDOM_DIGITS)
    )
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

fn fraction_to_base36(fraction: f64, len: usize) -> String {
    let mut rest = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0 - f64::EPSILON)
    } else {
        0.0
    };
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        rest *= 36.0;
        let digit = (rest.floor() as usize).min(35);
        rest -= digit as f64;
        out.push(BASE36[digit] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base36_timestamp() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn test_generated_id_shape() {
        let id = generate_card_id(36, 0.5);
        assert_eq!(id, "id-10-i00000000");

        let id = generate_card_id(1_700_000_000_000, 0.123456);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "id");
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_fraction_out_of_range_is_clamped() {
        assert_eq!(fraction_to_base36(f64::NAN, 3), "000");
        assert_eq!(fraction_to_base36(-1.0, 3), "000");
        assert_eq!(fraction_to_base36(2.0, 1), "z");
    }

    #[test]
    fn test_record_without_order_defaults_to_zero() {
        let record: CardRecord =
            serde_json::from_str(r#"{"id":"a","content":"x","columnId":"todo"}"#).unwrap();
        assert_eq!(record.order, 0);
        assert_eq!(record.column_id, "todo");
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let card = Card { order: 2, ..Card::new("a", "x", "done") };
        let json = serde_json::to_string(&card.to_record()).unwrap();
        assert_eq!(json, r#"{"id":"a","content":"x","columnId":"done","order":2}"#);
    }
}
