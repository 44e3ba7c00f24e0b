//! Scratch card entity and its persisted record form.

use std::collections::BTreeMap;

use thiserror::Error;

/// The complete card collection, keyed by code.
///
/// A `BTreeMap` keeps iteration order stable across snapshots so list
/// consumers render deterministically.
pub type CardSet = BTreeMap<String, Card>;

/// A single scratch card.
///
/// Cards are immutable values: state changes produce a new card with one
/// flag flipped. An activated card is always scratched; [`Card::activated`]
/// maintains that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Opaque unique identifier, used as the map key.
    pub code: String,
    pub is_scratched: bool,
    pub is_activated: bool,
}

/// Errors raised when decoding a stored card record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardRecordError {
    #[error("empty card record")]
    Empty,

    #[error("malformed card record: {0:?}")]
    Malformed(String),

    #[error("invalid flag {value:?} in card record {record:?}")]
    InvalidFlag { record: String, value: String },
}

impl Card {
    /// Create a fresh card: not scratched, not activated.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            is_scratched: false,
            is_activated: false,
        }
    }

    /// Copy of this card with the scratched flag set.
    pub fn scratched(self) -> Self {
        Self {
            is_scratched: true,
            ..self
        }
    }

    /// Copy of this card with the activation outcome applied.
    ///
    /// Activation implies the card has been scratched.
    pub fn activated(self, activated: bool) -> Self {
        Self {
            is_scratched: self.is_scratched || activated,
            is_activated: activated,
            ..self
        }
    }

    /// Encode as the `code;is_scratched;is_activated` record form used by
    /// card stores.
    pub fn to_record(&self) -> String {
        format!("{};{};{}", self.code, self.is_scratched, self.is_activated)
    }

    /// Decode a stored record.
    ///
    /// The legacy two-field form `code;is_scratched` is accepted and defaults
    /// the activation flag to `false`.
    pub fn from_record(record: &str) -> Result<Self, CardRecordError> {
        let record = record.trim();
        if record.is_empty() {
            return Err(CardRecordError::Empty);
        }

        let parts: Vec<&str> = record.split(';').collect();
        let (code, is_scratched, is_activated) = match parts.as_slice() {
            [code, scratched] => (*code, *scratched, "false"),
            [code, scratched, activated] => (*code, *scratched, *activated),
            _ => return Err(CardRecordError::Malformed(record.to_string())),
        };
        if code.is_empty() {
            return Err(CardRecordError::Malformed(record.to_string()));
        }

        let parse_flag = |value: &str| {
            value
                .parse::<bool>()
                .map_err(|_| CardRecordError::InvalidFlag {
                    record: record.to_string(),
                    value: value.to_string(),
                })
        };

        Ok(Self {
            code: code.to_string(),
            is_scratched: parse_flag(is_scratched)?,
            is_activated: parse_flag(is_activated)?,
        })
    }
}
