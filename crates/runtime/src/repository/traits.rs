//! Store contract for durable card persistence.

use cards_core::{Card, CardRecordError};
use thiserror::Error;

/// Errors raised by card store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted card record: {0}")]
    Corrupted(#[from] CardRecordError),

    #[error("card store lock was poisoned")]
    LockPoisoned,
}

/// Load/save boundary to durable card storage.
///
/// `save` is an idempotent full overwrite: the repository always hands over
/// the complete current set, never an incremental change. Implementations are
/// shared across concurrent operations and must be internally thread-safe.
pub trait CardStore: Send + Sync {
    /// Load every stored card. Nothing stored yields an empty list.
    fn load(&self) -> Result<Vec<Card>, StoreError>;

    /// Replace the stored collection with the complete current set.
    fn save(&self, cards: &[Card]) -> Result<(), StoreError>;
}
