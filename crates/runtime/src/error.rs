//! Error surface of the cards runtime.
//!
//! Every failure a repository operation can publish or return is a
//! [`CardError`]; store adapters raise [`StoreError`](crate::repository::StoreError)
//! internally and the repository wraps it with context before surfacing it.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CardError>;

/// Errors surfaced by repository operations, either as a returned `Err` or
/// through the `Failure` arm of a published snapshot slot.
///
/// `Clone + PartialEq` let snapshots carrying a failure be compared
/// structurally; two failures are equal when both variant and message match.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardError {
    /// The operation referenced a code absent from the cache.
    #[error("Card {0} not found")]
    NotFound(String),

    /// Activation was attempted before any cards were loaded.
    #[error("No cards loaded")]
    NotLoaded,

    /// A card store fault, wrapped with context.
    #[error("Failed to persist cards: {0}")]
    Persistence(String),

    /// The remote call failed, or it succeeded and the threshold was not met.
    #[error("{0}")]
    Validation(String),
}
