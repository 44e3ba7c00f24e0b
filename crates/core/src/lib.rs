//! Pure value types shared across the scratch-card workspace.
//!
//! `cards-core` defines the card entity and its persisted record form, the
//! tri-state [`State`] primitive used to represent asynchronous fallible
//! computations, and the lazy path-tracked [`json`] tree reader. Everything
//! here is synchronous and I/O-free; orchestration lives in `cards-runtime`.
pub mod card;
pub mod json;
pub mod state;

pub use card::{Card, CardRecordError, CardSet};
pub use json::{JsonDocument, JsonMismatch, JsonReader, parse};
pub use state::State;
