//! Scratch-card repository runtime.
//!
//! This crate wires the card store contract, the remote activation validator,
//! and the in-memory repository core into a cohesive API. Consumers embed
//! [`CardsRepository`] to issue mutating operations and subscribe to the
//! published [`RepositoryState`] snapshot.
//!
//! Modules are organized by responsibility:
//! - [`repository`] hosts the repository core, the store contract, and the
//!   bundled store adapters
//! - [`validator`] performs the remote threshold check for card activation
//! - [`config`] and [`error`] carry configuration and the error surface
pub mod config;
pub mod error;
pub mod repository;
pub mod validator;

pub use config::RepositoryConfig;
pub use error::{CardError, Result};
pub use repository::{
    CardStore, CardsRepository, FileCardStore, MemoryCardStore, RepositoryState, StoreError,
};
pub use validator::RemoteValidator;
