//! In-memory card store for tests and embedding without a backing file.

use std::sync::RwLock;

use cards_core::Card;

use super::traits::{CardStore, StoreError};

#[derive(Default)]
pub struct MemoryCardStore {
    cards: RwLock<Vec<Card>>,
}

impl MemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: RwLock::new(cards),
        }
    }
}

impl CardStore for MemoryCardStore {
    fn load(&self) -> Result<Vec<Card>, StoreError> {
        let cards = self.cards.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(cards.clone())
    }

    fn save(&self, cards: &[Card]) -> Result<(), StoreError> {
        let mut current = self.cards.write().map_err(|_| StoreError::LockPoisoned)?;
        *current = cards.to_vec();
        Ok(())
    }
}
