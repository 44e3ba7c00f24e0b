//! Published repository snapshot.

use cards_core::{CardSet, State};

use crate::error::CardError;

/// Aggregate state published to subscribers after every transition.
///
/// The two slots are independently timed; one never blocks the other. A slot
/// is `None` until its first operation runs (`activation` also returns to
/// `None` on reset). Snapshots are replaced wholesale, never patched in
/// place, so readers always observe a fully-formed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryState {
    pub cards: Option<State<CardError, CardSet>>,
    pub activation: Option<State<CardError, ()>>,
}

impl RepositoryState {
    pub fn cards_loading(&self) -> bool {
        matches!(self.cards, Some(State::Loading))
    }

    pub fn activation_loading(&self) -> bool {
        matches!(self.activation, Some(State::Loading))
    }

    /// The loaded card set, if the cards slot holds content.
    pub fn card_set(&self) -> Option<&CardSet> {
        self.cards.as_ref().and_then(State::value)
    }
}
