//! Repository core: the authoritative in-memory card cache.
//!
//! [`CardsRepository`] owns the only mutable copy of the card set plus the
//! activation state, serializes loading and activation per-resource through
//! single-flight guards, and republishes a consolidated [`RepositoryState`]
//! snapshot after every transition. Mutations persist the complete set
//! through the [`CardStore`] contract before the snapshot is published, so
//! subscribers and durable storage never observably disagree.
//!
//! Known limitations, kept on purpose:
//! - Beyond the two single-flight guards, concurrent mutating operations race
//!   last-write-wins against the shared snapshot (e.g. `scratch_card` and
//!   `generate_card` issued simultaneously).
//! - [`CardsRepository::reset_activate`] clears the observable slot but does
//!   not cancel an in-flight activation task; when that task completes it
//!   still publishes, repopulating the just-cleared slot.

mod file;
mod memory;
mod snapshot;
mod traits;

pub use file::FileCardStore;
pub use memory::MemoryCardStore;
pub use snapshot::RepositoryState;
pub use traits::{CardStore, StoreError};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use cards_core::{Card, CardSet, State};
use tokio::sync::watch;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::RepositoryConfig;
use crate::error::{CardError, Result};
use crate::validator::RemoteValidator;

/// Concurrently shared repository of scratch cards.
///
/// Cloning is cheap; all clones share the same state cell, store, and
/// validator. `load_cards`, `generate_card`, `scratch_card`, and
/// `remove_card` are awaited by the caller; `activate_card` is
/// fire-and-forget and reports only through the published snapshot.
#[derive(Clone)]
pub struct CardsRepository {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn CardStore>,
    validator: RemoteValidator,
    state: watch::Sender<RepositoryState>,
    load_in_flight: AtomicBool,
}

impl CardsRepository {
    pub fn new(store: Arc<dyn CardStore>, config: RepositoryConfig) -> Self {
        let (state, _) = watch::channel(RepositoryState::default());
        Self {
            inner: Arc::new(Inner {
                store,
                validator: RemoteValidator::new(config.endpoint),
                state,
                load_in_flight: AtomicBool::new(false),
            }),
        }
    }

    /// Subscribe to snapshot updates.
    ///
    /// Receivers always observe a fully-formed snapshot; like any watch
    /// channel, a slow reader sees the latest value rather than every
    /// intermediate one.
    pub fn subscribe(&self) -> watch::Receiver<RepositoryState> {
        self.inner.state.subscribe()
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> RepositoryState {
        self.inner.state.borrow().clone()
    }

    /// Load the persisted cards into the cache.
    ///
    /// No-op while a load is already in flight. The first load announces
    /// `Loading`; once the slot holds content, subsequent calls act as a
    /// background refresh and keep the previous snapshot visible until the
    /// new one lands. Store faults fold into the cards slot as a failure;
    /// this operation never returns an error.
    pub async fn load_cards(&self) {
        if self.inner.load_in_flight.swap(true, Ordering::SeqCst) {
            debug!("card load already in flight, dropping request");
            return;
        }

        self.inner.state.send_if_modified(|state| {
            if matches!(state.cards, Some(State::Content(_))) {
                return false;
            }
            state.cards = Some(State::Loading);
            true
        });

        let loaded = self.inner.store.load();
        self.inner.state.send_modify(|state| {
            state.cards = Some(match loaded {
                Ok(cards) => {
                    debug!(count = cards.len(), "cards loaded");
                    State::Content(
                        cards
                            .into_iter()
                            .map(|card| (card.code.clone(), card))
                            .collect(),
                    )
                }
                Err(error) => {
                    warn!(%error, "card load failed");
                    State::Failure(CardError::Persistence(error.to_string()))
                }
            });
        });

        self.inner.load_in_flight.store(false, Ordering::SeqCst);
    }

    /// Create a fresh card with a collision-improbable random code, persist
    /// the grown set, and publish it.
    ///
    /// A persistence fault propagates to the caller and leaves the published
    /// snapshot untouched.
    pub async fn generate_card(&self) -> Result<()> {
        let code = Uuid::new_v4().to_string();
        debug!(%code, "generating card");

        let snapshot = self.snapshot();
        let mut cards = snapshot.card_set().cloned().unwrap_or_default();
        cards.insert(code.clone(), Card::new(code));
        self.persist_and_publish(cards)
    }

    /// Mark the card as scratched, persist, publish.
    ///
    /// Fails fast with [`CardError::NotFound`] when the code is absent; the
    /// snapshot is not mutated in that case.
    pub async fn scratch_card(&self, code: &str) -> Result<()> {
        let snapshot = self.snapshot();
        let mut cards = snapshot.card_set().cloned().unwrap_or_default();
        let card = cards
            .remove(code)
            .ok_or_else(|| CardError::NotFound(code.to_string()))?;
        cards.insert(code.to_string(), card.scratched());
        self.persist_and_publish(cards)
    }

    /// Delete the card, persist the shrunk set, publish.
    pub async fn remove_card(&self, code: &str) -> Result<()> {
        let snapshot = self.snapshot();
        let mut cards = snapshot.card_set().cloned().unwrap_or_default();
        cards
            .remove(code)
            .ok_or_else(|| CardError::NotFound(code.to_string()))?;
        self.persist_and_publish(cards)
    }

    /// Activate the card against the remote validator.
    ///
    /// Fire-and-forget: the activation slot is set to `Loading` before this
    /// returns, the rest runs on a detached task, and completion is only
    /// observable through the published snapshot. A call arriving while an
    /// activation is in flight is dropped, not queued. The call never
    /// surfaces an error to its caller; every failure folds into the
    /// activation slot.
    pub fn activate_card(&self, code: &str) {
        let started = self.inner.state.send_if_modified(|state| {
            if state.activation_loading() {
                return false;
            }
            state.activation = Some(State::Loading);
            true
        });
        if !started {
            debug!(%code, "activation already in flight, dropping request");
            return;
        }

        let repository = self.clone();
        let code = code.to_string();
        tokio::spawn(async move {
            repository.run_activation(code).await;
        });
    }

    /// Clear the activation slot.
    ///
    /// Only the observable slot is reset; an in-flight activation task keeps
    /// running and will publish its result when it completes.
    pub fn reset_activate(&self) {
        self.inner.state.send_modify(|state| state.activation = None);
    }

    async fn run_activation(&self, code: String) {
        let snapshot = self.snapshot();
        let mut cards = match snapshot.card_set() {
            Some(cards) if !cards.is_empty() => cards.clone(),
            _ => {
                warn!(%code, "activation requested before any cards were loaded");
                self.fail_activation(CardError::NotLoaded);
                return;
            }
        };
        let Some(card) = cards.remove(&code) else {
            warn!(%code, "activation requested for unknown card");
            self.fail_activation(CardError::NotFound(code));
            return;
        };

        let outcome = self.inner.validator.validate(&code).await;
        cards.insert(code.clone(), card.activated(outcome.is_ok()));

        // The set is persisted whether or not the remote accepted the card,
        // so a rejected activation is durably recorded as not activated.
        let list: Vec<Card> = cards.values().cloned().collect();
        match self.inner.store.save(&list) {
            Ok(()) => self.inner.state.send_modify(move |state| {
                state.cards = Some(State::Content(cards));
                state.activation = Some(State::from_outcome(outcome));
            }),
            Err(error) => {
                warn!(%code, %error, "failed to persist activation outcome");
                self.fail_activation(CardError::Persistence(error.to_string()));
            }
        }
    }

    fn fail_activation(&self, error: CardError) {
        self.inner
            .state
            .send_modify(move |state| state.activation = Some(State::Failure(error)));
    }

    fn persist_and_publish(&self, cards: CardSet) -> Result<()> {
        let list: Vec<Card> = cards.values().cloned().collect();
        self.inner
            .store
            .save(&list)
            .map_err(|error| CardError::Persistence(error.to_string()))?;
        self.inner
            .state
            .send_modify(move |state| state.cards = Some(State::Content(cards)));
        Ok(())
    }
}
