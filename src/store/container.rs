use std::collections::BTreeSet;

use crate::error::AppError;
use crate::prefs::PreferenceStore;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;

use super::snapshot::{encode_pair, Snapshot};

/// Handle returned by [`AppStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&CounterState)>;

/// Observable counter state with write-through persistence.
///
/// Every mutation goes through [`dispatch`](Self::dispatch), which reduces the
/// intent, writes the full snapshot to the preference store, then notifies
/// observers. The store is owned by the interaction thread; mutations take
/// `&mut self` and nothing here is shared across threads.
pub struct AppStore<S: PreferenceStore> {
    state: CounterState,
    prefs: S,
    record_key: String,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<S: PreferenceStore> AppStore<S> {
    /// Build the store from whatever snapshot `prefs` holds under `record_key`.
    ///
    /// Never fails: a missing, unreadable or malformed snapshot yields the
    /// defaults (count 0, no favourites).
    pub fn load(prefs: S, record_key: impl Into<String>) -> Self {
        let record_key = record_key.into();
        let state = match prefs.read(&record_key) {
            Ok(Some(record)) => CounterState::from(Snapshot::from_record(&record)),
            Ok(None) => {
                tracing::debug!(key = %record_key, "No persisted snapshot, using defaults");
                CounterState::default()
            }
            Err(err) => {
                tracing::warn!(
                    key = %record_key,
                    error = %err,
                    "Failed to load persisted snapshot, using defaults"
                );
                CounterState::default()
            }
        };
        Self::with_state(prefs, record_key, state)
    }

    /// Build the store around an explicit state without touching `prefs`.
    pub fn with_state(prefs: S, record_key: impl Into<String>, state: CounterState) -> Self {
        Self {
            state,
            prefs,
            record_key: record_key.into(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    pub fn count(&self) -> i64 {
        self.state.count
    }

    pub fn favourite_primes(&self) -> &BTreeSet<i64> {
        &self.state.favourite_primes
    }

    pub fn is_prime(&self) -> bool {
        self.state.is_prime()
    }

    pub fn is_favourite_prime(&self) -> bool {
        self.state.is_favourite_prime()
    }

    /// The preference store backing this state.
    pub fn prefs(&self) -> &S {
        &self.prefs
    }

    /// "What is the nth prime?" for the current count. Not supported.
    pub fn nth_prime(&self) -> Result<i64, AppError> {
        tracing::debug!(count = self.state.count, "nth prime requested");
        Err(AppError::NotImplemented {
            feature: "nth prime lookup",
        })
    }

    pub fn increment(&mut self) -> Result<(), AppError> {
        self.dispatch(CounterIntent::Increment)
    }

    pub fn decrement(&mut self) -> Result<(), AppError> {
        self.dispatch(CounterIntent::Decrement)
    }

    pub fn add_to_favourites(&mut self) -> Result<(), AppError> {
        self.dispatch(CounterIntent::AddToFavourites)
    }

    pub fn remove_from_favourites(&mut self) -> Result<(), AppError> {
        self.dispatch(CounterIntent::RemoveFromFavourites)
    }

    /// Mutate, then persist, then notify.
    ///
    /// The in-memory state and observers always see the new value. A failed
    /// write is logged and returned as [`AppError::Persist`].
    pub fn dispatch(&mut self, intent: CounterIntent) -> Result<(), AppError> {
        tracing::debug!(intent = ?intent, "Dispatching counter intent");
        self.state = CounterReducer::reduce(std::mem::take(&mut self.state), intent);

        let persisted = self.persist();
        if let Err(err) = &persisted {
            tracing::warn!(key = %self.record_key, error = %err, "Snapshot not persisted");
        }

        self.notify();
        persisted
    }

    /// Write the full snapshot under the record key.
    pub fn persist(&self) -> Result<(), AppError> {
        let record = Snapshot::from(&self.state).to_record();
        self.prefs.write(&self.record_key, record)?;
        tracing::trace!(
            key = %self.record_key,
            count = self.state.count,
            favourites = self.state.favourite_primes.len(),
            "Snapshot persisted"
        );
        Ok(())
    }

    /// Pair encoding of the current state, see [`encode_pair`].
    pub fn encode(&self) -> Result<String, AppError> {
        encode_pair(&self.state)
    }

    /// Register `observer`; it is called with the new state after every dispatch.
    pub fn subscribe(&mut self, observer: impl FnMut(&CounterState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        tracing::trace!(subscription = id.0, "Observer subscribed");
        id
    }

    /// Remove an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer(&self.state);
        }
    }
}
