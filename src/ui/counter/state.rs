//! State for the counter screen.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::prime;
use crate::ui::mvi::UiState;

/// Serialized shape of [`CounterState`]: `(count, favourites)`.
type StatePair = (i64, Vec<i64>);

/// Counter value plus the user's favourite values.
///
/// Serializes as the ordered pair `(count, [favourites...])`. Favourites are
/// emitted in ascending order; duplicates in the input collapse on decode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "StatePair", into = "StatePair")]
pub struct CounterState {
    pub count: i64,
    pub favourite_primes: BTreeSet<i64>,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(count: i64, favourite_primes: impl IntoIterator<Item = i64>) -> Self {
        Self {
            count,
            favourite_primes: favourite_primes.into_iter().collect(),
        }
    }

    /// Whether the current count is prime.
    pub fn is_prime(&self) -> bool {
        prime::is_prime(self.count)
    }

    /// Whether the current count has been marked as a favourite.
    pub fn is_favourite_prime(&self) -> bool {
        self.favourite_primes.contains(&self.count)
    }
}

impl From<StatePair> for CounterState {
    fn from((count, favourites): StatePair) -> Self {
        Self::new(count, favourites)
    }
}

impl From<CounterState> for StatePair {
    fn from(state: CounterState) -> Self {
        (state.count, state.favourite_primes.into_iter().collect())
    }
}
