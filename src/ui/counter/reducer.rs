//! Reducer for the counter screen.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Pure counter state transitions.
///
/// Persistence and observer notification happen in `AppStore::dispatch`
/// around the call to `reduce`. Count arithmetic saturates at the `i64`
/// bounds.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                count: state.count.saturating_add(1),
                ..state
            },
            CounterIntent::Decrement => CounterState {
                count: state.count.saturating_sub(1),
                ..state
            },
            CounterIntent::AddToFavourites => {
                let CounterState {
                    count,
                    mut favourite_primes,
                } = state;
                favourite_primes.insert(count);
                CounterState {
                    count,
                    favourite_primes,
                }
            }
            CounterIntent::RemoveFromFavourites => {
                let CounterState {
                    count,
                    mut favourite_primes,
                } = state;
                favourite_primes.remove(&count);
                CounterState {
                    count,
                    favourite_primes,
                }
            }
            CounterIntent::Replace { state } => state,
        }
    }
}
