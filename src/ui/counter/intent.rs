//! Intents for the counter screen.

use crate::ui::mvi::Intent;

use super::state::CounterState;

#[derive(Debug, Clone, PartialEq)]
pub enum CounterIntent {
    /// "+" pressed.
    Increment,
    /// "-" pressed.
    Decrement,
    /// Mark the current count as a favourite.
    AddToFavourites,
    /// Unmark the current count. No-op if it is not a favourite.
    RemoveFromFavourites,
    /// Replace the whole state (import, reset).
    Replace { state: CounterState },
}

impl Intent for CounterIntent {}
