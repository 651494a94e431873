//! Counter with a persisted set of favourite primes.
//!
//! [`store::AppStore`] owns the state, writes a full snapshot to a
//! [`prefs::PreferenceStore`] after every mutation and notifies observers.
//! The presentation layer reads [`ui::counter::CounterView`] and dispatches
//! [`ui::counter::CounterIntent`]s.

pub mod config;
pub mod error;
pub mod logging;
pub mod prefs;
pub mod prime;
pub mod store;
pub mod ui;

pub use error::AppError;
