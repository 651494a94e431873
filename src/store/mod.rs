//! The counter state container and its persisted snapshot.

mod container;
mod snapshot;

pub use container::{AppStore, SubscriptionId};
pub use snapshot::{decode_pair, encode_pair, Snapshot, COUNT_FIELD, FAVOURITES_FIELD};
