use thiserror::Error;

use crate::prefs::PrefsError;

/// Errors surfaced by [`AppStore`](crate::store::AppStore).
#[derive(Debug, Error)]
pub enum AppError {
    /// The in-memory state changed but the snapshot could not be written.
    #[error("Failed to persist state: {0}")]
    Persist(#[from] PrefsError),

    #[error("{feature} is not implemented")]
    NotImplemented { feature: &'static str },

    #[error("Invalid state encoding: {0}")]
    Codec(#[from] serde_json::Error),
}
