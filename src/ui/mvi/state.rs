//! Base trait for state in MVI architecture.

/// Marker trait for state objects driven by a [`Reducer`](super::Reducer).
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything the view model is derived from)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` is the initial state before anything has been loaded.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
