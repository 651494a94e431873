//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (the "+"/"-" buttons, favourite toggles)
/// - Wholesale replacements (import, reset)
///
/// Intents are processed by reducers to produce new states. `Debug` is
/// required so dispatch can log what was applied.
pub trait Intent: std::fmt::Debug + Send + 'static {}
