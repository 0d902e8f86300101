//! Base trait for intents (user/system actions) in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Shopper actions (taps, navigation)
/// - Reports from external collaborators (workflow progress)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
