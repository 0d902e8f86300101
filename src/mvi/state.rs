//! Base trait for state in the MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data the presentation layer needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait AppState: Clone + PartialEq + Default + Send + 'static {}
