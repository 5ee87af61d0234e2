//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to derive new states, compared to
/// detect changes, and defaulted when a screen is created.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
