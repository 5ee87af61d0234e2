//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are user actions (add, edit, delete, typing into a draft) that
/// reducers turn into new states.
pub trait Intent: Send + 'static {}
