//! Reducer trait for the list, dialog and editor state machines.

use super::intent::Intent;
use super::state::UiState;

/// Pure `(state, intent) -> state` transition.
///
/// Reducers are the only place state changes. They never fail: an intent
/// that does not apply to the current state returns it unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Fold a sequence of intents over `state`, in order.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
