//! Model-View-Intent (MVI) primitives for the shopping list screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └────────── key press ─────────┘
//! ```
//!
//! - **State**: value describing one piece of the screen
//! - **Intent**: a user action against that state
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::ui::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}

pub(crate) use dispatch_mvi;
