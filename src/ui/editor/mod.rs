//! Draft text of the inline editor row.
//!
//! The list only records which id is being edited; the text the user is
//! typing lives here until it is committed.

mod intent;
mod reducer;
mod state;

pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditCommit, EditorState};
