use crate::ui::add_dialog::intent::AddDialogIntent;
use crate::ui::add_dialog::state::AddDialogState;
use crate::ui::draft::{push_char, DraftField};
use crate::ui::mvi::Reducer;

pub struct AddDialogReducer;

impl Reducer for AddDialogReducer {
    type State = AddDialogState;
    type Intent = AddDialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AddDialogIntent::Open => AddDialogState {
                visible: true,
                focus: DraftField::Name,
                ..state
            },
            AddDialogIntent::Cancel => AddDialogState {
                visible: false,
                ..state
            },
            AddDialogIntent::Submitted => AddDialogState::default(),
            AddDialogIntent::Input { ch } if state.visible => {
                let mut state = state;
                match state.focus {
                    DraftField::Name => push_char(&mut state.draft_name, ch),
                    DraftField::Quantity => push_char(&mut state.draft_quantity, ch),
                }
                state
            }
            AddDialogIntent::Backspace if state.visible => {
                let mut state = state;
                match state.focus {
                    DraftField::Name => state.draft_name.pop(),
                    DraftField::Quantity => state.draft_quantity.pop(),
                };
                state
            }
            AddDialogIntent::SwitchField if state.visible => AddDialogState {
                focus: state.focus.toggled(),
                ..state
            },
            // Typing into a hidden dialog is ignored.
            _ => state,
        }
    }
}
