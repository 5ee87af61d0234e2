use crate::ui::draft::DraftField;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddDialogState {
    pub visible: bool,
    pub draft_name: String,
    /// Raw quantity text, parsed only when the dialog is confirmed.
    pub draft_quantity: String,
    pub focus: DraftField,
}

impl UiState for AddDialogState {}

impl AddDialogState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
