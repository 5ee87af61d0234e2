use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AddDialogIntent {
    Open,
    /// Close without touching the list. Drafts are kept for the next open.
    Cancel,
    /// The drafts were turned into an item: clear them and close.
    Submitted,
    Input { ch: char },
    Backspace,
    SwitchField,
}

impl Intent for AddDialogIntent {}
