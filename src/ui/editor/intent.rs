use crate::item::Item;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Seed the drafts from the item entering edit mode.
    Open { item: Item },
    Close,
    Input { ch: char },
    Backspace,
    SwitchField,
}

impl Intent for EditorIntent {}
