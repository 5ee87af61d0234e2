use crate::item::{Item, ItemId, Quantity};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// Append an item. The name has already passed blank-name validation.
    Add { name: String, quantity: Quantity },
    /// Mark `id` as the single item in edit mode.
    BeginEdit { id: ItemId },
    /// Leave edit mode and write the edited values into the first item
    /// with `id`, if any.
    CommitEdit {
        id: ItemId,
        name: String,
        quantity: Quantity,
    },
    /// Like `CommitEdit`, but writes into the first item equal to `item`.
    Replace {
        item: Item,
        name: String,
        quantity: Quantity,
    },
    /// Remove the first item with `id`, if any.
    Delete { id: ItemId },
    /// Remove the first item equal to `item`, if any. Rows that share an
    /// id are told apart by their name and quantity.
    Remove { item: Item },
}

impl Intent for ListIntent {}
