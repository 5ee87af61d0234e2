//! The shopping list store: the item list plus the add-item dialog.
//!
//! Every operation runs synchronously and routes through the reducers in
//! [`crate::ui::list`] and [`crate::ui::add_dialog`].

use thiserror::Error;

use crate::item::{IdScheme, Item, ItemId, Quantity};
use crate::ui::add_dialog::{AddDialogIntent, AddDialogReducer, AddDialogState};
use crate::ui::list::{ListIntent, ListReducer, ListState};
use crate::ui::mvi::dispatch_mvi;

/// Why an add was refused. The dialog stays open in both cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddError {
    #[error("item name is blank")]
    BlankName,
    #[error("quantity '{text}' is not a positive integer")]
    InvalidQuantity { text: String },
}

#[derive(Debug, Clone, Default)]
pub struct ShoppingListStore {
    list: ListState,
    dialog: AddDialogState,
}

impl ShoppingListStore {
    pub fn new(id_scheme: IdScheme) -> Self {
        Self {
            list: ListState::with_id_scheme(id_scheme),
            dialog: AddDialogState::default(),
        }
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn items(&self) -> &[Item] {
        &self.list.items
    }

    pub fn dialog(&self) -> &AddDialogState {
        &self.dialog
    }

    /// Append a new item.
    ///
    /// `name` must contain something besides whitespace; it is stored as
    /// typed. An empty `quantity_text` means 1, anything else must parse
    /// as a positive integer. On success the drafts are cleared and the
    /// dialog closes; on failure nothing changes.
    pub fn add_item(&mut self, name: &str, quantity_text: &str) -> Result<ItemId, AddError> {
        if name.trim().is_empty() {
            tracing::debug!("add rejected: blank name");
            return Err(AddError::BlankName);
        }
        let quantity = if quantity_text.trim().is_empty() {
            Quantity::ONE
        } else {
            Quantity::parse(quantity_text).ok_or_else(|| {
                tracing::debug!(text = quantity_text, "add rejected: bad quantity");
                AddError::InvalidQuantity {
                    text: quantity_text.to_string(),
                }
            })?
        };

        let id = self.list.next_id();
        self.dispatch_list(ListIntent::Add {
            name: name.to_string(),
            quantity,
        });
        self.dispatch_dialog(AddDialogIntent::Submitted);
        Ok(id)
    }

    /// Run [`add_item`](Self::add_item) with the dialog's draft fields.
    pub fn confirm_add(&mut self) -> Result<ItemId, AddError> {
        let name = self.dialog.draft_name.clone();
        let quantity = self.dialog.draft_quantity.clone();
        self.add_item(&name, &quantity)
    }

    pub fn begin_edit(&mut self, id: ItemId) {
        self.dispatch_list(ListIntent::BeginEdit { id });
    }

    pub fn commit_edit(&mut self, id: ItemId, name: impl Into<String>, quantity: Quantity) {
        self.dispatch_list(ListIntent::CommitEdit {
            id,
            name: name.into(),
            quantity,
        });
    }

    /// Commit into the first item equal to `item`. Used for the row the user
    /// is editing, since ids can repeat.
    pub fn commit_edit_item(&mut self, item: &Item, name: impl Into<String>, quantity: Quantity) {
        self.dispatch_list(ListIntent::Replace {
            item: item.clone(),
            name: name.into(),
            quantity,
        });
    }

    /// Remove the first item with `id`.
    pub fn delete_item(&mut self, id: ItemId) {
        self.dispatch_list(ListIntent::Delete { id });
    }

    /// Remove the first item equal to `item`. Used for the row the user
    /// picked, since ids can repeat.
    pub fn remove_item(&mut self, item: &Item) {
        self.dispatch_list(ListIntent::Remove { item: item.clone() });
    }

    pub fn open_dialog(&mut self) {
        self.dispatch_dialog(AddDialogIntent::Open);
    }

    pub fn cancel_dialog(&mut self) {
        self.dispatch_dialog(AddDialogIntent::Cancel);
    }

    pub fn type_char(&mut self, ch: char) {
        self.dispatch_dialog(AddDialogIntent::Input { ch });
    }

    pub fn backspace(&mut self) {
        self.dispatch_dialog(AddDialogIntent::Backspace);
    }

    pub fn switch_field(&mut self) {
        self.dispatch_dialog(AddDialogIntent::SwitchField);
    }

    fn dispatch_list(&mut self, intent: ListIntent) {
        dispatch_mvi!(self, list, ListReducer, intent);
    }

    fn dispatch_dialog(&mut self, intent: AddDialogIntent) {
        dispatch_mvi!(self, dialog, AddDialogReducer, intent);
    }
}
