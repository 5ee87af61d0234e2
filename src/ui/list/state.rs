use crate::item::{IdScheme, Item, ItemId};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub items: Vec<Item>,
    /// Id currently in edit mode. Every item carrying this id renders as
    /// the editor row.
    pub editing: Option<ItemId>,
    pub id_scheme: IdScheme,
    /// Highest id issued so far; only consulted by [`IdScheme::Monotonic`].
    pub issued: u32,
}

impl UiState for ListState {}

/// One rendered row: the item plus its derived edit flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListRow<'a> {
    pub item: &'a Item,
    pub is_editing: bool,
}

impl ListState {
    pub fn with_id_scheme(id_scheme: IdScheme) -> Self {
        Self {
            id_scheme,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_editing(&self, id: ItemId) -> bool {
        self.editing == Some(id)
    }

    /// Index of the first item with `id`.
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Id the next added item will receive.
    pub fn next_id(&self) -> ItemId {
        match self.id_scheme {
            IdScheme::ListLength => ItemId(self.items.len() as u32 + 1),
            IdScheme::Monotonic => ItemId(self.issued + 1),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = ListRow<'_>> {
        self.items.iter().map(move |item| ListRow {
            item,
            is_editing: self.is_editing(item.id),
        })
    }
}
