use crate::item::{ItemId, Quantity};
use crate::ui::draft::DraftField;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Hidden,
    Active {
        id: ItemId,
        name: String,
        quantity: String,
        focus: DraftField,
    },
}

impl UiState for EditorState {}

/// Values ready to be written back into the list.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommit {
    pub id: ItemId,
    pub name: String,
    pub quantity: Quantity,
}

impl EditorState {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn id(&self) -> Option<ItemId> {
        match self {
            Self::Active { id, .. } => Some(*id),
            Self::Hidden => None,
        }
    }

    /// Turn the drafts into commit values. Quantity text that does not
    /// parse as a positive integer commits as 1.
    pub fn commit(&self) -> Option<EditCommit> {
        match self {
            Self::Active {
                id, name, quantity, ..
            } => Some(EditCommit {
                id: *id,
                name: name.clone(),
                quantity: Quantity::parse_or_default(quantity),
            }),
            Self::Hidden => None,
        }
    }
}
