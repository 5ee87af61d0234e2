use crate::ui::draft::{push_char, DraftField};
use crate::ui::editor::intent::EditorIntent;
use crate::ui::editor::state::EditorState;
use crate::ui::mvi::Reducer;

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Open { item } => EditorState::Active {
                id: item.id,
                name: item.name,
                quantity: item.quantity.to_string(),
                focus: DraftField::Name,
            },
            EditorIntent::Close => EditorState::Hidden,
            EditorIntent::Input { ch } => match state {
                EditorState::Active {
                    id,
                    mut name,
                    mut quantity,
                    focus,
                } => {
                    match focus {
                        DraftField::Name => push_char(&mut name, ch),
                        DraftField::Quantity => push_char(&mut quantity, ch),
                    }
                    EditorState::Active {
                        id,
                        name,
                        quantity,
                        focus,
                    }
                }
                other => other,
            },
            EditorIntent::Backspace => match state {
                EditorState::Active {
                    id,
                    mut name,
                    mut quantity,
                    focus,
                } => {
                    match focus {
                        DraftField::Name => name.pop(),
                        DraftField::Quantity => quantity.pop(),
                    };
                    EditorState::Active {
                        id,
                        name,
                        quantity,
                        focus,
                    }
                }
                other => other,
            },
            EditorIntent::SwitchField => match state {
                EditorState::Active {
                    id,
                    name,
                    quantity,
                    focus,
                } => EditorState::Active {
                    id,
                    name,
                    quantity,
                    focus: focus.toggled(),
                },
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemId, Quantity};

    fn opened() -> EditorState {
        EditorReducer::reduce(
            EditorState::Hidden,
            EditorIntent::Open {
                item: Item::new(ItemId(2), "Eggs", Quantity::new(6).unwrap()),
            },
        )
    }

    #[test]
    fn open_seeds_drafts_from_item() {
        assert_eq!(
            opened(),
            EditorState::Active {
                id: ItemId(2),
                name: "Eggs".to_string(),
                quantity: "6".to_string(),
                focus: DraftField::Name,
            }
        );
    }

    #[test]
    fn edits_apply_to_focused_field() {
        let state = EditorReducer::reduce_all(
            opened(),
            [
                EditorIntent::SwitchField,
                EditorIntent::Backspace,
                EditorIntent::Input { ch: '1' },
                EditorIntent::Input { ch: '2' },
            ],
        );
        let commit = state.commit().unwrap();
        assert_eq!(commit.name, "Eggs");
        assert_eq!(commit.quantity.get(), 12);
    }

    #[test]
    fn input_while_hidden_is_ignored() {
        let state = EditorReducer::reduce(EditorState::Hidden, EditorIntent::Input { ch: 'x' });
        assert_eq!(state, EditorState::Hidden);
    }

    #[test]
    fn close_hides() {
        let state = EditorReducer::reduce(opened(), EditorIntent::Close);
        assert!(!state.is_active());
    }
}
