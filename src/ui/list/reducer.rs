use crate::item::{Item, ItemId, Quantity};
use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ListState;
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Add { name, quantity } => {
                let id = state.next_id();
                let mut state = state;
                state.items.push(Item::new(id, name, quantity));
                state.issued = state.issued.max(id.0);
                tracing::debug!(%id, "item added");
                state
            }
            ListIntent::BeginEdit { id } => ListState {
                editing: Some(id),
                ..state
            },
            ListIntent::CommitEdit { id, name, quantity } => {
                let index = state.position(id);
                write_at(state, index, id, name, quantity)
            }
            ListIntent::Replace {
                item,
                name,
                quantity,
            } => {
                let index = state.items.iter().position(|candidate| *candidate == item);
                write_at(state, index, item.id, name, quantity)
            }
            ListIntent::Delete { id } => {
                let index = state.position(id);
                remove_at(state, index)
            }
            ListIntent::Remove { item } => {
                let index = state.items.iter().position(|candidate| *candidate == item);
                remove_at(state, index)
            }
        }
    }
}

/// Edit mode ends whether or not the target is found.
fn write_at(
    state: ListState,
    index: Option<usize>,
    id: ItemId,
    name: String,
    quantity: Quantity,
) -> ListState {
    let mut state = ListState {
        editing: None,
        ..state
    };
    match index {
        Some(index) => {
            let item = &mut state.items[index];
            item.name = name;
            item.quantity = quantity;
            tracing::debug!(%id, "item edited");
        }
        None => {
            tracing::debug!(%id, "commit for missing item ignored");
        }
    }
    state
}

fn remove_at(mut state: ListState, index: Option<usize>) -> ListState {
    let Some(index) = index else {
        return state;
    };
    let id = state.items.remove(index).id;
    if state.editing == Some(id) && state.position(id).is_none() {
        state.editing = None;
    }
    tracing::debug!(%id, "item deleted");
    state
}
