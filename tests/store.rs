mod common;

use common::{id, ids, qty, store_with};
use shoplist::item::{IdScheme, Item, Quantity};
use shoplist::store::{AddError, ShoppingListStore};
use shoplist::ui::editor::{EditorIntent, EditorReducer, EditorState};
use shoplist::ui::mvi::Reducer;

#[test]
fn add_blank_name_is_refused_and_dialog_stays_open() {
    let mut store = ShoppingListStore::default();
    store.open_dialog();
    store.type_char(' ');
    store.switch_field();
    store.type_char('2');

    assert_eq!(store.confirm_add(), Err(AddError::BlankName));
    assert!(store.items().is_empty());
    assert!(store.dialog().is_visible());
    assert_eq!(store.dialog().draft_quantity, "2");
}

#[test]
fn add_milk_to_empty_list() {
    let mut store = ShoppingListStore::default();
    assert_eq!(store.add_item("Milk", "3"), Ok(id(1)));
    assert_eq!(store.items(), &[Item::new(id(1), "Milk", qty(3))]);
    assert!(!store.list().is_editing(id(1)));
}

#[test]
fn successful_add_clears_drafts_and_closes_dialog() {
    let mut store = ShoppingListStore::default();
    store.open_dialog();
    for ch in "Milk".chars() {
        store.type_char(ch);
    }
    store.switch_field();
    store.type_char('3');

    assert_eq!(store.confirm_add(), Ok(id(1)));
    assert!(!store.dialog().is_visible());
    assert!(store.dialog().draft_name.is_empty());
    assert!(store.dialog().draft_quantity.is_empty());
}

#[test]
fn empty_quantity_on_add_means_one() {
    let mut store = ShoppingListStore::default();
    store.add_item("Salt", "").unwrap();
    assert_eq!(store.items()[0].quantity, Quantity::ONE);
}

#[test]
fn unparsable_quantity_on_add_is_refused() {
    let mut store = ShoppingListStore::default();
    store.open_dialog();
    let result = store.add_item("Salt", "a pinch");
    assert_eq!(
        result,
        Err(AddError::InvalidQuantity {
            text: "a pinch".to_string()
        })
    );
    assert!(store.items().is_empty());
    assert!(store.dialog().is_visible());
}

#[test]
fn zero_quantity_on_add_is_refused() {
    let mut store = ShoppingListStore::default();
    assert!(matches!(
        store.add_item("Salt", "0"),
        Err(AddError::InvalidQuantity { .. })
    ));
}

#[test]
fn name_is_stored_as_typed() {
    let mut store = ShoppingListStore::default();
    store.add_item("  Oat milk ", "1").unwrap();
    assert_eq!(store.items()[0].name, "  Oat milk ");
}

#[test]
fn three_adds_get_ids_one_two_three() {
    let store = store_with(IdScheme::ListLength, &["a", "b", "c"]);
    assert_eq!(ids(&store), vec![1, 2, 3]);
}

#[test]
fn cancel_closes_dialog_without_mutation() {
    let mut store = store_with(IdScheme::ListLength, &["a"]);
    store.open_dialog();
    store.type_char('b');
    store.cancel_dialog();

    assert!(!store.dialog().is_visible());
    assert_eq!(store.dialog().draft_name, "b");
    assert_eq!(ids(&store), vec![1]);
}

#[test]
fn begin_edit_is_exclusive() {
    let mut store = store_with(IdScheme::ListLength, &["a", "b", "c"]);
    store.begin_edit(id(1));
    store.begin_edit(id(2));
    let flags: Vec<bool> = store.list().rows().map(|row| row.is_editing).collect();
    assert_eq!(flags, vec![false, true, false]);
}

#[test]
fn commit_with_empty_quantity_text_resolves_to_one() {
    let mut store = store_with(IdScheme::ListLength, &["Bread"]);
    let item = store.items()[0].clone();
    store.begin_edit(item.id);
    let editor = EditorReducer::reduce_all(
        EditorState::Hidden,
        [
            EditorIntent::Open { item },
            EditorIntent::SwitchField,
            EditorIntent::Backspace,
        ],
    );

    let commit = editor.commit().unwrap();
    store.commit_edit(commit.id, commit.name, commit.quantity);

    assert_eq!(store.items()[0].quantity, Quantity::ONE);
    assert!(!store.list().is_editing(id(1)));
}

#[test]
fn delete_twice_in_a_row_is_a_noop_the_second_time() {
    let mut store = store_with(IdScheme::ListLength, &["a", "b"]);
    store.delete_item(id(1));
    store.delete_item(id(1));
    assert_eq!(ids(&store), vec![2]);
}

#[test]
fn deleting_then_adding_can_collide_under_list_length() {
    let mut store = store_with(IdScheme::ListLength, &["a", "b", "c"]);
    store.delete_item(id(1));
    assert_eq!(store.add_item("d", "1"), Ok(id(3)));
    assert_eq!(ids(&store), vec![2, 3, 3]);
}

#[test]
fn monotonic_ids_stay_unique_after_deletes() {
    let mut store = store_with(IdScheme::Monotonic, &["a", "b", "c"]);
    store.delete_item(id(3));
    assert_eq!(store.add_item("d", "1"), Ok(id(4)));
}

#[test]
fn eggs_end_to_end() {
    let mut store = ShoppingListStore::default();
    store.add_item("Eggs", "2").unwrap();
    store.begin_edit(id(1));
    assert!(store.list().is_editing(id(1)));
    store.commit_edit(id(1), "Eggs", qty(12));

    assert_eq!(store.items(), &[Item::new(id(1), "Eggs", qty(12))]);
    assert_eq!(store.list().editing, None);
}

#[test]
fn remove_and_commit_by_value_pick_the_later_duplicate() {
    let mut store = store_with(IdScheme::ListLength, &["a", "b", "c"]);
    store.delete_item(id(1));
    store.add_item("d", "1").unwrap();
    let d = store.items()[2].clone();

    store.begin_edit(d.id);
    store.commit_edit_item(&d, "dd", qty(2));
    assert_eq!(store.items()[1], Item::new(id(3), "c", qty(1)));
    assert_eq!(store.items()[2], Item::new(id(3), "dd", qty(2)));
    assert_eq!(store.list().editing, None);

    let dd = store.items()[2].clone();
    store.remove_item(&dd);
    assert_eq!(store.items(), &[Item::new(id(2), "b", qty(1)), Item::new(id(3), "c", qty(1))]);
}
