use crate::item::{IdScheme, Item};
use crate::store::ShoppingListStore;
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState};
use crate::ui::mvi::dispatch_mvi;

/// Which part of the screen receives key presses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    List,
    AddDialog,
    Editor,
}

pub struct App {
    should_quit: bool,
    store: ShoppingListStore,
    /// Draft text of the inline editor row (MVI pattern).
    editor: EditorState,
    /// Highlighted row in the list.
    selected: usize,
}

impl App {
    pub fn new(id_scheme: IdScheme) -> Self {
        Self {
            should_quit: false,
            store: ShoppingListStore::new(id_scheme),
            editor: EditorState::default(),
            selected: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> &ShoppingListStore {
        &self.store
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn mode(&self) -> Mode {
        if self.store.dialog().is_visible() {
            Mode::AddDialog
        } else if self.editor.is_active() {
            Mode::Editor
        } else {
            Mode::List
        }
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.store.items().get(self.selected)
    }

    /// The row the editor was opened on. Selection does not move while the
    /// editor is active.
    pub fn editing_item(&self) -> Option<&Item> {
        let id = self.editor.id()?;
        self.selected_item().filter(|item| item.id == id)
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.store.items().len();
        if len == 0 {
            self.selected = 0;
            return;
        }

        let current = self.selected.min(len - 1);
        self.selected = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    // ========================================================================
    // Add dialog
    // ========================================================================

    pub fn open_add_dialog(&mut self) {
        self.store.open_dialog();
    }

    pub fn cancel_add_dialog(&mut self) {
        self.store.cancel_dialog();
    }

    /// Confirm the dialog. A rejected add leaves the dialog open.
    pub fn confirm_add(&mut self) {
        if self.store.confirm_add().is_ok() {
            self.selected = self.store.items().len().saturating_sub(1);
        }
    }

    pub fn dialog_input(&mut self, ch: char) {
        self.store.type_char(ch);
    }

    pub fn dialog_backspace(&mut self) {
        self.store.backspace();
    }

    pub fn dialog_switch_field(&mut self) {
        self.store.switch_field();
    }

    // ========================================================================
    // Inline editor (MVI pattern)
    // ========================================================================

    /// Put the selected row into edit mode and seed the editor drafts.
    pub fn begin_edit_selected(&mut self) {
        let Some(item) = self.selected_item().cloned() else {
            return;
        };
        self.store.begin_edit(item.id);
        self.dispatch_editor(EditorIntent::Open { item });
    }

    /// Write the editor drafts back into the selected row and leave edit
    /// mode.
    pub fn commit_edit(&mut self) {
        let Some(commit) = self.editor.commit() else {
            return;
        };
        match self.editing_item().cloned() {
            Some(item) => self
                .store
                .commit_edit_item(&item, commit.name, commit.quantity),
            None => self
                .store
                .commit_edit(commit.id, commit.name, commit.quantity),
        }
        self.dispatch_editor(EditorIntent::Close);
    }

    pub fn editor_input(&mut self, ch: char) {
        self.dispatch_editor(EditorIntent::Input { ch });
    }

    pub fn editor_backspace(&mut self) {
        self.dispatch_editor(EditorIntent::Backspace);
    }

    pub fn editor_switch_field(&mut self) {
        self.dispatch_editor(EditorIntent::SwitchField);
    }

    fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    // ========================================================================
    // Delete
    // ========================================================================

    /// Remove the highlighted row itself, even when an earlier row carries
    /// the same id.
    pub fn delete_selected(&mut self) {
        let Some(item) = self.selected_item().cloned() else {
            return;
        };
        let id = item.id;
        self.store.remove_item(&item);
        if self.editor.id() == Some(id) && !self.store.list().is_editing(id) {
            self.dispatch_editor(EditorIntent::Close);
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.store.items().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, Quantity};

    fn app_with(names: &[&str]) -> App {
        let mut app = App::new(IdScheme::ListLength);
        for name in names {
            app.open_add_dialog();
            for ch in name.chars() {
                app.dialog_input(ch);
            }
            app.confirm_add();
        }
        app
    }

    #[test]
    fn starts_in_list_mode() {
        let app = App::new(IdScheme::ListLength);
        assert_eq!(app.mode(), Mode::List);
        assert!(!app.should_quit());
    }

    #[test]
    fn confirm_add_selects_new_row() {
        let app = app_with(&["Milk", "Eggs"]);
        assert_eq!(app.selected(), 1);
        assert_eq!(app.mode(), Mode::List);
    }

    #[test]
    fn blank_name_keeps_dialog_open() {
        let mut app = App::new(IdScheme::ListLength);
        app.open_add_dialog();
        app.dialog_input(' ');
        app.confirm_add();
        assert_eq!(app.mode(), Mode::AddDialog);
        assert!(app.store().items().is_empty());
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = app_with(&["a", "b", "c"]);
        app.move_selection(1);
        assert_eq!(app.selected(), 0);
        app.move_selection(-1);
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn move_selection_on_empty_list_stays_at_zero() {
        let mut app = App::new(IdScheme::ListLength);
        app.move_selection(1);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn edit_commit_round_trip() {
        let mut app = app_with(&["Eggs"]);
        app.begin_edit_selected();
        assert_eq!(app.mode(), Mode::Editor);
        assert!(app.store().list().is_editing(ItemId(1)));

        app.editor_switch_field();
        app.editor_backspace();
        app.editor_input('1');
        app.editor_input('2');
        app.commit_edit();

        assert_eq!(app.mode(), Mode::List);
        let item = &app.store().items()[0];
        assert_eq!(item.name, "Eggs");
        assert_eq!(item.quantity, Quantity::new(12).unwrap());
        assert_eq!(app.store().list().editing, None);
    }

    #[test]
    fn delete_selected_clamps_selection() {
        let mut app = app_with(&["a", "b"]);
        assert_eq!(app.selected(), 1);
        app.delete_selected();
        assert_eq!(app.selected(), 0);
        app.delete_selected();
        assert_eq!(app.selected(), 0);
        assert!(app.store().items().is_empty());
        app.delete_selected();
        assert!(app.store().items().is_empty());
    }

    #[test]
    fn delete_selected_removes_that_row_when_ids_repeat() {
        let mut app = app_with(&["a", "b", "c"]);
        app.move_selection(1);
        app.delete_selected();
        app.open_add_dialog();
        app.dialog_input('d');
        app.confirm_add();

        let selected = app.selected_item().cloned().unwrap();
        assert_eq!(selected.id, ItemId(3));
        assert_eq!(selected.name, "d");

        app.delete_selected();
        let names: Vec<&str> = app
            .store()
            .items()
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn commit_edit_writes_the_selected_row_when_ids_repeat() {
        let mut app = app_with(&["a", "b", "c"]);
        app.move_selection(1);
        app.delete_selected();
        app.open_add_dialog();
        app.dialog_input('d');
        app.confirm_add();

        app.begin_edit_selected();
        app.editor_input('!');
        app.commit_edit();

        let names: Vec<&str> = app
            .store()
            .items()
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "c", "d!"]);
        assert_eq!(app.mode(), Mode::List);
    }

    #[test]
    fn begin_edit_on_empty_list_does_nothing() {
        let mut app = App::new(IdScheme::ListLength);
        app.begin_edit_selected();
        assert_eq!(app.mode(), Mode::List);
    }
}
