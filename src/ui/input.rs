use crate::ui::app::{App, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.mode() {
        Mode::AddDialog => handle_dialog_key(app, key),
        Mode::Editor => handle_editor_key(app, key),
        Mode::List => handle_list_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('a') | KeyCode::Char('+') => app.open_add_dialog(),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_add_dialog(),
        KeyCode::Enter => app.confirm_add(),
        KeyCode::Tab | KeyCode::BackTab => app.dialog_switch_field(),
        KeyCode::Backspace => app.dialog_backspace(),
        KeyCode::Char(ch) if is_plain(key) => app.dialog_input(ch),
        _ => {}
    }
}

// No cancel in the editor: Enter (save) is the only way out.
fn handle_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Tab | KeyCode::BackTab => app.editor_switch_field(),
        KeyCode::Backspace => app.editor_backspace(),
        KeyCode::Char(ch) if is_plain(key) => app.editor_input(ch),
        _ => {}
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
