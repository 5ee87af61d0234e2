use crate::item::Item;
use crate::ui::app::App;
use crate::ui::draft::DraftField;
use crate::ui::editor::EditorState;
use crate::ui::layout::visible_rows;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, EDIT_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const CARET: &str = "▏";

pub fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let lines = list_lines(app, area.height as usize);
    frame.render_widget(Paragraph::new(lines), area);
}

fn list_lines(app: &App, height: usize) -> Vec<Line<'static>> {
    let list = app.store().list();
    if list.is_empty() {
        return vec![Line::from(Span::styled(
            "  Nothing on the list. Press 'a' to add an item.",
            Style::default().fg(MUTED_TEXT),
        ))];
    }

    let name_width = list
        .items
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0);

    list.rows()
        .enumerate()
        .skip(visible_rows(list.len(), app.selected(), height).start)
        .take(height)
        .map(|(index, row)| {
            if row.is_editing {
                editor_line(row.item, app.editor(), index == app.selected())
            } else {
                item_line(row.item, name_width, index == app.selected())
            }
        })
        .collect()
}

fn item_line(item: &Item, name_width: usize, selected: bool) -> Line<'static> {
    let marker = if selected { " › " } else { "   " };
    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(
            format!("{:<width$}", item.name, width = name_width),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(
            format!("   Qty: {}", item.quantity),
            Style::default().fg(MUTED_TEXT),
        ),
    ]);
    if selected {
        line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        line
    }
}

/// Editor row. Drafts are shown only on the row the editor was opened on;
/// other rows sharing its id show their stored values.
fn editor_line(item: &Item, editor: &EditorState, selected: bool) -> Line<'static> {
    let (name, quantity, focus) = match editor {
        EditorState::Active {
            id,
            name,
            quantity,
            focus,
        } if selected && *id == item.id => (name.clone(), quantity.clone(), Some(*focus)),
        _ => (item.name.clone(), item.quantity.to_string(), None),
    };
    let field = |text: String, draft: DraftField| {
        let caret = if focus == Some(draft) { CARET } else { "" };
        format!("[{text}{caret}]")
    };
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);

    Line::from(vec![
        Span::styled(" ✎ ", Style::default().fg(ACCENT)),
        Span::styled("Name: ", label),
        Span::styled(field(name, DraftField::Name), value),
        Span::styled("  Qty: ", label),
        Span::styled(field(quantity, DraftField::Quantity), value),
        Span::styled(
            "  [Save]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ])
    .style(Style::default().bg(EDIT_HIGHLIGHT))
}
