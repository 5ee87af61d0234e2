//! Popup rendering for the add-item dialog.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::draft::DraftField;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::list_view::CARET;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

use super::state::AddDialogState;

const DIALOG_WIDTH: u16 = 48;

pub fn render_add_dialog(frame: &mut Frame, area: Rect, state: &AddDialogState) {
    if !state.is_visible() {
        return;
    }

    let lines = dialog_lines(state);
    let height = lines.len() as u16 + 2;
    let popup = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" Add Shopping Item ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn dialog_lines(state: &AddDialogState) -> Vec<Line<'static>> {
    let input = |label: &'static str, text: &str, field: DraftField| {
        let focused = state.focus == field;
        let caret = if focused { CARET } else { "" };
        let label_style = if focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(format!("{text}{caret}"), Style::default().fg(HEADER_TEXT)),
        ])
    };

    vec![
        input(" Name:     ", &state.draft_name, DraftField::Name),
        input(" Quantity: ", &state.draft_quantity, DraftField::Quantity),
        Line::from(""),
        Line::from(Span::styled(
            " Enter: Add  Tab: Switch  Esc: Cancel",
            Style::default().fg(MUTED_TEXT),
        )),
    ]
}
