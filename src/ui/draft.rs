//! Text drafts shared by the add dialog and the inline editor row.

/// Which of the two draft inputs receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Name,
    Quantity,
}

impl DraftField {
    pub fn toggled(self) -> Self {
        match self {
            DraftField::Name => DraftField::Quantity,
            DraftField::Quantity => DraftField::Name,
        }
    }
}

/// Append a typed character. Control characters are dropped since both
/// inputs are single-line.
pub fn push_char(text: &mut String, ch: char) {
    if !ch.is_control() {
        text.push(ch);
    }
}
