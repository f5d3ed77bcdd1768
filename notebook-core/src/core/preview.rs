//! Preview grid and detail rendering for notes.

use crate::Note;

/// How the preview grid is arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLayout {
    /// Previews per row. Zero is treated as one.
    pub columns: usize,
    /// Characters of body text shown before the excerpt is cut.
    pub excerpt_chars: usize,
}

impl Default for PreviewLayout {
    fn default() -> Self {
        Self {
            columns: 3,
            excerpt_chars: 30,
        }
    }
}

impl PreviewLayout {
    fn effective_columns(&self) -> usize {
        self.columns.max(1)
    }
}

/// One cell of the preview grid.
///
/// `index` is the note's position in the store; passing it to
/// [`crate::NoteStore::get`] opens the full note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePreview {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub title: String,
    pub excerpt: String,
}

impl NotePreview {
    pub(crate) fn new(index: usize, note: &Note, layout: &PreviewLayout) -> Self {
        let columns = layout.effective_columns();
        Self {
            index,
            row: index / columns,
            column: index % columns,
            title: note.title().to_string(),
            excerpt: excerpt(note.text(), layout.excerpt_chars),
        }
    }

    /// Text shown on the preview button.
    pub fn label(&self) -> String {
        format!("Title: {}\nText: {}\n", self.title, self.excerpt)
    }
}

/// Cuts `text` to `max_chars` characters, marking the cut with `...`.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Number of grid rows needed for `count` previews.
pub fn grid_rows(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}

/// Full text of the detail view for `note`.
pub fn render_detail(note: &Note) -> String {
    format!(
        "Title: {}\n{}\nlinks: {}\ntags: {}\n{}\n{}\n",
        note.title(),
        note.text(),
        note.links(),
        note.tags(),
        note.created_at(),
        note.zone()
    )
}
