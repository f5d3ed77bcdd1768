//! The in-memory note collection for one session.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, FixedOffset};

use crate::core::format::{read_notes, write_notes};
use crate::{CapturedAt, Note, NoteFields, NotePreview, NotebookError, PreviewLayout, Result};

/// Ordered collection of notes, in the order they were created or loaded.
///
/// The store only grows: notes are appended by [`NoteStore::create`] and
/// [`NoteStore::load`] and are never edited or removed. Callers re-query
/// [`NoteStore::all`] after a mutation to refresh their view.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a note stamped with the current local time and appends it.
    pub fn create(&mut self, fields: NoteFields) -> &Note {
        self.push(Note::new(fields, CapturedAt::now()))
    }

    /// Creates a note stamped with `at` and appends it.
    pub fn create_at(&mut self, fields: NoteFields, at: &DateTime<FixedOffset>) -> &Note {
        self.push(Note::new(fields, CapturedAt::from_datetime(at)))
    }

    fn push(&mut self, note: Note) -> &Note {
        log::debug!("created note {} ({:?})", self.notes.len() + 1, note.title());
        self.notes.push(note);
        &self.notes[self.notes.len() - 1]
    }

    /// Appends every complete record in the notebook file at `path` and
    /// returns how many notes were added.
    ///
    /// # Errors
    ///
    /// Returns [`NotebookError::Io`] if the file cannot be opened or read. The
    /// store is unchanged in that case.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let loaded = read_notes(BufReader::new(file))?;
        let count = loaded.len();
        self.notes.extend(loaded);
        log::debug!("loaded {count} note(s) from {}", path.display());
        Ok(count)
    }

    /// Writes every note to `path`, replacing any existing file, and returns
    /// how many notes were written.
    ///
    /// # Errors
    ///
    /// Returns [`NotebookError::Io`] if the file cannot be created or written.
    /// A failure part-way through leaves a partially written file behind.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        write_notes(&mut writer, &self.notes)?;
        writer.flush()?;
        log::debug!("saved {} note(s) to {}", self.notes.len(), path.display());
        Ok(self.notes.len())
    }

    /// All notes, in insertion order.
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    /// The note at `index`, as addressed by [`NotePreview::index`].
    ///
    /// # Errors
    ///
    /// Returns [`NotebookError::NoteNotFound`] if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<&Note> {
        self.notes.get(index).ok_or(NotebookError::NoteNotFound(index))
    }

    /// Preview cells for every note, laid out by `layout`.
    pub fn previews(&self, layout: &PreviewLayout) -> Vec<NotePreview> {
        self.notes
            .iter()
            .enumerate()
            .map(|(index, note)| NotePreview::new(index, note, layout))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::NamedTempFile;

    fn fields(title: &str) -> NoteFields {
        NoteFields {
            title: title.to_string(),
            text: format!("{title} body"),
            links: String::new(),
            tags: String::new(),
        }
    }

    #[test]
    fn test_create_appends_last() {
        let mut store = NoteStore::new();
        assert!(store.is_empty());

        for (i, title) in ["one", "two", "three"].iter().enumerate() {
            let created = store.create(fields(title)).clone();
            assert_eq!(store.len(), i + 1);
            assert_eq!(store.all().last(), Some(&created));
        }
    }

    #[test]
    fn test_create_at_uses_given_time() {
        let at = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 1, 8, 15, 0)
            .unwrap();
        let mut store = NoteStore::new();
        let note = store.create_at(fields("fixed"), &at);

        assert_eq!(note.created_at(), "2024-03-01 08:15:00.000000+00:00");
        assert_eq!(note.zone(), "UTC+00:00");
    }

    #[test]
    fn test_get() {
        let mut store = NoteStore::new();
        store.create(fields("a"));
        store.create(fields("b"));

        assert_eq!(store.get(1).unwrap().title(), "b");
        assert!(matches!(store.get(2), Err(NotebookError::NoteNotFound(2))));
    }

    #[test]
    fn test_previews_map_back_to_notes() {
        let mut store = NoteStore::new();
        for title in ["a", "b", "c", "d"] {
            store.create(fields(title));
        }

        let previews = store.previews(&PreviewLayout::default());
        assert_eq!(previews.len(), 4);
        for preview in &previews {
            assert_eq!(store.get(preview.index).unwrap().title(), preview.title);
        }
        assert_eq!((previews[3].row, previews[3].column), (1, 0));
    }

    #[test]
    fn test_dump_then_load() {
        let temp = NamedTempFile::new().unwrap();
        let mut store = NoteStore::new();
        store.create(fields("first"));
        store.create(fields("second"));

        assert_eq!(store.dump(temp.path()).unwrap(), 2);

        let mut reloaded = NoteStore::new();
        assert_eq!(reloaded.load(temp.path()).unwrap(), 2);
        assert_eq!(reloaded.all(), store.all());
    }

    #[test]
    fn test_load_missing_file_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = NoteStore::new();
        store.create(fields("kept"));

        let result = store.load(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(NotebookError::Io(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_dump_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::new();
        let result = store.dump(dir.path().join("no-such-dir").join("notes.txt"));
        assert!(matches!(result, Err(NotebookError::Io(_))));
    }
}
