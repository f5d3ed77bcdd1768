//! The notebook flat-file format.
//!
//! A notebook file is zero or more six-line records with no header, footer or
//! separator:
//!
//! ```text
//! <title>
//! <text>
//! <links>
//! <tags>
//! <created_at>
//! <zone>
//! ```
//!
//! Records are found purely by counting lines. There is no escaping, so a field
//! holding a line break shifts every record after it when the file is read back.
//! Writers keep that layout for compatibility with existing notebooks and log a
//! warning instead.

use std::io::{BufRead, Write};

use crate::{Note, NoteFields, Result};

/// Number of lines occupied by every note.
pub const RECORD_LINES: usize = 6;

/// Writes `notes` in order, six lines each.
///
/// # Errors
///
/// Returns [`crate::NotebookError::Io`] if the writer fails. Output already
/// written is left as is.
pub fn write_notes<W: Write>(writer: &mut W, notes: &[Note]) -> Result<()> {
    for (index, note) in notes.iter().enumerate() {
        for (field, value) in note.record() {
            if value.contains(['\n', '\r']) {
                log::warn!(
                    "note {} ({:?}): {field} contains a line break; records after it will not load back correctly",
                    index + 1,
                    note.title()
                );
            }
            writeln!(writer, "{value}")?;
        }
    }
    Ok(())
}

/// Reads every complete record from `reader`.
///
/// Each line is trimmed of leading and trailing whitespace. Lines left over
/// after the last complete record are discarded.
///
/// # Errors
///
/// Returns [`crate::NotebookError::Io`] if reading fails or the input is not
/// valid UTF-8; no notes are returned in that case.
pub fn read_notes<R: BufRead>(reader: R) -> Result<Vec<Note>> {
    let lines = reader
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .collect::<std::io::Result<Vec<_>>>()?;

    let mut records = lines.chunks_exact(RECORD_LINES);
    let notes: Vec<Note> = records
        .by_ref()
        .map(|record| {
            let fields = NoteFields {
                title: record[0].clone(),
                text: record[1].clone(),
                links: record[2].clone(),
                tags: record[3].clone(),
            };
            Note::from_record(fields, record[4].clone(), record[5].clone())
        })
        .collect();

    let leftover = records.remainder().len();
    if leftover > 0 {
        log::warn!("discarding {leftover} trailing line(s) that do not form a complete note");
    }

    Ok(notes)
}
