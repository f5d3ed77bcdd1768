//! Core library for Notebook — a small note-taking application.
//!
//! The primary entry point is [`NoteStore`], the ordered in-memory collection of
//! notes for the current session. Notes are persisted with [`NoteStore::dump`]
//! and read back with [`NoteStore::load`] using a fixed six-line flat-file format.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    error::{NotebookError, Result},
    format::{read_notes, write_notes, RECORD_LINES},
    note::{CapturedAt, Note, NoteFields},
    preview::{excerpt, grid_rows, render_detail, NotePreview, PreviewLayout},
    store::NoteStore,
};
