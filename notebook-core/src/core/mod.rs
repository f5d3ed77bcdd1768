//! Internal domain modules for the Notebook core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod error;
pub mod format;
pub mod note;
pub mod preview;
pub mod store;

#[doc(inline)]
pub use error::{NotebookError, Result};
#[doc(inline)]
pub use format::{read_notes, write_notes, RECORD_LINES};
#[doc(inline)]
pub use note::{CapturedAt, Note, NoteFields};
#[doc(inline)]
pub use preview::{excerpt, grid_rows, render_detail, NotePreview, PreviewLayout};
#[doc(inline)]
pub use store::NoteStore;
