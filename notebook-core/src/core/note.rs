//! The note record and the values used to build one.

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

/// Layout used for `created_at` when a timestamp is captured.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f%:z";

/// The four user-entered fields of a note, as submitted by the note form.
///
/// Every field is required; an empty string is a valid value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub text: String,
    pub links: String,
    pub tags: String,
}

/// One capture of the local clock, already rendered as the text stored on a note.
///
/// A single `CapturedAt` is taken per submitted note and threaded through to
/// [`Note::new`], so the form and the stored note always agree on the time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedAt {
    pub created_at: String,
    pub zone: String,
}

impl CapturedAt {
    /// Reads the local clock once.
    pub fn now() -> Self {
        let now: DateTime<FixedOffset> = Local::now().into();
        Self::from_datetime(&now)
    }

    /// Renders `at` as `created_at` text plus its `UTC±HH:MM` zone.
    pub fn from_datetime(at: &DateTime<FixedOffset>) -> Self {
        Self {
            created_at: at.format(CREATED_AT_FORMAT).to_string(),
            zone: at.format("UTC%:z").to_string(),
        }
    }
}

/// A single user-authored note. Never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: String,
    text: String,
    links: String,
    tags: String,
    created_at: String,
    zone: String,
}

impl Note {
    /// Builds a fresh note stamped with `captured`.
    pub fn new(fields: NoteFields, captured: CapturedAt) -> Self {
        let NoteFields { title, text, links, tags } = fields;
        Self {
            title,
            text,
            links,
            tags,
            created_at: captured.created_at,
            zone: captured.zone,
        }
    }

    /// Rebuilds a note from persisted text. `created_at` and `zone` are kept
    /// verbatim, whatever they contain.
    pub fn from_record(fields: NoteFields, created_at: String, zone: String) -> Self {
        Self::new(fields, CapturedAt { created_at, zone })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn links(&self) -> &str {
        &self.links
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Attempts to read `created_at` back as a timestamp.
    ///
    /// Returns `None` for text that is not in the captured layout or RFC 3339;
    /// the stored string is never altered.
    pub fn created_at_datetime(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.created_at, "%Y-%m-%d %H:%M:%S%.f%:z")
            .or_else(|_| DateTime::parse_from_rfc3339(&self.created_at))
            .ok()
    }

    /// The six persisted fields, in file order.
    pub(crate) fn record(&self) -> [(&'static str, &str); 6] {
        [
            ("title", self.title.as_str()),
            ("text", self.text.as_str()),
            ("links", self.links.as_str()),
            ("tags", self.tags.as_str()),
            ("created_at", self.created_at.as_str()),
            ("zone", self.zone.as_str()),
        ]
    }
}
