//! The stored note record.

use crate::domain::Timestamp;
use serde::{Deserialize, Serialize};

/// A note as persisted in the notes file: `{"content": ..., "date": ...}`.
///
/// `date` is kept as the raw string found on disk. Files edited by hand or
/// written by older versions may hold something that is not a timestamp,
/// and such notes must still load; [`Note::parsed_date`] is used wherever
/// the value is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    content: String,
    date: String,
}

impl Note {
    /// Creates a note dated `date`.
    pub fn new(content: impl Into<String>, date: Timestamp) -> Self {
        Self {
            content: content.into(),
            date: date.to_string(),
        }
    }

    /// Creates a note with an arbitrary date string.
    pub fn with_raw_date(content: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            date: date.into(),
        }
    }

    /// Returns the note's text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the date exactly as stored.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the date if it parses as a timestamp.
    pub fn parsed_date(&self) -> Option<Timestamp> {
        self.date.parse().ok()
    }

    /// Replaces the note's text, leaving the date untouched.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Returns the first line of content, for one-line listings.
    pub fn preview(&self) -> &str {
        self.content.lines().next().unwrap_or("").trim()
    }
}
