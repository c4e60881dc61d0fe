//! Builder for test notes with sensible defaults.

#![allow(dead_code)]

use notepad::domain::{Category, Note, NoteKey, Timestamp};

/// Builder for creating test notes with sensible defaults.
///
/// Notes land in `General`, stamped at a fixed time so keys are
/// predictable in assertions.
#[derive(Debug)]
pub struct TestNote {
    category: Category,
    title: String,
    stamp: Timestamp,
    content: String,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            category: Category::new("General").expect("Invalid category"),
            title: title.into(),
            stamp: "2024-01-15 10:30:00".parse().expect("Invalid timestamp"),
            content: String::new(),
        }
    }

    /// Sets the category.
    pub fn category(mut self, category: &str) -> Self {
        self.category = Category::new(category).expect("Invalid category");
        self
    }

    /// Sets the creation stamp, `YYYY-MM-DD HH:MM:SS`.
    pub fn stamp(mut self, stamp: &str) -> Self {
        self.stamp = stamp.parse().expect("Invalid timestamp");
        self
    }

    /// Sets the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Returns the category.
    pub fn get_category(&self) -> &Category {
        &self.category
    }

    /// Returns the composite key the note is stored under.
    pub fn key(&self) -> NoteKey {
        NoteKey::new(self.title.clone(), self.stamp)
    }

    /// Builds the stored note.
    pub fn to_note(&self) -> Note {
        Note::new(self.content.clone(), self.stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("Defaults");
        assert_eq!(note.get_category().as_str(), "General");
        assert_eq!(note.key().to_string(), "Defaults (2024-01-15 10:30:00)");
        assert_eq!(note.to_note().date(), "2024-01-15 10:30:00");
    }

    #[test]
    fn test_note_builder() {
        let note = TestNote::new("Built")
            .category("Work")
            .stamp("2023-12-31 23:59:59")
            .content("body");
        assert_eq!(note.get_category().as_str(), "Work");
        assert_eq!(note.key().to_string(), "Built (2023-12-31 23:59:59)");
        assert_eq!(note.to_note().content(), "body");
    }
}
