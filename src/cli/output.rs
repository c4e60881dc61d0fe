//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Category, Note, NoteKey, UrlMatch};
use crate::store::NoteRef;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain composite keys, one per line
    Keys,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub category: String,
    pub key: String,
    pub title: String,
    pub date: String,
}

impl NoteListing {
    pub fn new(category: &Category, key: &NoteKey, note: &Note) -> Self {
        Self {
            category: category.to_string(),
            key: key.to_string(),
            title: key.title().to_string(),
            date: note.date().to_string(),
        }
    }
}

impl From<NoteRef<'_>> for NoteListing {
    fn from(r: NoteRef<'_>) -> Self {
        Self::new(r.category, r.key, r.note)
    }
}

/// A note with its full content.
#[derive(Debug, Serialize)]
pub struct NoteDetail {
    pub category: String,
    pub key: String,
    pub title: String,
    pub date: String,
    pub content: String,
    pub urls: Vec<String>,
}

/// A category with optional count.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// URLs found in one note.
#[derive(Debug, Serialize)]
pub struct LinksListing {
    pub key: String,
    pub urls: Vec<UrlMatch>,
}
