//! The note store: categories of notes keyed by composite key, persisted
//! wholesale to a single JSON file.

mod file;
mod format;
mod model;
mod sort;

pub use file::NoteStore;
pub use format::MigrationReport;
pub use model::{NoteRef, Store};
pub use sort::{SortOrder, sort_notes};

use crate::domain::{Category, NoteKey};
use crate::infra::FsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The notes file could not be read or parsed.
    #[error("failed to load notes from {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The notes file could not be written.
    #[error("failed to save notes to {path}")]
    Save {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The notes file parsed as JSON but holds an unusable category name.
    #[error("invalid category name {name:?} in {path}")]
    InvalidCategory { path: PathBuf, name: String },

    #[error("category not found: {0}")]
    CategoryNotFound(Category),

    #[error("category already exists: {0}")]
    CategoryExists(Category),

    #[error("note not found in {category}: '{key}'")]
    NoteNotFound { category: Category, key: NoteKey },

    #[error("a note named '{key}' already exists in {category}")]
    NoteExists { category: Category, key: NoteKey },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
