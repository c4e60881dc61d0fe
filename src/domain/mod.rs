//! Core types: Category, NoteKey, Note, Timestamp, URL detection

mod category;
mod links;
mod note;
mod note_key;
mod timestamp;

pub use category::{Category, ParseCategoryError};
pub use links::{UrlMatch, find_urls};
pub use note::Note;
pub use note_key::NoteKey;
pub use timestamp::{ParseTimestampError, TIMESTAMP_FORMAT, Timestamp};
