//! Display ordering for the notes of a category.

use crate::domain::{Note, NoteKey};
use clap::ValueEnum;
use serde::Serialize;
use std::cmp::Ordering;

/// How notes are ordered for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Store order: ascending by composite key
    #[default]
    Key,
    /// By title, descending
    Title,
    /// By date, newest first; unparsable dates last
    Date,
}

/// Orders `(key, note)` pairs for display.
pub fn sort_notes<'a, I>(notes: I, order: SortOrder) -> Vec<(&'a NoteKey, &'a Note)>
where
    I: IntoIterator<Item = (&'a NoteKey, &'a Note)>,
{
    let mut notes: Vec<_> = notes.into_iter().collect();
    match order {
        SortOrder::Key => notes.sort_by(|a, b| a.0.cmp(b.0)),
        SortOrder::Title => notes.sort_by(|a, b| b.0.cmp(a.0)),
        SortOrder::Date => notes.sort_by(|a, b| {
            newest_first(a.1, b.1).then_with(|| a.0.cmp(b.0))
        }),
    }
    notes
}

fn newest_first(a: &Note, b: &Note) -> Ordering {
    match (a.parsed_date(), b.parsed_date()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
