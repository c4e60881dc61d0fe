//! Note resolution utilities.

use crate::domain::{Category, NoteKey};
use crate::store::Store;

/// Result of resolving a note identifier.
#[derive(Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Exactly one note matched.
    Unique(Category, NoteKey),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<(Category, NoteKey)>),
    /// No notes matched.
    NotFound,
}

/// Prints the candidates of an ambiguous identifier so the user can pick one.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[(Category, NoteKey)]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for (category, key) in notes {
        eprintln!("  [{}] {}", category, key);
    }
    eprintln!();
    eprintln!("Use the full key (title and timestamp) or --category to pick one.");
}

/// Resolves a note identifier to a unique note.
///
/// Resolution order:
/// 1. Full composite key, e.g. `Plan (2024-01-01 09:00:00)`
/// 2. Exact title
///
/// `category` limits the search to one category.
pub fn resolve_note(store: &Store, category: Option<&Category>, identifier: &str) -> ResolveResult {
    let mut found: Vec<_> = store
        .find(category, identifier)
        .into_iter()
        .map(|r| (r.category.clone(), r.key.clone()))
        .collect();

    match found.len() {
        0 => ResolveResult::NotFound,
        1 => {
            let (category, key) = found.remove(0);
            ResolveResult::Unique(category, key)
        }
        _ => ResolveResult::Ambiguous(found),
    }
}
