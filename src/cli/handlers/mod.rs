//! Command handlers for the CLI.

mod categories;
mod editor;
mod links;
mod list;
mod migrate;
mod new;
mod remove;
mod resolve;
mod search;
mod show_edit;


use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;

use crate::cli::config::Config;
use crate::domain::{Category, NoteKey};
use crate::infra::ensure_parent_dir;
use crate::store::NoteStore;

// Re-export public items
pub use categories::{handle_categories, handle_category};
pub use links::handle_links;
pub use list::handle_list;
pub use migrate::handle_migrate;
pub use new::handle_new;
pub use remove::handle_rm;
pub use resolve::{ResolveResult, resolve_note};
pub use search::handle_search;
pub use show_edit::{handle_edit, handle_show};

// Re-export for tests
#[cfg(test)]
pub(crate) use editor::{EditOutcome, EditorLauncher, RunningEditor, edit_with_autosave};
#[cfg(test)]
pub(crate) use editor::{parse_scratch, render_scratch};

// ===========================================
// Shared Utilities
// ===========================================

/// Loads the notes file for reading.
pub(crate) fn open_store(file: &Path, config: &Config) -> Result<NoteStore> {
    let default_category = config.category(None)?;
    NoteStore::open(file, &default_category).with_context(|| "could not open notes")
}

/// Loads the notes file, making sure its directory exists so it can be written.
pub(crate) fn open_store_for_write(file: &Path, config: &Config) -> Result<NoteStore> {
    ensure_parent_dir(file)
        .with_context(|| format!("failed to create directory for {}", file.display()))?;
    open_store(file, config)
}

/// Parses an optional `--category` argument.
pub(crate) fn parse_category(arg: Option<&str>) -> Result<Option<Category>> {
    arg.map(|name| Category::new(name).with_context(|| format!("invalid category '{}'", name)))
        .transpose()
}

/// Resolves a note identifier or fails with a user-facing error.
pub(crate) fn resolve_or_bail(
    store: &NoteStore,
    category: Option<&Category>,
    identifier: &str,
) -> Result<(Category, NoteKey)> {
    match resolve_note(store.store(), category, identifier) {
        ResolveResult::Unique(category, key) => Ok((category, key)),
        ResolveResult::Ambiguous(notes) => {
            resolve::print_ambiguous_notes(identifier, &notes);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}

/// Returns the text of a `--message` argument, reading stdin for `-`.
pub(crate) fn read_message(message: &str) -> Result<String> {
    if message != "-" {
        return Ok(message.to_string());
    }
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .with_context(|| "failed to read note content from stdin")?;
    Ok(content.trim_end().to_string())
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
