//! Migrate command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store_for_write;
use crate::cli::config::Config;

/// Rewrites the notes file in the current format.
///
/// Older shapes are upgraded when loaded; this writes the upgraded data
/// back even when nothing else is changing.
pub fn handle_migrate(notes_file: &Path, config: &Config) -> Result<()> {
    if !notes_file.exists() {
        println!("No notes file at {}; nothing to migrate.", notes_file.display());
        return Ok(());
    }

    let store = open_store_for_write(notes_file, config)?;
    let report = *store.migration();

    if report.is_empty() {
        println!("Already up to date: {}", notes_file.display());
        return Ok(());
    }

    store
        .save()
        .with_context(|| format!("failed to rewrite {}", notes_file.display()))?;

    println!("Migrated {}", notes_file.display());
    println!("  {} bare note(s) converted", report.bare_notes);
    if report.uncategorized > 0 {
        println!(
            "  {} uncategorized note(s) moved to '{}'",
            report.uncategorized,
            config.category(None)?
        );
    }
    if report.dated > 0 {
        println!("  {} note(s) given a date", report.dated);
    }
    if report.renamed > 0 {
        println!("  {} duplicate note(s) renamed with a '(migrated)' suffix", report.renamed);
    }

    Ok(())
}
