//! New note command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::editor::{EditorLauncher, SystemEditor, edit_with_autosave};
use super::{open_store_for_write, read_message};
use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::session::Session;

pub fn handle_new(args: &NewArgs, notes_file: &Path, config: &Config) -> Result<()> {
    handle_new_impl(args, notes_file, config, &SystemEditor(config))
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_new_impl<E: EditorLauncher>(
    args: &NewArgs,
    notes_file: &Path,
    config: &Config,
    editor: &E,
) -> Result<()> {
    let category = config.category(args.category.as_deref())?;
    let content = args
        .message
        .as_deref()
        .map(read_message)
        .transpose()?
        .unwrap_or_default();

    let store = open_store_for_write(notes_file, config)?;
    let mut session = Session::new(store, category.clone());
    session.set_title(args.title.as_str());
    session.set_content(content);

    let key = session
        .save()
        .with_context(|| format!("failed to create note in {}", category))?;

    println!("Created: [{}] {}", category, key);

    if args.edit {
        let outcome = edit_with_autosave(&mut session, editor, config.autosave_interval())?;
        if outcome.key != key {
            println!("Renamed: {} -> {}", key, outcome.key);
        }
    }

    Ok(())
}
