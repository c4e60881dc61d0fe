//! Show and Edit command handlers.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use super::editor::{EditorLauncher, SystemEditor, edit_with_autosave};
use super::{open_store, open_store_for_write, parse_category, read_message, resolve_or_bail};
use crate::cli::config::Config;
use crate::cli::output::{NoteDetail, Output, OutputFormat};
use crate::cli::{EditArgs, ShowArgs};
use crate::domain::find_urls;
use crate::session::Session;

pub fn handle_show(args: &ShowArgs, notes_file: &Path, config: &Config) -> Result<()> {
    let store = open_store(notes_file, config)?;
    let category = parse_category(args.category.as_deref())?;
    let (category, key) = resolve_or_bail(&store, category.as_ref(), &args.note)?;
    let note = store
        .store()
        .get(&category, &key)
        .with_context(|| format!("note disappeared: '{}'", key))?;

    let urls: Vec<String> = find_urls(note.content()).into_iter().map(|m| m.url).collect();

    match args.format {
        OutputFormat::Human => {
            println!("# {}", key.title());
            println!();
            println!("Category: {}  Date: {}", category, note.date());
            println!("Key: {}", key);
            println!();

            if !note.content().is_empty() {
                println!("{}", note.content());
            }

            if !urls.is_empty() {
                println!();
                println!("Links:");
                for url in &urls {
                    println!("  {}", url);
                }
            }
        }
        OutputFormat::Json => {
            let detail = NoteDetail {
                category: category.to_string(),
                key: key.to_string(),
                title: key.title().to_string(),
                date: note.date().to_string(),
                content: note.content().to_string(),
                urls,
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(detail))?);
        }
        OutputFormat::Keys => println!("{}", key),
    }

    Ok(())
}

pub fn handle_edit(args: &EditArgs, notes_file: &Path, config: &Config) -> Result<()> {
    handle_edit_impl(args, notes_file, config, &SystemEditor(config))
}

/// Internal implementation that accepts a generic editor launcher.
///
/// With `--title` or `--message` the note is updated directly; otherwise
/// it is opened in the editor with auto-save running.
pub(crate) fn handle_edit_impl<E: EditorLauncher>(
    args: &EditArgs,
    notes_file: &Path,
    config: &Config,
    editor: &E,
) -> Result<()> {
    let store = open_store_for_write(notes_file, config)?;
    let category = parse_category(args.category.as_deref())?;
    let (category, key) = resolve_or_bail(&store, category.as_ref(), &args.note)?;

    let mut session = Session::new(store, category.clone());
    session.open(&category, &key)?;

    let saved = if args.title.is_some() || args.message.is_some() {
        if let Some(title) = &args.title {
            session.set_title(title.as_str());
        }
        if let Some(message) = &args.message {
            session.set_content(read_message(message)?);
        }
        session
            .save()
            .with_context(|| format!("failed to save '{}'", key))?
    } else {
        let outcome = edit_with_autosave(&mut session, editor, config.autosave_interval())?;
        debug!(autosaves = outcome.autosaves, "editor closed");
        outcome.key
    };

    if saved == key {
        println!("Saved: [{}] {}", category, saved);
    } else {
        println!("Renamed: [{}] {} -> {}", category, key, saved);
    }

    Ok(())
}
