//! Links command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, parse_category, resolve_or_bail};
use crate::cli::LinksArgs;
use crate::cli::config::Config;
use crate::cli::output::{LinksListing, Output, OutputFormat};
use crate::domain::find_urls;

pub fn handle_links(args: &LinksArgs, notes_file: &Path, config: &Config) -> Result<()> {
    let store = open_store(notes_file, config)?;
    let category = parse_category(args.category.as_deref())?;
    let (category, key) = resolve_or_bail(&store, category.as_ref(), &args.note)?;
    let note = store
        .store()
        .get(&category, &key)
        .with_context(|| format!("note disappeared: '{}'", key))?;

    let urls = find_urls(note.content());

    match args.format {
        OutputFormat::Human => {
            if urls.is_empty() {
                println!("No links in '{}'.", key);
            }
            for m in &urls {
                println!("{}", m.url);
            }
        }
        OutputFormat::Json => {
            let listing = LinksListing {
                key: key.to_string(),
                urls,
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
        }
        OutputFormat::Keys => {
            for m in &urls {
                println!("{}", m.url);
            }
        }
    }

    Ok(())
}
