//! Search command handler.

use anyhow::Result;
use std::path::Path;

use super::{open_store, truncate_str};
use crate::cli::SearchArgs;
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, Output, OutputFormat};

pub fn handle_search(args: &SearchArgs, notes_file: &Path, config: &Config) -> Result<()> {
    let store = open_store(notes_file, config)?;
    let matches = store.store().search(&args.query);

    match args.format {
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No notes match '{}'.", args.query);
                return Ok(());
            }

            for r in &matches {
                println!("[{}] {}", r.category, r.key);
                let preview = r.note.preview();
                if !preview.is_empty() {
                    println!("    {}", truncate_str(preview, 72));
                }
            }

            println!();
            println!("{} match(es)", matches.len());
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = matches.into_iter().map(NoteListing::from).collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
        OutputFormat::Keys => {
            for r in &matches {
                println!("{}", r.key);
            }
        }
    }

    Ok(())
}
