//! List command handler.

use anyhow::Result;
use std::path::Path;

use super::{open_store, parse_category, truncate_str};
use crate::cli::ListArgs;
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::Category;
use crate::store::Store;

pub fn handle_list(args: &ListArgs, notes_file: &Path, config: &Config) -> Result<()> {
    let store = open_store(notes_file, config)?;
    let category = parse_category(args.category.as_deref())?;
    let listings = collect_listings(store.store(), category.as_ref(), args)?;

    match args.format {
        OutputFormat::Human => {
            if listings.is_empty() {
                println!("No notes found.");
            } else {
                println!("{:<14}  {:<44}  {:>19}", "Category", "Title", "Date");
                println!(
                    "{:<14}  {:<44}  {:>19}",
                    "--------------",
                    "--------------------------------------------",
                    "-------------------"
                );

                for listing in &listings {
                    println!(
                        "{:<14}  {:<44}  {:>19}",
                        truncate_str(&listing.category, 14),
                        truncate_str(&listing.title, 44),
                        truncate_str(&listing.date, 19)
                    );
                }

                println!();
                println!("{} note(s)", listings.len());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
        OutputFormat::Keys => {
            for listing in &listings {
                println!("{}", listing.key);
            }
        }
    }

    Ok(())
}

/// Collects the notes to list: one category, or all of them category by
/// category, each in the requested order.
pub(crate) fn collect_listings(
    store: &Store,
    category: Option<&Category>,
    args: &ListArgs,
) -> Result<Vec<NoteListing>> {
    let categories: Vec<&Category> = match category {
        Some(c) => vec![c],
        None => store.categories().collect(),
    };

    let mut listings = Vec::new();
    for c in categories {
        for (key, note) in store.sorted(c, args.sort)? {
            listings.push(NoteListing::new(c, key, note));
        }
    }
    Ok(listings)
}
