//! Category listing and management handlers.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, open_store_for_write};
use crate::cli::config::Config;
use crate::cli::output::{CategoryListing, Output, OutputFormat};
use crate::cli::{CategoriesArgs, CategoryAction, CategoryArgs};
use crate::domain::Category;

pub fn handle_categories(args: &CategoriesArgs, notes_file: &Path, config: &Config) -> Result<()> {
    let store = open_store(notes_file, config)?;
    let store = store.store();

    let listings: Vec<CategoryListing> = store
        .categories()
        .map(|c| CategoryListing {
            name: c.to_string(),
            count: args
                .counts
                .then(|| store.notes(c).map(|n| n.len()).unwrap_or(0)),
        })
        .collect();

    match args.format {
        OutputFormat::Human => {
            if listings.is_empty() {
                println!("No categories found.");
            }
            for listing in &listings {
                match listing.count {
                    Some(count) => println!("{} ({})", listing.name, count),
                    None => println!("{}", listing.name),
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
        OutputFormat::Keys => {
            for listing in &listings {
                println!("{}", listing.name);
            }
        }
    }

    Ok(())
}

pub fn handle_category(args: &CategoryArgs, notes_file: &Path, config: &Config) -> Result<()> {
    let mut store = open_store_for_write(notes_file, config)?;

    match &args.action {
        CategoryAction::Add { name } => {
            let category = parse(name)?;
            if store.add_category(category.clone())? {
                println!("Created category: {}", category);
            } else {
                println!("Category already exists: {}", category);
            }
        }
        CategoryAction::Rm { name } => {
            let category = parse(name)?;
            let removed = store.remove_category(&category)?;
            println!("Deleted category: {} ({} note(s))", category, removed);
        }
        CategoryAction::Mv { from, to } => {
            let from = parse(from)?;
            let to = parse(to)?;
            store.rename_category(&from, to.clone())?;
            println!("Renamed category '{}' to '{}'", from, to);
        }
    }

    Ok(())
}

fn parse(name: &str) -> Result<Category> {
    Category::new(name).with_context(|| format!("invalid category '{}'", name))
}
