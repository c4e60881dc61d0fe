//! Remove command handler.

use anyhow::Result;
use std::path::Path;

use super::{open_store_for_write, parse_category, resolve_or_bail};
use crate::cli::RmArgs;
use crate::cli::config::Config;
use crate::session::Session;

pub fn handle_rm(args: &RmArgs, notes_file: &Path, config: &Config) -> Result<()> {
    let store = open_store_for_write(notes_file, config)?;
    let category = parse_category(args.category.as_deref())?;
    let (category, key) = resolve_or_bail(&store, category.as_ref(), &args.note)?;

    let mut session = Session::new(store, category.clone());
    session.open(&category, &key)?;
    session.delete()?;
    println!("Deleted: [{}] {}", category, key);

    Ok(())
}
