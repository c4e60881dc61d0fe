//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::store::SortOrder;
use output::OutputFormat;

/// notepad - categorized notes in a single JSON file
#[derive(Parser, Debug)]
#[command(name = "notepad", version, about, long_about = None)]
pub struct Cli {
    /// Notes file (overrides config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List categories
    Categories(CategoriesArgs),

    /// Add, remove, or rename a category
    Category(CategoryArgs),

    /// Create a new note
    New(NewArgs),

    /// List notes, optionally in one category
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note's contents
    Show(ShowArgs),

    /// Edit a note in your editor (auto-saves while open), or set title/content directly
    Edit(EditArgs),

    /// Delete a note
    Rm(RmArgs),

    /// Search note titles and contents
    Search(SearchArgs),

    /// List the URLs found in a note
    Links(LinksArgs),

    /// Rewrite the notes file in the current format
    Migrate,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `categories` command
#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    /// Show note counts for each category
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `category` command
#[derive(Parser, Debug)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub action: CategoryAction,
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    /// Create an empty category
    Add {
        /// Category name
        name: String,
    },

    /// Delete a category and every note in it
    Rm {
        /// Category name
        name: String,
    },

    /// Rename a category
    Mv {
        /// Current name
        from: String,

        /// New name
        to: String,
    },
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Category (defaults to the configured default category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Note content ("-" reads standard input)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Open in editor after creation
    #[arg(short, long)]
    pub edit: bool,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list notes in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort order
    #[arg(short, long, value_enum, default_value_t = SortOrder::Key)]
    pub sort: SortOrder,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note key or title
    pub note: String,

    /// Category to look in
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note key or title
    pub note: String,

    /// Category to look in
    #[arg(short, long)]
    pub category: Option<String>,

    /// New title (keeps the original timestamp)
    #[arg(long)]
    pub title: Option<String>,

    /// New content ("-" reads standard input)
    #[arg(short, long)]
    pub message: Option<String>,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note key or title
    pub note: String,

    /// Category to look in
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `links` command
#[derive(Parser, Debug)]
pub struct LinksArgs {
    /// Note key or title
    pub note: String,

    /// Category to look in
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
