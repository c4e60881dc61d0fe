//! notepad - categorized notes in a single JSON file

pub mod cli;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod session;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_categories, handle_category, handle_edit, handle_links, handle_list,
        handle_migrate, handle_new, handle_rm, handle_search, handle_show,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    // Only fails when a subscriber is already installed, which then gets the message
    if let Err(err) = logging::init_tracing(cli.verbose) {
        tracing::debug!(error = %err, "keeping the existing tracing subscriber");
    }

    let config = Config::load()?;
    let notes_file = config.notes_file(cli.file.as_ref());
    tracing::debug!(file = %notes_file.display(), "using notes file");

    match &cli.command {
        Command::Categories(args) => handle_categories(args, &notes_file, &config),
        Command::Category(args) => handle_category(args, &notes_file, &config),
        Command::New(args) => handle_new(args, &notes_file, &config),
        Command::List(args) => handle_list(args, &notes_file, &config),
        Command::Show(args) => handle_show(args, &notes_file, &config),
        Command::Edit(args) => handle_edit(args, &notes_file, &config),
        Command::Rm(args) => handle_rm(args, &notes_file, &config),
        Command::Search(args) => handle_search(args, &notes_file, &config),
        Command::Links(args) => handle_links(args, &notes_file, &config),
        Command::Migrate => handle_migrate(&notes_file, &config),
        Command::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "notepad",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
