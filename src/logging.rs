//! Tracing setup for the CLI.
//!
//! Logs go to stderr so that stdout stays usable for `--format json`.
//!
//!   notepad ls             # warnings and errors only
//!   notepad -v ls          # + info (migrations, auto-saves)
//!   notepad -vv ls         # + debug (loads, saves)
//!   RUST_LOG=notepad=trace # overrides -v entirely

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default filter directive.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber.
pub fn init_tracing(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
