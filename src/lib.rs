//! Core library entry for the `bookstore` CLI.

pub mod adapters;
pub mod book;
pub mod catalog;
pub mod cli;
pub mod command;
pub mod error;
pub mod ports;
pub mod query;
pub mod render;
pub mod session;
pub mod store;

use std::io;

use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, LogLevel};
use crate::error::Result;
use crate::session::Session;

/// Run an interactive session on stdin/stdout with the parsed arguments.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the terminal streams
/// fail.
pub fn run(cli: &Cli) -> Result<()> {
    init_tracing(cli.log_level);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let session = Session::open(cli.repository(), stdin, stdout)?;
    session.run()?;
    Ok(())
}

/// Sends log output to stderr so it never interleaves with listings.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::new(level.as_directive());
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
