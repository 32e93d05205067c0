//! Binary entrypoint for the `bookstore` CLI.

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    // `.env` may supply BOOKSTORE_CATALOG / BOOKSTORE_LOG; absence is fine.
    dotenvy::dotenv().ok();
    let cli = bookstore::cli::Cli::parse();
    match bookstore::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
