//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::ports::BookRepository;
use crate::store::{FileRepository, SeedRepository};

/// Top-level CLI parser for `bookstore`.
#[derive(Debug, Parser)]
#[command(name = "bookstore", version, about = "Browse and buy books from a small catalog")]
pub struct Cli {
    /// Catalog file to load and save; `.yaml`/`.yml` selects YAML, anything else JSON.
    #[arg(long, env = "BOOKSTORE_CATALOG", default_value = "books.json")]
    pub catalog: PathBuf,

    /// Start from the built-in catalog and never write to disk.
    #[arg(long)]
    pub no_persist: bool,

    /// Verbosity of the log written to stderr.
    #[arg(long, env = "BOOKSTORE_LOG", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Cli {
    /// Builds the repository selected by the arguments.
    #[must_use]
    pub fn repository(&self) -> Box<dyn BookRepository> {
        if self.no_persist {
            Box::new(SeedRepository)
        } else {
            Box::new(FileRepository::new(Box::new(LiveFileSystem), &self.catalog))
        }
    }
}

/// Log levels accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Adds loads, saves and purchases.
    Info,
    /// Adds rejected input.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    #[must_use]
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
