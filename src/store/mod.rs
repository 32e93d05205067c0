//! Catalog store — persistence layer for the book catalog.
//!
//! Two repositories implement [`BookRepository`]:
//!
//! - [`FileRepository`] reads and writes a single JSON or YAML file through
//!   the `FileSystem` port, falling back to the built-in seed when the file
//!   does not exist yet.
//! - [`SeedRepository`] serves the seed and never writes anything.
//!
//! Saves go to a sibling temp file that is then renamed over the target, so
//! a reader never sees a half-written catalog.

pub mod seed;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::book::Book;
use crate::error::Result;
use crate::ports::{BookRepository, FileSystem};

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON array.
    Json,
    /// YAML sequence.
    Yaml,
}

impl Format {
    /// Picks the format from the file extension; anything but `.yaml` or
    /// `.yml` is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    fn parse(self, contents: &str) -> Result<Vec<Book>> {
        Ok(match self {
            Self::Json => serde_json::from_str(contents)?,
            Self::Yaml => serde_yaml::from_str(contents)?,
        })
    }

    fn render(self, books: &[Book]) -> Result<String> {
        Ok(match self {
            Self::Json => serde_json::to_string_pretty(books)?,
            Self::Yaml => serde_yaml::to_string(books)?,
        })
    }
}

/// File-backed catalog repository.
///
/// All I/O goes through the `FileSystem` port.
pub struct FileRepository {
    fs: Box<dyn FileSystem>,
    path: PathBuf,
    format: Format,
}

impl FileRepository {
    /// Creates a repository for the catalog file at `path`.
    #[must_use]
    pub fn new(fs: Box<dyn FileSystem>, path: &Path) -> Self {
        Self {
            fs,
            path: path.to_path_buf(),
            format: Format::from_path(path),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let name = self.path.file_name().map_or_else(
            || "catalog".to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        self.path.with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4()))
    }

    fn discard(&self, temp: &Path) {
        if !self.fs.exists(temp) {
            return;
        }
        if let Err(err) = self.fs.remove_file(temp) {
            warn!(path = %temp.display(), error = %err, "failed to remove temp file");
        }
    }
}

impl BookRepository for FileRepository {
    fn load(&self) -> Result<Vec<Book>> {
        if !self.fs.exists(&self.path) {
            info!(path = %self.path.display(), "catalog file not found, starting from seed");
            return Ok(seed::books());
        }
        let contents = self.fs.read_to_string(&self.path)?;
        let books = dedupe_ids(self.format.parse(&contents)?);
        info!(path = %self.path.display(), count = books.len(), "catalog loaded");
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> Result<()> {
        let contents = self.format.render(books)?;
        let temp = self.temp_path();
        let written = self
            .fs
            .write(&temp, &contents)
            .and_then(|()| self.fs.rename(&temp, &self.path));
        if let Err(err) = written {
            self.discard(&temp);
            return Err(err.into());
        }
        debug!(path = %self.path.display(), count = books.len(), "catalog saved");
        Ok(())
    }
}

/// Serves the built-in seed and discards saves.
#[derive(Debug, Default)]
pub struct SeedRepository;

impl BookRepository for SeedRepository {
    fn load(&self) -> Result<Vec<Book>> {
        Ok(seed::books())
    }

    fn save(&self, books: &[Book]) -> Result<()> {
        debug!(count = books.len(), "persistence disabled, catalog not saved");
        Ok(())
    }
}

/// Drops every book whose id was already seen; the first occurrence wins.
#[must_use]
pub fn dedupe_ids(books: Vec<Book>) -> Vec<Book> {
    let mut seen = HashSet::with_capacity(books.len());
    books
        .into_iter()
        .filter(|book| {
            let fresh = seen.insert(book.id);
            if !fresh {
                warn!(id = book.id, title = %book.title, "duplicate book id dropped");
            }
            fresh
        })
        .collect()
}
