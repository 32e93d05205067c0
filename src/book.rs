//! Book record type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Identifiers are assigned externally and are expected to be unique within
/// a catalog. PascalCase field names are accepted on load so catalogs written
/// by older tooling can be read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Externally assigned identifier.
    #[serde(alias = "Id")]
    pub id: i64,
    /// Title as printed on the cover.
    #[serde(alias = "Title")]
    pub title: String,
    /// Author name.
    #[serde(alias = "Author")]
    pub author: String,
    /// Year of publication.
    #[serde(alias = "Year")]
    pub year: i32,
}

impl Book {
    /// Builds a book from its parts.
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Year: {}",
            self.id, self.title, self.author, self.year
        )
    }
}
