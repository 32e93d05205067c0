//! Repository port: where the catalog comes from and goes to.

use crate::book::Book;
use crate::error::Result;

/// Loads the initial catalog and persists it after each mutation.
pub trait BookRepository {
    /// Returns the books to start the session with.
    ///
    /// # Errors
    ///
    /// Returns an error if a backing store exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replaces the persisted catalog with `books`.
    ///
    /// Implementations must not leave a partially written catalog behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot could not be written.
    fn save(&self, books: &[Book]) -> Result<()>;
}
