//! In-memory catalog of books for the running session.
//!
//! Insertion order is the default display order. Identifier uniqueness is
//! established by the store at load time and is not re-checked here.

use crate::book::Book;

/// Ordered, exclusively owned working set of books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates a catalog holding `books` in the given order.
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Appends a book at the end of the display order.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Returns the first book with the given identifier.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Removes and returns the first book with the given identifier.
    pub fn remove(&mut self, id: i64) -> Option<Book> {
        let index = self.position(id)?;
        Some(self.books.remove(index))
    }

    /// Returns a copy of the catalog contents with the first book matching
    /// `id` left out, or `None` when no book matches.
    #[must_use]
    pub fn without(&self, id: i64) -> Option<Vec<Book>> {
        let index = self.position(id)?;
        let mut rest = Vec::with_capacity(self.books.len() - 1);
        rest.extend_from_slice(&self.books[..index]);
        rest.extend_from_slice(&self.books[index + 1..]);
        Some(rest)
    }

    /// Iterates over the books in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Books in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }

    /// Number of books in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` when the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }
}
