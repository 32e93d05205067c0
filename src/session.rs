//! Interactive command loop.
//!
//! A session owns the catalog and the repository behind it, reads one line
//! at a time and writes every listing, confirmation and error back to the
//! user. No input or data error ends the loop; only end of input or a
//! failing output stream does.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::book::Book;
use crate::catalog::Catalog;
use crate::command::{parse_action, parse_line, parse_option, Action, Directive, Line};
use crate::error::{BookstoreError, Result};
use crate::ports::BookRepository;
use crate::query;
use crate::render;

/// What a successfully handled action or option produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A listing to print, possibly empty.
    Books(Vec<Book>),
    /// The book that was just bought and removed.
    Purchased(Book),
    /// The command reference.
    Help,
}

/// State for one interactive session.
pub struct Session<R: BufRead, W: Write> {
    /// Working set of books.
    catalog: Catalog,
    /// Where the catalog is persisted after each purchase.
    repository: Box<dyn BookRepository>,
    /// Reader for user input.
    reader: R,
    /// Writer for presenting output.
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over an already loaded catalog.
    pub fn new(
        catalog: Catalog,
        repository: Box<dyn BookRepository>,
        reader: R,
        writer: W,
    ) -> Self {
        Self {
            catalog,
            repository,
            reader,
            writer,
        }
    }

    /// Loads the catalog from `repository` and creates a session over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot load the catalog.
    pub fn open(repository: Box<dyn BookRepository>, reader: R, writer: W) -> Result<Self> {
        let catalog = Catalog::new(repository.load()?);
        info!(count = catalog.len(), "session opened");
        Ok(Self::new(catalog, repository, reader, writer))
    }

    /// The catalog as it stands now.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs the prompt loop until the input is exhausted.
    ///
    /// Returns the catalog as it stands when the loop ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if the input stream itself fails or writing
    /// output fails.
    pub fn run(mut self) -> Result<Catalog> {
        render::render_banner(&mut self.writer)?;
        let mut raw = Vec::new();
        loop {
            render::render_prompt(&mut self.writer)?;
            raw.clear();
            if self.reader.read_until(b'\n', &mut raw)? == 0 {
                debug!("end of input");
                break;
            }
            // Invalid UTF-8 is bad input, not a broken stream.
            let line = String::from_utf8_lossy(&raw);
            self.interpret(&line)?;
        }
        self.writer.flush()?;
        Ok(self.catalog)
    }

    /// Handles one line of input and writes whatever it produced.
    ///
    /// Blank lines do nothing. With at least one `--` option the action word
    /// is ignored and every option runs separately, left to right.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing output fails.
    pub fn interpret(&mut self, line: &str) -> Result<()> {
        match parse_line(line) {
            Line::Blank => Ok(()),
            Line::Action(segment) => {
                let result = parse_action(segment).and_then(|action| self.perform(action));
                self.show(result)
            }
            Line::Options(options) => {
                for raw in options {
                    let result = self.apply_option(raw);
                    self.show(result)?;
                }
                Ok(())
            }
        }
    }

    /// Parses and runs a single raw `key=value` option.
    ///
    /// # Errors
    ///
    /// Returns the parse error, or the purchase error for `id`.
    pub fn apply_option(&mut self, raw: &str) -> Result<Outcome> {
        let outcome = match parse_option(raw)? {
            Directive::Author(needle) => {
                Outcome::Books(query::filter_by_author(&self.catalog, &needle))
            }
            Directive::Title(needle) => {
                Outcome::Books(query::filter_by_title(&self.catalog, &needle))
            }
            Directive::Date(year) => Outcome::Books(query::filter_by_year(&self.catalog, year)),
            Directive::OrderByDate => Outcome::Books(query::sorted_by_year(&self.catalog)),
            Directive::Buy(id) => Outcome::Purchased(self.buy(&id)?),
        };
        Ok(outcome)
    }

    /// Buys the first book whose id matches `id_text`.
    ///
    /// The catalog without the book is saved first and the book is removed
    /// from memory only once the save succeeded, so a failed save leaves
    /// both the catalog and the backing store as they were.
    ///
    /// # Errors
    ///
    /// `InvalidIdFormat` if `id_text` is not an integer, `BookNotFound` if no
    /// book carries the id, `PersistenceFailure` if the save failed.
    pub fn buy(&mut self, id_text: &str) -> Result<Book> {
        let id: i64 = id_text.trim().parse().map_err(|_| BookstoreError::InvalidIdFormat)?;
        let remaining = self.catalog.without(id).ok_or(BookstoreError::BookNotFound(id))?;

        if let Err(err) = self.repository.save(&remaining) {
            warn!(id, error = %err, "catalog save failed, purchase rolled back");
            return Err(BookstoreError::PersistenceFailure(err.to_string()));
        }

        let book = self.catalog.remove(id).ok_or(BookstoreError::BookNotFound(id))?;
        info!(id, title = %book.title, "book purchased");
        Ok(book)
    }

    fn perform(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::Help => Ok(Outcome::Help),
            Action::Get => Ok(Outcome::Books(self.catalog.as_slice().to_vec())),
            Action::Buy(id) => Ok(Outcome::Purchased(self.buy(&id)?)),
        }
    }

    fn show(&mut self, result: Result<Outcome>) -> Result<()> {
        match result {
            Ok(Outcome::Books(books)) => render::render_books(&mut self.writer, &books)?,
            Ok(Outcome::Purchased(book)) => render::render_message(
                &mut self.writer,
                format_args!("Book '{}' purchased successfully.", book.title),
            )?,
            Ok(Outcome::Help) => render::render_help(&mut self.writer)?,
            Err(err) => {
                debug!(error = %err, "input rejected");
                render::render_message(&mut self.writer, &err)?;
            }
        }
        Ok(())
    }
}
