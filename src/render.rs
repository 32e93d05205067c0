//! Text output for the interactive session.

use std::fmt::Display;
use std::io::{self, Write};

use crate::book::Book;

/// Shown instead of a listing when a query matches nothing.
pub const NO_BOOKS: &str = "No books found.";

const HELP: &[(&str, &str)] = &[
    ("get", "list all books"),
    ("--title=<text>", "find books by title"),
    ("--author=<text>", "find books by author"),
    ("--date=<year>", "find books by year of publication"),
    ("--order-by=date", "list books sorted by year of publication"),
    ("buy --id=<id>", "buy a book by ID"),
    ("help", "show this list of commands"),
];

/// Writes one line per book, or [`NO_BOOKS`] for an empty listing.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "{NO_BOOKS}");
    }
    for book in books {
        writeln!(out, "{book}")?;
    }
    Ok(())
}

/// Writes the list of supported commands and flags.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_help<W: Write>(out: &mut W) -> io::Result<()> {
    let width = HELP.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    writeln!(out, "Commands:")?;
    for (usage, description) in HELP {
        writeln!(out, "  {usage:<width$}  - {description}")?;
    }
    Ok(())
}

/// Writes the greeting shown once at startup.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to the bookstore!")?;
    writeln!(out, "Type 'help' for a list of commands.")
}

/// Writes the input prompt and flushes so it shows before the read blocks.
///
/// # Errors
///
/// Returns an error if writing or flushing fails.
pub fn render_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Writes a single status or error message.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_message<W: Write>(out: &mut W, message: impl Display) -> io::Result<()> {
    writeln!(out, "{message}")
}
