//! Error type shared by every layer of the bookstore.
//!
//! The `Display` text of each variant is the message shown to the user, so
//! the session can report any failure by simply printing it.

use thiserror::Error;

/// Everything that can go wrong while interpreting a line or touching the
/// backing store.
#[derive(Debug, Error)]
pub enum BookstoreError {
    /// An option segment did not contain exactly one `=`.
    #[error("Malformed flag. Expected --key=value.")]
    MalformedFlag,

    /// The option key is not one of the recognized flags.
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),

    /// The `date` value is not an integer.
    #[error("Invalid year format. Please enter a whole number.")]
    InvalidYearFormat,

    /// The `order-by` value is not `date`.
    #[error("Invalid sort value: {0}. Only 'date' is supported.")]
    InvalidSortValue(String),

    /// The purchase identifier is not an integer.
    #[error("Invalid book ID format.")]
    InvalidIdFormat,

    /// `buy` was given without an identifier.
    #[error("Please specify the ID of the book to buy, e.g. buy --id=1")]
    MissingId,

    /// No book in the catalog carries this identifier.
    #[error("Book with ID {0} not found.")]
    BookNotFound(i64),

    /// The action word is not one of the known commands.
    #[error("Unrecognized command: {0}. Type 'help' for a list of commands.")]
    UnrecognizedCommand(String),

    /// The catalog could not be written after a purchase.
    #[error("Could not save the catalog, purchase cancelled: {0}")]
    PersistenceFailure(String),

    /// Low-level I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BookstoreError>;
