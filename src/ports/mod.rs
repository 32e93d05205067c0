//! Port traits defining external boundaries.
//!
//! The session only talks to a `BookRepository`; the file-backed repository
//! in turn only touches disk through `FileSystem`. Live implementations
//! live in `src/adapters/`.

pub mod filesystem;
pub mod repository;

pub use filesystem::FileSystem;
pub use repository::BookRepository;
