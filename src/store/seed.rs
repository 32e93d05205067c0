//! Built-in catalog used when no backing file exists yet.

use crate::book::Book;

/// The starter catalog.
#[must_use]
pub fn books() -> Vec<Book> {
    vec![
        Book::new(1, "1984", "George Orwell", 1949),
        Book::new(2, "Mumu", "Ivan Turgenev", 1854),
        Book::new(3, "Crime and Punishment", "Fyodor Dostoevsky", 1866),
        Book::new(4, "Fathers and Sons", "Ivan Turgenev", 1862),
        Book::new(5, "The Master and Margarita", "Mikhail Bulgakov", 1967),
        Book::new(6, "Animal Farm", "George Orwell", 1945),
        Book::new(7, "War and Peace", "Leo Tolstoy", 1869),
        Book::new(8, "Dead Souls", "Nikolai Gogol", 1842),
    ]
}
