//! Read-only queries over a catalog snapshot.
//!
//! Text matches are case-insensitive substring containment; year matches are
//! exact. Results keep catalog order. An empty result is a valid answer, not
//! an error.

use crate::book::Book;
use crate::catalog::Catalog;

/// Books whose author contains `needle`, ignoring case.
#[must_use]
pub fn filter_by_author(catalog: &Catalog, needle: &str) -> Vec<Book> {
    filter_text(catalog, needle, |book| book.author.as_str())
}

/// Books whose title contains `needle`, ignoring case.
#[must_use]
pub fn filter_by_title(catalog: &Catalog, needle: &str) -> Vec<Book> {
    filter_text(catalog, needle, |book| book.title.as_str())
}

/// Books published in exactly `year`.
#[must_use]
pub fn filter_by_year(catalog: &Catalog, year: i32) -> Vec<Book> {
    catalog.iter().filter(|book| book.year == year).cloned().collect()
}

/// All books, ascending by year. Books sharing a year keep catalog order.
#[must_use]
pub fn sorted_by_year(catalog: &Catalog) -> Vec<Book> {
    let mut books = catalog.as_slice().to_vec();
    // `sort_by_key` is stable.
    books.sort_by_key(|book| book.year);
    books
}

fn filter_text<F>(catalog: &Catalog, needle: &str, field: F) -> Vec<Book>
where
    F: Fn(&Book) -> &str,
{
    let needle = needle.to_lowercase();
    catalog
        .iter()
        .filter(|book| field(book).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Book::new(1, "1984", "George Orwell", 1949),
            Book::new(2, "Mumu", "Ivan Turgenev", 1854),
            Book::new(3, "Animal Farm", "George Orwell", 1945),
            Book::new(4, "Fathers and Sons", "Ivan Turgenev", 1862),
            Book::new(5, "Homage to Catalonia", "George Orwell", 1938),
            Book::new(6, "Smoke", "Ivan Turgenev", 1867),
            Book::new(7, "The Farm", "Someone", 1949),
        ])
    }

    fn ids(books: &[Book]) -> Vec<i64> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn title_filter_is_case_insensitive_and_ordered() {
        let catalog = sample();
        assert_eq!(ids(&filter_by_title(&catalog, "FARM")), vec![3, 7]);
        assert_eq!(ids(&filter_by_title(&catalog, "mu")), vec![2]);
    }

    #[test]
    fn title_filter_matches_exact_subsequence() {
        let catalog = sample();
        for needle in ["a", "o", "the", "zzz", "1984"] {
            let expected: Vec<i64> = catalog
                .iter()
                .filter(|b| b.title.to_lowercase().contains(needle))
                .map(|b| b.id)
                .collect();
            assert_eq!(ids(&filter_by_title(&catalog, needle)), expected, "needle {needle:?}");
        }
    }

    #[test]
    fn author_filter_matches_substring() {
        let catalog = sample();
        assert_eq!(ids(&filter_by_author(&catalog, "turg")), vec![2, 4, 6]);
    }

    #[test]
    fn empty_needle_matches_everything() {
        let catalog = sample();
        assert_eq!(filter_by_author(&catalog, "").len(), catalog.len());
    }

    #[test]
    fn no_match_is_empty_not_error() {
        assert!(filter_by_author(&sample(), "Tolstoy").is_empty());
    }

    #[test]
    fn year_filter_is_exact() {
        let catalog = sample();
        assert_eq!(ids(&filter_by_year(&catalog, 1949)), vec![1, 7]);
        assert!(filter_by_year(&catalog, 194).is_empty());
    }

    #[test]
    fn sort_by_year_is_stable() {
        let catalog = sample();
        let sorted = sorted_by_year(&catalog);
        assert_eq!(ids(&sorted), vec![2, 4, 6, 5, 3, 1, 7]);
        assert!(sorted.windows(2).all(|w| w[0].year <= w[1].year));
        // catalog order is untouched
        assert_eq!(catalog.as_slice()[0].id, 1);
    }
}
