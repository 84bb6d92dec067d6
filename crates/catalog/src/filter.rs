//! Catalog filtering: the predicate chain.
//!
//! A [`FilterConfig`] is a set of independent predicates combined
//! conjunctively. An inactive predicate (empty search term, empty category
//! set, no price ceiling, zero minimum rating) accepts every book, so the
//! default config passes the whole catalog through unchanged.

use std::collections::BTreeSet;

use bookhive_core::{Book, Price};

/// Filter inputs for the catalog browse view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterConfig {
    /// Case-insensitive substring matched against title, author, or
    /// category. Empty means inactive.
    pub search_term: String,
    /// Selected category labels. Empty means inactive.
    pub categories: BTreeSet<String>,
    /// Maximum normalized price, inclusive. `None` means inactive.
    pub price_ceiling: Option<Price>,
    /// Minimum average rating. Zero means inactive.
    pub min_rating: f64,
}

impl FilterConfig {
    /// Whether a single book satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        self.matches_text(book)
            && self.matches_category(book)
            && self.matches_price(book)
            && self.matches_rating(book)
    }

    fn matches_text(&self, book: &Book) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        book.title.to_lowercase().contains(&needle)
            || book.author.to_lowercase().contains(&needle)
            || book.category.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, book: &Book) -> bool {
        self.categories.is_empty() || self.categories.contains(&book.category)
    }

    fn matches_price(&self, book: &Book) -> bool {
        self.price_ceiling
            .is_none_or(|ceiling| book.price <= ceiling)
    }

    fn matches_rating(&self, book: &Book) -> bool {
        self.min_rating <= 0.0 || book.rating.meets(self.min_rating)
    }
}

/// Return the subset of `books` satisfying every active predicate, in the
/// input order.
#[must_use]
pub fn filter_books(books: &[Book], config: &FilterConfig) -> Vec<Book> {
    books
        .iter()
        .filter(|book| config.matches(book))
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::book;

    fn catalog() -> Vec<Book> {
        vec![
            book("b1", "Dune", "Frank Herbert", "Sci-Fi", "$20", 4.5),
            book("b2", "Emma", "Jane Austen", "Romance", "15", 3.9),
            book("b3", "Neuromancer", "William Gibson", "Sci-Fi", "$12.50", 4.2),
        ]
    }

    #[test]
    fn test_default_config_passes_everything() {
        let books = catalog();
        let filtered = filter_books(&books, &FilterConfig::default());
        assert_eq!(filtered, books);
    }

    #[test]
    fn test_text_match_is_case_insensitive_substring() {
        let books = catalog();
        let config = FilterConfig {
            search_term: "dun".to_owned(),
            ..FilterConfig::default()
        };
        let titles: Vec<_> = filter_books(&books, &config)
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, ["Dune"]);
    }

    #[test]
    fn test_text_match_covers_author_and_category() {
        let books = catalog();

        let by_author = FilterConfig {
            search_term: "austen".to_owned(),
            ..FilterConfig::default()
        };
        assert_eq!(filter_books(&books, &by_author).len(), 1);

        let by_category = FilterConfig {
            search_term: "sci".to_owned(),
            ..FilterConfig::default()
        };
        assert_eq!(filter_books(&books, &by_category).len(), 2);
    }

    #[test]
    fn test_category_set_membership() {
        let books = catalog();
        let config = FilterConfig {
            categories: BTreeSet::from(["Romance".to_owned()]),
            ..FilterConfig::default()
        };
        let filtered = filter_books(&books, &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.first().unwrap().title, "Emma");
    }

    #[test]
    fn test_price_ceiling_inclusive() {
        let books = catalog();
        let config = FilterConfig {
            price_ceiling: Some(Price::parse_lenient("15")),
            ..FilterConfig::default()
        };
        let titles: Vec<_> = filter_books(&books, &config)
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, ["Emma", "Neuromancer"]);
    }

    #[test]
    fn test_min_rating() {
        let books = catalog();
        let config = FilterConfig {
            min_rating: 4.0,
            ..FilterConfig::default()
        };
        let titles: Vec<_> = filter_books(&books, &config)
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, ["Dune", "Neuromancer"]);
    }

    #[test]
    fn test_predicates_combine_conjunctively() {
        let books = catalog();
        let config = FilterConfig {
            search_term: "e".to_owned(),
            categories: BTreeSet::from(["Sci-Fi".to_owned()]),
            price_ceiling: Some(Price::parse_lenient("13")),
            min_rating: 4.0,
        };
        let titles: Vec<_> = filter_books(&books, &config)
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, ["Neuromancer"]);
    }

    #[test]
    fn test_every_result_matches_every_active_predicate() {
        let books = catalog();
        let config = FilterConfig {
            search_term: "i".to_owned(),
            min_rating: 4.0,
            ..FilterConfig::default()
        };
        for book in filter_books(&books, &config) {
            assert!(config.matches(&book));
        }
    }
}
