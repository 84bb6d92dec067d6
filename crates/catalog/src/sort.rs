//! Catalog ordering: the comparator selector.

use std::cmp::Ordering;

use bookhive_core::Book;

/// Sort modes for the catalog browse view.
///
/// `Newest` preserves the backend's insertion order: the wire format
/// carries no creation timestamp, so there is nothing else to order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Keep the input (insertion) order.
    #[default]
    Newest,
    /// Cheapest first.
    PriceLowToHigh,
    /// Most expensive first.
    PriceHighToLow,
    /// Best rated first. Ties keep input order (stable sort).
    RatingHighToLow,
    /// Title A-Z, case-insensitive.
    TitleAz,
}

impl SortMode {
    /// All modes, in the order a UI would offer them.
    pub const ALL: [Self; 5] = [
        Self::Newest,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::RatingHighToLow,
        Self::TitleAz,
    ];
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Newest => write!(f, "newest"),
            Self::PriceLowToHigh => write!(f, "price-low"),
            Self::PriceHighToLow => write!(f, "price-high"),
            Self::RatingHighToLow => write!(f, "rating"),
            Self::TitleAz => write!(f, "title"),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price-low" => Ok(Self::PriceLowToHigh),
            "price-high" => Ok(Self::PriceHighToLow),
            "rating" => Ok(Self::RatingHighToLow),
            "title" => Ok(Self::TitleAz),
            _ => Err(format!("invalid sort mode: {s}")),
        }
    }
}

/// Sort `books` in place by `mode`.
///
/// Every mode uses a stable sort, so sorting an already-sorted list is a
/// no-op and ties keep their input order.
pub fn sort_books(books: &mut [Book], mode: SortMode) {
    match mode {
        SortMode::Newest => {}
        SortMode::PriceLowToHigh => books.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceHighToLow => books.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::RatingHighToLow => books.sort_by(|a, b| {
            b.rating
                .average
                .partial_cmp(&a.rating.average)
                .unwrap_or(Ordering::Equal)
        }),
        SortMode::TitleAz => {
            books.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
    }
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
            book("b3", "neuromancer", "William Gibson", "Sci-Fi", "$12.50", 4.5),
        ]
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_newest_preserves_input_order() {
        let mut books = catalog();
        sort_books(&mut books, SortMode::Newest);
        assert_eq!(titles(&books), ["Dune", "Emma", "neuromancer"]);
    }

    #[test]
    fn test_price_ascending() {
        let mut books = catalog();
        sort_books(&mut books, SortMode::PriceLowToHigh);
        assert_eq!(titles(&books), ["neuromancer", "Emma", "Dune"]);
    }

    #[test]
    fn test_price_descending() {
        let mut books = catalog();
        sort_books(&mut books, SortMode::PriceHighToLow);
        assert_eq!(titles(&books), ["Dune", "Emma", "neuromancer"]);
    }

    #[test]
    fn test_rating_descending_ties_keep_input_order() {
        let mut books = catalog();
        sort_books(&mut books, SortMode::RatingHighToLow);
        assert_eq!(titles(&books), ["Dune", "neuromancer", "Emma"]);
    }

    #[test]
    fn test_title_case_insensitive() {
        let mut books = catalog();
        sort_books(&mut books, SortMode::TitleAz);
        assert_eq!(titles(&books), ["Dune", "Emma", "neuromancer"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        for mode in SortMode::ALL {
            let mut once = catalog();
            sort_books(&mut once, mode);
            let mut twice = once.clone();
            sort_books(&mut twice, mode);
            assert_eq!(once, twice, "sorting twice by {mode} changed the order");
        }
    }

    #[test]
    fn test_mode_string_roundtrip() {
        for mode in SortMode::ALL {
            assert_eq!(mode.to_string().parse::<SortMode>(), Ok(mode));
        }
        assert!("oldest".parse::<SortMode>().is_err());
    }
}
