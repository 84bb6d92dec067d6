//! Catalog browse state.
//!
//! Owns the fetched book list plus the current filter, sort, and page
//! inputs, and enforces the page-reset rule: any change to a filter or sort
//! input sends the view back to page 1.

use std::collections::BTreeSet;

use bookhive_core::{Book, Price};
use url::Url;

use crate::filter::{FilterConfig, filter_books};
use crate::page::{PAGE_SIZE, page_of};
use crate::query::{term_from_url, write_term_to_url};
use crate::sort::{SortMode, sort_books};

/// An owned page of results plus the metadata a view needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub books: Vec<Book>,
    pub number: u32,
    pub page_count: u32,
    pub has_prev: bool,
    pub has_next: bool,
    /// Matching books across all pages.
    pub total_matches: usize,
}

/// The catalog browse state machine (such as it is: inputs in, view out).
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    books: Vec<Book>,
    filter: FilterConfig,
    sort: SortMode,
    page: u32,
}

impl CatalogState {
    /// Start browsing a fetched book list, unfiltered, on page 1.
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            filter: FilterConfig::default(),
            sort: SortMode::default(),
            page: 1,
        }
    }

    /// Replace the book list after a refetch. Filters and sort are kept;
    /// the page resets because the page count may have changed.
    pub fn replace_books(&mut self, books: Vec<Book>) {
        self.books = books;
        self.page = 1;
    }

    /// Current filter inputs.
    #[must_use]
    pub const fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    /// Current sort mode.
    #[must_use]
    pub const fn sort(&self) -> SortMode {
        self.sort
    }

    /// Current 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Set the search term. Resets to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        self.page = 1;
    }

    /// Replace the selected category set. Resets to page 1.
    pub fn set_categories(&mut self, categories: BTreeSet<String>) {
        self.filter.categories = categories;
        self.page = 1;
    }

    /// Toggle one category in or out of the selection. Resets to page 1.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.filter.categories.remove(category) {
            self.filter.categories.insert(category.to_owned());
        }
        self.page = 1;
    }

    /// Set or clear the price ceiling. Resets to page 1.
    pub fn set_price_ceiling(&mut self, ceiling: Option<Price>) {
        self.filter.price_ceiling = ceiling;
        self.page = 1;
    }

    /// Set the minimum rating. Resets to page 1.
    pub fn set_min_rating(&mut self, minimum: f64) {
        self.filter.min_rating = minimum;
        self.page = 1;
    }

    /// Change the sort mode. Resets to page 1.
    pub fn set_sort(&mut self, mode: SortMode) {
        self.sort = mode;
        self.page = 1;
    }

    /// Jump to a specific page. Navigation controls are expected to stay
    /// within bounds via [`PageView::has_prev`]/[`PageView::has_next`].
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Advance one page if a next page exists.
    pub fn next_page(&mut self) {
        if self.current_page().has_next {
            self.page += 1;
        }
    }

    /// Go back one page if a previous page exists.
    pub fn prev_page(&mut self) {
        if self.current_page().has_prev {
            self.page -= 1;
        }
    }

    /// Adopt the search term mirrored in `url` (external navigation into
    /// the catalog). Resets to page 1 only when the term actually changes.
    pub fn adopt_url(&mut self, url: &Url) {
        let term = term_from_url(url).unwrap_or_default();
        if term != self.filter.search_term {
            self.set_search(term);
        }
    }

    /// Mirror the current search term into `url`.
    pub fn apply_to_url(&self, url: &mut Url) {
        write_term_to_url(url, &self.filter.search_term);
    }

    /// All books matching the current filter, in the current sort order.
    #[must_use]
    pub fn visible(&self) -> Vec<Book> {
        let mut matched = filter_books(&self.books, &self.filter);
        sort_books(&mut matched, self.sort);
        matched
    }

    /// Run the full pipeline and return the current page.
    #[must_use]
    pub fn current_page(&self) -> PageView {
        let visible = self.visible();
        let page = page_of(&visible, self.page, PAGE_SIZE);
        PageView {
            books: page.items.to_vec(),
            number: page.number,
            page_count: page.page_count,
            has_prev: page.has_prev,
            has_next: page.has_next,
            total_matches: visible.len(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::book;

    fn big_catalog() -> Vec<Book> {
        (0..30)
            .map(|i| {
                book(
                    &format!("b{i}"),
                    &format!("Book {i:02}"),
                    "Author",
                    if i % 2 == 0 { "Sci-Fi" } else { "Romance" },
                    "$10",
                    4.0,
                )
            })
            .collect()
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = CatalogState::new(big_catalog());
        state.set_page(3);
        assert_eq!(state.page(), 3);

        state.set_search("book");
        assert_eq!(state.page(), 1);

        state.set_page(2);
        state.toggle_category("Sci-Fi");
        assert_eq!(state.page(), 1);

        state.set_page(2);
        state.set_price_ceiling(Some(Price::parse_lenient("50")));
        assert_eq!(state.page(), 1);

        state.set_page(2);
        state.set_min_rating(3.0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_sort_change_resets_page() {
        let mut state = CatalogState::new(big_catalog());
        state.set_page(2);
        state.set_sort(SortMode::TitleAz);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_navigation_respects_bounds() {
        // 30 books, 12 per page -> 3 pages
        let mut state = CatalogState::new(big_catalog());

        state.prev_page();
        assert_eq!(state.page(), 1);

        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 3);

        state.next_page();
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_page_view_metadata() {
        let state = CatalogState::new(big_catalog());
        let view = state.current_page();
        assert_eq!(view.page_count, 3);
        assert_eq!(view.total_matches, 30);
        assert_eq!(view.books.len(), 12);
        assert!(view.has_next);
        assert!(!view.has_prev);
    }

    #[test]
    fn test_toggle_category_filters_view() {
        let mut state = CatalogState::new(big_catalog());
        state.toggle_category("Sci-Fi");
        assert_eq!(state.current_page().total_matches, 15);

        // toggling again deselects and reopens the whole catalog
        state.toggle_category("Sci-Fi");
        assert_eq!(state.current_page().total_matches, 30);
    }

    #[test]
    fn test_url_adoption_and_mirroring() {
        let mut state = CatalogState::new(big_catalog());
        let incoming = Url::parse("https://bookhive.example/books?search=book%2007").unwrap();
        state.adopt_url(&incoming);
        assert_eq!(state.filter().search_term, "book 07");
        assert_eq!(state.current_page().total_matches, 1);

        state.set_search("");
        let mut outgoing = Url::parse("https://bookhive.example/books?search=book%2007").unwrap();
        state.apply_to_url(&mut outgoing);
        assert_eq!(outgoing.query(), None);
    }

    #[test]
    fn test_end_to_end_dune_emma_scenario() {
        let books = vec![
            book("1", "Dune", "Frank Herbert", "Sci-Fi", "$20", 4.5),
            book("2", "Emma", "Jane Austen", "Romance", "15", 3.9),
        ];

        let mut state = CatalogState::new(books);

        state.set_search("dun");
        let titles: Vec<_> = state.visible().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, ["Dune"]);

        state.set_search("");
        state.set_sort(SortMode::PriceLowToHigh);
        let titles: Vec<_> = state.visible().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, ["Emma", "Dune"]);

        state.set_sort(SortMode::Newest);
        state.set_min_rating(4.0);
        let titles: Vec<_> = state.visible().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, ["Dune"]);
    }
}
