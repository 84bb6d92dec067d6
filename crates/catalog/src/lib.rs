//! Bookhive Catalog - the in-memory browse pipeline.
//!
//! The full book list is fetched once from the backend; every filter, sort,
//! and pagination step re-runs synchronously over that in-memory list on
//! each state change. The pieces compose left to right:
//!
//! ```text
//! books --[FilterConfig]--> filtered --[SortMode]--> ordered --[page]--> view
//! ```
//!
//! [`CatalogState`] owns the list plus the current filter/sort/page inputs
//! and enforces the one stateful rule: any filter or sort change resets the
//! page to 1. The query-string synchronizer mirrors the search term into a
//! navigable URL and back.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod filter;
mod page;
mod query;
mod sort;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use filter::{FilterConfig, filter_books};
pub use page::{PAGE_SIZE, Page, page_count, page_of};
pub use query::{SEARCH_PARAM, term_from_url, write_term_to_url};
pub use sort::{SortMode, sort_books};
pub use state::{CatalogState, PageView};
