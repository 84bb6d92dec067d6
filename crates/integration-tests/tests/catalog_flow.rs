//! End-to-end catalog flow: fetch a messy backend payload, normalize it,
//! and run it through the filter/sort/paginate pipeline.

use serde_json::json;

use bookhive_catalog::{CatalogState, SortMode};
use bookhive_client::{ApiClient, ClientConfig};
use bookhive_core::{Book, Price};
use bookhive_integration_tests::{Route, StubBackend};

fn client_for(stub: &StubBackend) -> ApiClient {
    ApiClient::new(&ClientConfig::new(&stub.base_url).expect("valid stub url"))
}

fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|b| b.title.as_str()).collect()
}

fn catalog_payload() -> serde_json::Value {
    // price and rating arrive in both of the backend's shapes
    json!([
        {
            "_id": "1",
            "title": "Dune",
            "author": "Frank Herbert",
            "category": "Sci-Fi",
            "price": "$20",
            "rating": {"average": 4.5, "count": 12},
            "stock": 3
        },
        {
            "_id": "2",
            "title": "Emma",
            "author": "Jane Austen",
            "category": "Romance",
            "price": 15,
            "rating": 3.9,
            "stock": 5
        }
    ])
}

#[tokio::test]
async fn test_fetch_normalizes_both_wire_shapes() {
    let stub = StubBackend::spawn(vec![Route::json("GET", "/books", &catalog_payload())]);
    let client = client_for(&stub);

    let books = client.get_books().await.expect("fetch catalog");
    assert_eq!(books.len(), 2);

    let dune = &books[0];
    assert_eq!(dune.price, Price::parse_lenient("$20"));
    assert!((dune.rating.average - 4.5).abs() < f64::EPSILON);
    assert_eq!(dune.rating.count, Some(12));

    let emma = &books[1];
    assert_eq!(emma.price, Price::parse_lenient("15"));
    assert_eq!(emma.rating.count, None);
}

#[tokio::test]
async fn test_fetched_catalog_through_browse_pipeline() {
    let stub = StubBackend::spawn(vec![Route::json("GET", "/books", &catalog_payload())]);
    let client = client_for(&stub);

    let books = client.get_books().await.expect("fetch catalog");
    let mut state = CatalogState::new(books);

    state.set_search("dun");
    assert_eq!(titles(&state.visible()), ["Dune"]);

    state.set_search("");
    state.set_sort(SortMode::PriceLowToHigh);
    assert_eq!(titles(&state.visible()), ["Emma", "Dune"]);

    state.set_sort(SortMode::Newest);
    state.set_min_rating(4.0);
    assert_eq!(titles(&state.visible()), ["Dune"]);

    let view = state.current_page();
    assert_eq!(view.number, 1);
    assert_eq!(view.page_count, 1);
    assert_eq!(view.total_matches, 1);
}

#[tokio::test]
async fn test_repeat_catalog_reads_are_served_from_cache() {
    let stub = StubBackend::spawn(vec![Route::json("GET", "/books", &catalog_payload())]);
    let client = client_for(&stub);

    let first = client.get_books().await.expect("first fetch");
    let second = client.get_books().await.expect("second fetch");

    assert_eq!(first, second);
    assert_eq!(stub.hits("GET", "/books"), 1);
}
