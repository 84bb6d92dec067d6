//! Mutation-driven cache invalidation.

use secrecy::SecretString;
use serde_json::json;

use bookhive_client::models::NewWishlistEntry;
use bookhive_client::{ApiClient, ClientConfig};
use bookhive_core::{BookId, Email};
use bookhive_integration_tests::{Route, StubBackend};

fn client_for(stub: &StubBackend) -> ApiClient {
    ApiClient::new(&ClientConfig::new(&stub.base_url).expect("valid stub url"))
}

#[tokio::test]
async fn test_stock_update_invalidates_catalog_cache() {
    let book = json!({
        "_id": "b1",
        "title": "Dune",
        "author": "Frank Herbert",
        "category": "Sci-Fi",
        "price": "$20",
        "rating": 4.5,
        "stock": 3
    });
    let stub = StubBackend::spawn(vec![
        Route::json("GET", "/books", &json!([book.clone()])),
        Route::json("PATCH", "/book/stock/b1", &book),
    ]);
    let client = client_for(&stub);
    client.set_token(SecretString::from("tok-123"));

    client.get_books().await.expect("first fetch");
    client.get_books().await.expect("cached fetch");
    assert_eq!(stub.hits("GET", "/books"), 1);

    client
        .update_stock(&BookId::new("b1"), 7)
        .await
        .expect("update stock");

    client.get_books().await.expect("refetch after mutation");
    assert_eq!(stub.hits("GET", "/books"), 2);
}

#[tokio::test]
async fn test_wishlist_cache_is_per_account() {
    let entry = json!({
        "_id": "w1",
        "book_id": "b1",
        "email": "a@example.com"
    });
    let stub = StubBackend::spawn(vec![
        Route::json("GET", "/wishlist?email=a@example.com", &json!([entry.clone()])),
        Route::json("GET", "/wishlist?email=b@example.com", &json!([])),
        Route::json("POST", "/wishlist", &entry),
    ]);
    let client = client_for(&stub);

    let alice = Email::parse("a@example.com").expect("valid email");
    let bob = Email::parse("b@example.com").expect("valid email");

    client.get_wishlist(&alice).await.expect("alice fetch");
    client.get_wishlist(&alice).await.expect("alice cached");
    client.get_wishlist(&bob).await.expect("bob fetch");
    assert_eq!(stub.hits("GET", "/wishlist?email=a@example.com"), 1);
    assert_eq!(stub.hits("GET", "/wishlist?email=b@example.com"), 1);

    client
        .add_to_wishlist(&NewWishlistEntry {
            book_id: BookId::new("b1"),
            email: alice.clone(),
        })
        .await
        .expect("save entry");

    // the mutation only touched alice's list
    client.get_wishlist(&alice).await.expect("alice refetch");
    client.get_wishlist(&bob).await.expect("bob still cached");
    assert_eq!(stub.hits("GET", "/wishlist?email=a@example.com"), 2);
    assert_eq!(stub.hits("GET", "/wishlist?email=b@example.com"), 1);
}
