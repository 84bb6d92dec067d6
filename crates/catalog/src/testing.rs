//! Shared fixtures for the pipeline tests.

use bookhive_core::{Book, BookId, Price, Rating};

/// Build a book with the fields the pipeline cares about; everything else
/// gets a neutral default.
pub fn book(
    id: &str,
    title: &str,
    author: &str,
    category: &str,
    price: &str,
    rating: f64,
) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_owned(),
        author: author.to_owned(),
        category: category.to_owned(),
        price: Price::parse_lenient(price),
        rating: Rating::from_average(rating),
        stock: 5,
        description: String::new(),
        image_url: None,
        delivery_estimate: None,
    }
}
