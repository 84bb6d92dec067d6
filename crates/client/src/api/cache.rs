//! Cache types for backend read responses.

use bookhive_core::{Book, Payment, Review, User, WishlistEntry};

/// Cache key for read endpoints.
///
/// Per-user resources carry the owning email so a mutation can invalidate
/// exactly the entries it affected.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Books,
    Book(String),
    Users,
    UserByEmail(String),
    Wishlist(String),
    Reviews(String),
    Payments(String),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Books(Vec<Book>),
    Book(Box<Book>),
    Users(Vec<User>),
    User(Box<User>),
    Wishlist(Vec<WishlistEntry>),
    Reviews(Vec<Review>),
    Payments(Vec<Payment>),
}
