//! Normalized domain models.
//!
//! These are the shapes the rest of the workspace works with. The client
//! crate owns the wire records that mirror the backend's inconsistencies
//! (number-or-string prices, number-or-object ratings, legacy order status)
//! and converts them into these models exactly once.

mod book;
mod order;
mod payment;
mod review;
mod user;
mod wishlist;

pub use book::Book;
pub use order::Order;
pub use payment::Payment;
pub use review::Review;
pub use user::User;
pub use wishlist::WishlistEntry;
