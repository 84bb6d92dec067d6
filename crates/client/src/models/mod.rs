//! Wire records for the backend API.
//!
//! These mirror the backend's JSON shapes, inconsistencies included: prices
//! arrive as numbers or currency-formatted strings, ratings as bare numbers
//! or `{average, count}` objects, and older orders carry only a legacy
//! `status` string. Each record converts into its normalized
//! `bookhive-core` domain model here, so nothing downstream ever branches
//! on shape.

mod book;
mod order;
mod payment;
mod review;
mod user;
mod wishlist;

pub use book::{BookPatch, BookRecord, NewBook, RawPrice, RawRating, StockUpdate};
pub use order::{NewOrder, OrderRecord, OrderUpdate};
pub use payment::{NewPayment, PaymentRecord};
pub use review::{NewReview, ReviewRecord};
pub use user::{NewUser, UserRecord, UserUpdate};
pub use wishlist::{NewWishlistEntry, WishlistRecord};
