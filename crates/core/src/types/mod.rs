//! Shared scalar types for Bookhive.

mod email;
mod id;
mod price;
mod rating;
mod role;
mod status;

pub use email::{Email, EmailError};
pub use id::{BookId, OrderId, PaymentId, ReviewId, UserId, WishlistEntryId};
pub use price::Price;
pub use rating::Rating;
pub use role::{Permission, Role};
pub use status::{PaymentStatus, ShippingStatus, reconcile_order_status};
