//! REST client for the book platform backend.
//!
//! Uses `reqwest` 0.13 for HTTP. Catalog, account, wishlist, review, and
//! payment reads are cached using `moka` (5-minute TTL); every successful
//! mutation invalidates the entries it affected. Orders are never cached
//! because their status changes server-side between reads.

mod cache;

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use moka::future::Cache;
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use bookhive_core::{
    Book, BookId, Email, Order, OrderId, Payment, Review, User, UserId, WishlistEntry,
    WishlistEntryId,
};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{
    BookPatch, BookRecord, NewBook, NewOrder, NewPayment, NewReview, NewUser, NewWishlistEntry,
    OrderRecord, OrderUpdate, PaymentRecord, ReviewRecord, StockUpdate, UserRecord, UserUpdate,
    WishlistRecord,
};

use cache::{CacheKey, CacheValue};

const CACHE_CAPACITY: u64 = 1000;
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Longest slice of a response body worth putting in a log line.
fn truncated(body: &str) -> String {
    body.chars().take(500).collect()
}

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the book platform's REST backend.
///
/// Cheap to clone; all clones share the HTTP pool, the bearer token, and
/// the response cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<SecretString>>,
    cache: Cache<CacheKey, CacheValue>,
}

impl ApiClient {
    /// Create a new backend client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: config.api_url.clone(),
                token: RwLock::new(None),
                cache,
            }),
        }
    }

    /// Attach the identity provider's bearer token to subsequent requests.
    pub fn set_token(&self, token: SecretString) {
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Drop the bearer token; subsequent requests go out unauthenticated.
    pub fn clear_token(&self) {
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Whether a bearer token is currently attached.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.inner
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self
            .inner
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        match token.as_ref() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Map the status line, then hand back the body for parsing.
    async fn read_body(path: &str, response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();

        match status {
            StatusCode::UNAUTHORIZED => return Err(ApiError::Unauthorized),
            StatusCode::FORBIDDEN => return Err(ApiError::Forbidden),
            StatusCode::NOT_FOUND => return Err(ApiError::NotFound(path.to_owned())),
            _ => {}
        }

        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %truncated(&body),
                "backend returned non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: truncated(&body),
            });
        }

        Ok(body)
    }

    fn parse<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                body = %truncated(body),
                "failed to parse backend response"
            );
            ApiError::Parse(e)
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorized(self.inner.http.get(self.url(path)))
            .send()
            .await?;
        let body = Self::read_body(path, response).await?;
        Self::parse(path, &body)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .authorized(self.inner.http.request(method, self.url(path)))
            .json(body)
            .send()
            .await?;
        let body = Self::read_body(path, response).await?;
        Self::parse(path, &body)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorized(self.inner.http.delete(self.url(path)))
            .send()
            .await?;
        Self::read_body(path, response).await.map(|_| ())
    }

    // =========================================================================
    // Book Methods
    // =========================================================================

    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn get_books(&self) -> Result<Vec<Book>, ApiError> {
        if let Some(CacheValue::Books(books)) = self.inner.cache.get(&CacheKey::Books).await {
            debug!("cache hit for catalog");
            return Ok(books);
        }

        let records: Vec<BookRecord> = self.get_json("/books").await?;
        let books: Vec<Book> = records.into_iter().map(Book::from).collect();

        self.inner
            .cache
            .insert(CacheKey::Books, CacheValue::Books(books.clone()))
            .await;

        Ok(books)
    }

    /// Fetch a single book by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    #[instrument(skip(self), fields(book_id = %book_id))]
    pub async fn get_book(&self, book_id: &BookId) -> Result<Book, ApiError> {
        let key = CacheKey::Book(book_id.as_str().to_owned());

        if let Some(CacheValue::Book(book)) = self.inner.cache.get(&key).await {
            debug!("cache hit for book");
            return Ok(*book);
        }

        let record: BookRecord = self.get_json(&format!("/book/{book_id}")).await?;
        let book = Book::from(record);

        self.inner
            .cache
            .insert(key, CacheValue::Book(Box::new(book.clone())))
            .await;

        Ok(book)
    }

    /// Add a book to the catalog (librarian/admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks a valid token.
    #[instrument(skip(self, book), fields(title = %book.title))]
    pub async fn create_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        let record: BookRecord = self.send_json(Method::POST, "/book", book).await?;
        self.inner.cache.invalidate(&CacheKey::Books).await;
        Ok(Book::from(record))
    }

    /// Update book fields (librarian/admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks a valid token.
    #[instrument(skip(self, patch), fields(book_id = %book_id))]
    pub async fn update_book(&self, book_id: &BookId, patch: &BookPatch) -> Result<Book, ApiError> {
        let record: BookRecord = self
            .send_json(Method::PATCH, &format!("/book/{book_id}"), patch)
            .await?;
        self.invalidate_book(book_id).await;
        Ok(Book::from(record))
    }

    /// Remove a book from the catalog (librarian/admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks a valid token.
    #[instrument(skip(self), fields(book_id = %book_id))]
    pub async fn delete_book(&self, book_id: &BookId) -> Result<(), ApiError> {
        self.delete(&format!("/book/{book_id}")).await?;
        self.invalidate_book(book_id).await;
        Ok(())
    }

    /// Set the stock count for a book (librarian/admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks a valid token.
    #[instrument(skip(self), fields(book_id = %book_id, stock))]
    pub async fn update_stock(&self, book_id: &BookId, stock: u32) -> Result<Book, ApiError> {
        let record: BookRecord = self
            .send_json(
                Method::PATCH,
                &format!("/book/stock/{book_id}"),
                &StockUpdate { stock },
            )
            .await?;
        self.invalidate_book(book_id).await;
        Ok(Book::from(record))
    }

    async fn invalidate_book(&self, book_id: &BookId) {
        self.inner.cache.invalidate(&CacheKey::Books).await;
        self.inner
            .cache
            .invalidate(&CacheKey::Book(book_id.as_str().to_owned()))
            .await;
    }

    // =========================================================================
    // Order Methods (not cached - status changes server-side)
    // =========================================================================

    /// Fetch every order (librarian/admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a record is malformed.
    #[instrument(skip(self))]
    pub async fn get_orders(&self) -> Result<Vec<Order>, ApiError> {
        let records: Vec<OrderRecord> = self.get_json("/orders").await?;
        records.into_iter().map(Order::try_from).collect()
    }

    /// Fetch one account's orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a record is malformed.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn get_orders_for(&self, email: &Email) -> Result<Vec<Order>, ApiError> {
        let records: Vec<OrderRecord> =
            self.get_json(&format!("/orders?email={email}")).await?;
        records.into_iter().map(Order::try_from).collect()
    }

    /// Place an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self, order), fields(book_id = %order.book_id))]
    pub async fn place_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        let record: OrderRecord = self.send_json(Method::POST, "/order", order).await?;
        Order::try_from(record)
    }

    /// Update an order's payment or shipping status (librarian/admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks a valid token.
    #[instrument(skip(self, update), fields(order_id = %order_id))]
    pub async fn update_order(
        &self,
        order_id: &OrderId,
        update: &OrderUpdate,
    ) -> Result<Order, ApiError> {
        let record: OrderRecord = self
            .send_json(Method::PATCH, &format!("/order/{order_id}"), update)
            .await?;
        Order::try_from(record)
    }

    // =========================================================================
    // User Methods
    // =========================================================================

    /// Fetch every account (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a record is malformed.
    #[instrument(skip(self))]
    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        if let Some(CacheValue::Users(users)) = self.inner.cache.get(&CacheKey::Users).await {
            debug!("cache hit for users");
            return Ok(users);
        }

        let records: Vec<UserRecord> = self.get_json("/users").await?;
        let users: Vec<User> = records
            .into_iter()
            .map(User::try_from)
            .collect::<Result<_, _>>()?;

        self.inner
            .cache
            .insert(CacheKey::Users, CacheValue::Users(users.clone()))
            .await;

        Ok(users)
    }

    /// Fetch the account behind an email address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown email.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn get_user_by_email(&self, email: &Email) -> Result<User, ApiError> {
        let key = CacheKey::UserByEmail(email.as_str().to_owned());

        if let Some(CacheValue::User(user)) = self.inner.cache.get(&key).await {
            debug!("cache hit for user");
            return Ok(*user);
        }

        let record: UserRecord = self.get_json(&format!("/user/email/{email}")).await?;
        let user = User::try_from(record)?;

        self.inner
            .cache
            .insert(key, CacheValue::User(Box::new(user.clone())))
            .await;

        Ok(user)
    }

    /// Mirror a freshly authenticated account into the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        let record: UserRecord = self.send_json(Method::POST, "/user", user).await?;
        let created = User::try_from(record)?;
        self.invalidate_user(&created.email).await;
        Ok(created)
    }

    /// Update an account by id; role changes are admin-only.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks a valid token.
    #[instrument(skip(self, update), fields(user_id = %user_id))]
    pub async fn update_user(
        &self,
        user_id: &UserId,
        update: &UserUpdate,
    ) -> Result<User, ApiError> {
        let record: UserRecord = self
            .send_json(Method::PATCH, &format!("/user/{user_id}"), update)
            .await?;
        let updated = User::try_from(record)?;
        self.invalidate_user(&updated.email).await;
        Ok(updated)
    }

    /// Update an account by email; role changes are admin-only.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks a valid token.
    #[instrument(skip(self, update), fields(email = %email))]
    pub async fn update_user_by_email(
        &self,
        email: &Email,
        update: &UserUpdate,
    ) -> Result<User, ApiError> {
        let record: UserRecord = self
            .send_json(Method::PATCH, &format!("/user/{email}"), update)
            .await?;
        let updated = User::try_from(record)?;
        self.invalidate_user(email).await;
        self.invalidate_user(&updated.email).await;
        Ok(updated)
    }

    async fn invalidate_user(&self, email: &Email) {
        self.inner.cache.invalidate(&CacheKey::Users).await;
        self.inner
            .cache
            .invalidate(&CacheKey::UserByEmail(email.as_str().to_owned()))
            .await;
    }

    // =========================================================================
    // Wishlist Methods
    // =========================================================================

    /// Fetch one account's wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a record is malformed.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn get_wishlist(&self, email: &Email) -> Result<Vec<WishlistEntry>, ApiError> {
        let key = CacheKey::Wishlist(email.as_str().to_owned());

        if let Some(CacheValue::Wishlist(entries)) = self.inner.cache.get(&key).await {
            debug!("cache hit for wishlist");
            return Ok(entries);
        }

        let records: Vec<WishlistRecord> =
            self.get_json(&format!("/wishlist?email={email}")).await?;
        let entries: Vec<WishlistEntry> = records
            .into_iter()
            .map(WishlistEntry::try_from)
            .collect::<Result<_, _>>()?;

        self.inner
            .cache
            .insert(key, CacheValue::Wishlist(entries.clone()))
            .await;

        Ok(entries)
    }

    /// Save a book to the caller's wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self, entry), fields(book_id = %entry.book_id))]
    pub async fn add_to_wishlist(
        &self,
        entry: &NewWishlistEntry,
    ) -> Result<WishlistEntry, ApiError> {
        let record: WishlistRecord = self.send_json(Method::POST, "/wishlist", entry).await?;
        let created = WishlistEntry::try_from(record)?;
        self.inner
            .cache
            .invalidate(&CacheKey::Wishlist(entry.email.as_str().to_owned()))
            .await;
        Ok(created)
    }

    /// Remove an entry from the given account's wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(entry_id = %entry_id, email = %email))]
    pub async fn remove_from_wishlist(
        &self,
        entry_id: &WishlistEntryId,
        email: &Email,
    ) -> Result<(), ApiError> {
        self.delete(&format!("/wishlist/{entry_id}")).await?;
        self.inner
            .cache
            .invalidate(&CacheKey::Wishlist(email.as_str().to_owned()))
            .await;
        Ok(())
    }

    // =========================================================================
    // Review Methods
    // =========================================================================

    /// Fetch the reviews for a book.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a record is malformed.
    #[instrument(skip(self), fields(book_id = %book_id))]
    pub async fn get_reviews(&self, book_id: &BookId) -> Result<Vec<Review>, ApiError> {
        let key = CacheKey::Reviews(book_id.as_str().to_owned());

        if let Some(CacheValue::Reviews(reviews)) = self.inner.cache.get(&key).await {
            debug!("cache hit for reviews");
            return Ok(reviews);
        }

        let records: Vec<ReviewRecord> = self
            .get_json(&format!("/reviews?bookId={book_id}"))
            .await?;
        let reviews: Vec<Review> = records
            .into_iter()
            .map(Review::try_from)
            .collect::<Result<_, _>>()?;

        self.inner
            .cache
            .insert(key, CacheValue::Reviews(reviews.clone()))
            .await;

        Ok(reviews)
    }

    /// Submit a review.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self, review), fields(book_id = %review.book_id))]
    pub async fn submit_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        let record: ReviewRecord = self.send_json(Method::POST, "/review", review).await?;
        let created = Review::try_from(record)?;
        self.inner
            .cache
            .invalidate(&CacheKey::Reviews(review.book_id.as_str().to_owned()))
            .await;
        Ok(created)
    }

    // =========================================================================
    // Payment Methods
    // =========================================================================

    /// Fetch one account's payment records.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a record is malformed.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn get_payments(&self, email: &Email) -> Result<Vec<Payment>, ApiError> {
        let key = CacheKey::Payments(email.as_str().to_owned());

        if let Some(CacheValue::Payments(payments)) = self.inner.cache.get(&key).await {
            debug!("cache hit for payments");
            return Ok(payments);
        }

        let records: Vec<PaymentRecord> =
            self.get_json(&format!("/payments?email={email}")).await?;
        let payments: Vec<Payment> = records
            .into_iter()
            .map(Payment::try_from)
            .collect::<Result<_, _>>()?;

        self.inner
            .cache
            .insert(key, CacheValue::Payments(payments.clone()))
            .await;

        Ok(payments)
    }

    /// Record a settled payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self, payment), fields(email = %payment.email))]
    pub async fn record_payment(&self, payment: &NewPayment) -> Result<Payment, ApiError> {
        let record: PaymentRecord = self.send_json(Method::POST, "/payment", payment).await?;
        let created = Payment::try_from(record)?;
        self.inner
            .cache
            .invalidate(&CacheKey::Payments(payment.email.as_str().to_owned()))
            .await;
        Ok(created)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ClientConfig::new("http://localhost:4000/api").unwrap())
    }

    #[test]
    fn test_url_joins_base_and_path() {
        assert_eq!(client().url("/books"), "http://localhost:4000/api/books");
    }

    #[test]
    fn test_token_state() {
        let client = client();
        assert!(!client.has_token());

        client.set_token(SecretString::from("tok-123"));
        assert!(client.has_token());

        client.clear_token();
        assert!(!client.has_token());
    }
}
