//! Wishlist commands.

use bookhive_client::models::NewWishlistEntry;
use bookhive_core::{BookId, Email, WishlistEntryId};

use super::CliError;

/// List an account's saved books.
#[allow(clippy::print_stdout)]
pub async fn list(email: &str) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    let client = super::client()?;

    let entries = client.get_wishlist(&email).await?;
    if entries.is_empty() {
        println!("Wishlist is empty.");
        return Ok(());
    }

    for entry in &entries {
        match client.get_book(&entry.book_id).await {
            Ok(book) => println!("{:<10} {} by {}", entry.id, book.title, book.author),
            // the book may have been deleted since it was saved
            Err(_) => println!("{:<10} (book {} unavailable)", entry.id, entry.book_id),
        }
    }
    Ok(())
}

/// Save a book to an account's wishlist.
#[allow(clippy::print_stdout)]
pub async fn add(email: &str, book_id: String) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    let client = super::client()?;

    let entry = client
        .add_to_wishlist(&NewWishlistEntry {
            book_id: BookId::new(book_id),
            email,
        })
        .await?;

    println!("Saved as entry {}.", entry.id);
    Ok(())
}

/// Remove an entry from an account's wishlist.
#[allow(clippy::print_stdout)]
pub async fn remove(email: &str, entry_id: String) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    let client = super::client()?;

    client
        .remove_from_wishlist(&WishlistEntryId::new(entry_id), &email)
        .await?;

    println!("Removed.");
    Ok(())
}
