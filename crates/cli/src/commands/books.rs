//! Catalog browsing commands.

use std::collections::BTreeSet;

use bookhive_catalog::{CatalogState, SortMode};
use bookhive_client::ApiError;
use bookhive_core::{Book, BookId, Price};

use super::CliError;

/// Filter, sort, and page inputs for the browse view.
#[derive(Debug, Clone, clap::Args)]
pub struct BrowseArgs {
    /// Case-insensitive match against title, author, or category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Restrict to these categories (repeatable)
    #[arg(short, long)]
    pub category: Vec<String>,

    /// Highest acceptable price, e.g. `25` or `$24.99`
    #[arg(long)]
    pub max_price: Option<String>,

    /// Lowest acceptable average rating
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Sort mode: `newest`, `price-low`, `price-high`, `rating`, `title`
    #[arg(long, default_value = "newest")]
    pub sort: SortMode,

    /// 1-based page number
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,
}

/// Fetch the catalog and print one page of the filtered, sorted view.
#[allow(clippy::print_stdout)]
pub async fn browse(args: BrowseArgs) -> Result<(), CliError> {
    let client = super::client()?;
    let books = client.get_books().await?;

    let mut state = CatalogState::new(books);
    if let Some(term) = args.search {
        state.set_search(term);
    }
    if !args.category.is_empty() {
        state.set_categories(args.category.into_iter().collect::<BTreeSet<_>>());
    }
    if let Some(ceiling) = args.max_price.as_deref() {
        state.set_price_ceiling(Some(Price::parse_lenient(ceiling)));
    }
    if let Some(minimum) = args.min_rating {
        state.set_min_rating(minimum);
    }
    state.set_sort(args.sort);
    state.set_page(args.page);

    let view = state.current_page();

    if view.books.is_empty() {
        println!("No books match.");
        return Ok(());
    }

    for book in &view.books {
        println!("{}", format_line(book));
    }
    println!(
        "\npage {}/{} ({} matching)",
        view.number, view.page_count, view.total_matches
    );

    Ok(())
}

/// Print one book's details and its reviews.
#[allow(clippy::print_stdout)]
pub async fn show(id: String) -> Result<(), CliError> {
    let client = super::client()?;
    let book_id = BookId::new(id);

    let book = match client.get_book(&book_id).await {
        Ok(book) => book,
        Err(ApiError::NotFound(_)) => {
            println!("Book {book_id} was not found. Try `bookhive books` to browse the catalog.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{} by {}", book.title, book.author);
    println!("  category: {}", book.category);
    println!("  price:    {}", book.price);
    println!(
        "  rating:   {:.1}{}",
        book.rating.average,
        book.rating
            .count
            .map(|n| format!(" ({n} reviews)"))
            .unwrap_or_default()
    );
    println!(
        "  stock:    {}",
        if book.in_stock() {
            book.stock.to_string()
        } else {
            "out of stock".to_owned()
        }
    );
    if let Some(estimate) = &book.delivery_estimate {
        println!("  delivery: {estimate}");
    }
    if !book.description.is_empty() {
        println!("\n{}", book.description);
    }

    let reviews = client.get_reviews(&book_id).await?;
    if !reviews.is_empty() {
        println!("\nReviews:");
        for review in &reviews {
            println!("  {:.1} - {} ({})", review.score, review.comment, review.email);
        }
    }

    Ok(())
}

fn format_line(book: &Book) -> String {
    format!(
        "{:<10} {:<30} {:<20} {:>8}  {:.1}",
        book.id, book.title, book.author, book.price.to_string(), book.rating.average
    )
}
