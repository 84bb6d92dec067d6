//! Order commands.

use bookhive_client::models::{NewOrder, OrderUpdate};
use bookhive_core::{BookId, Email, Order, OrderId, PaymentStatus, ShippingStatus};

use super::CliError;

/// Place an order for `quantity` copies of a book.
#[allow(clippy::print_stdout)]
pub async fn place(email: &str, book_id: String, quantity: u32) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    let client = super::client()?;

    let book = client.get_book(&BookId::new(book_id)).await?;
    let order = client
        .place_order(&NewOrder::for_book(&book, email, quantity))
        .await?;

    println!(
        "Order {} placed: {} x {} = {}",
        order.id, order.quantity, book.title, order.total
    );
    Ok(())
}

/// List orders, either one account's or (staff) everyone's.
#[allow(clippy::print_stdout)]
pub async fn list(email: Option<&str>) -> Result<(), CliError> {
    let client = super::client()?;

    let orders = match email {
        Some(email) => client.get_orders_for(&Email::parse(email)?).await?,
        None => client.get_orders().await?,
    };

    if orders.is_empty() {
        println!("No orders.");
        return Ok(());
    }

    for order in &orders {
        println!("{}", format_line(order));
    }
    Ok(())
}

/// Update an order's payment or shipping status (librarian/admin).
#[allow(clippy::print_stdout)]
pub async fn update(
    order_id: String,
    payment: Option<PaymentStatus>,
    shipping: Option<ShippingStatus>,
) -> Result<(), CliError> {
    let client = super::client()?;

    let order = client
        .update_order(
            &OrderId::new(order_id),
            &OrderUpdate {
                payment_status: payment,
                shipping_status: shipping,
            },
        )
        .await?;

    println!("{}", format_line(&order));
    Ok(())
}

fn format_line(order: &Order) -> String {
    format!(
        "{:<10} {:<12} x{:<3} {:>10}  {} / {}  {}",
        order.id,
        order.book_id,
        order.quantity,
        order.total.to_string(),
        order.payment_status,
        order.shipping_status,
        order.email,
    )
}
