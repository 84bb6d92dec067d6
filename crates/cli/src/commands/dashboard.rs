//! Role-based dashboard command.

use bookhive_client::DashboardShell;
use bookhive_core::{Email, Role};

use super::CliError;

/// Fetch an account and print the dashboard its role lands on.
#[allow(clippy::print_stdout)]
pub async fn show(email: &str) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    let client = super::client()?;

    let user = client.get_user_by_email(&email).await?;
    let capabilities = user
        .role
        .permissions()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!("{} <{}> - {} [{}]", user.name, user.email, user.role, capabilities);

    match DashboardShell::for_role(user.role) {
        DashboardShell::User => {
            let orders = client.get_orders_for(&email).await?;
            let wishlist = client.get_wishlist(&email).await?;
            let payments = client.get_payments(&email).await?;

            let open = orders.iter().filter(|o| !o.is_closed()).count();
            println!("  orders:   {} ({} open)", orders.len(), open);
            println!("  wishlist: {} saved", wishlist.len());
            println!("  payments: {} recorded", payments.len());
        }
        DashboardShell::Librarian => {
            let books = client.get_books().await?;
            let orders = client.get_orders().await?;

            let out_of_stock = books.iter().filter(|b| !b.in_stock()).count();
            let open = orders.iter().filter(|o| !o.is_closed()).count();
            println!("  catalog:  {} books ({} out of stock)", books.len(), out_of_stock);
            println!("  orders:   {} open of {}", open, orders.len());
        }
        DashboardShell::Admin => {
            let books = client.get_books().await?;
            let orders = client.get_orders().await?;
            let users = client.get_users().await?;

            let staff = users
                .iter()
                .filter(|u| matches!(u.role, Role::Librarian | Role::Admin))
                .count();
            println!("  catalog:  {} books", books.len());
            println!("  orders:   {}", orders.len());
            println!("  accounts: {} ({} staff)", users.len(), staff);
        }
    }

    Ok(())
}
