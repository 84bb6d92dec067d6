//! Bookhive CLI - Catalog browser and account tools.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! bookhive books --search dune --sort price-low --page 1
//!
//! # Show one book with its reviews
//! bookhive book 64f1c2
//!
//! # Place an order
//! bookhive order place -e reader@example.com -b 64f1c2 -q 2
//!
//! # Role-based dashboard summary
//! bookhive dashboard -e admin@example.com
//! ```
//!
//! # Environment Variables
//!
//! - `BOOKHIVE_API_URL` - Base URL of the backend (required)
//! - `BOOKHIVE_TOKEN` - Bearer token for privileged commands
//! - `BOOKHIVE_SETTINGS_PATH` - Overrides the local settings file location

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use bookhive_client::Theme;
use bookhive_core::{PaymentStatus, ShippingStatus};

mod commands;

use commands::books::BrowseArgs;

#[derive(Parser)]
#[command(name = "bookhive")]
#[command(author, version, about = "Bookhive catalog browser and account tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog with filters, sorting, and paging
    Books(BrowseArgs),
    /// Show one book's details and reviews
    Book {
        /// Book id
        id: String,
    },
    /// Place and inspect orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Manage a wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Show the dashboard summary for an account's role
    Dashboard {
        /// Account email
        #[arg(short, long)]
        email: String,
    },
    /// Show or change the saved theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Manage the remembered login
    Login {
        #[command(subcommand)]
        action: LoginAction,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Place an order
    Place {
        /// Buyer email
        #[arg(short, long)]
        email: String,

        /// Book id
        #[arg(short, long)]
        book: String,

        /// Number of copies
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// List orders; without --email lists everyone's (staff)
    List {
        /// Account email
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Update an order's statuses (librarian/admin)
    Update {
        /// Order id
        id: String,

        /// New payment status (`pending`, `paid`, `refunded`)
        #[arg(long)]
        payment: Option<PaymentStatus>,

        /// New shipping status (`processing`, `shipped`, `delivered`, `cancelled`)
        #[arg(long)]
        shipping: Option<ShippingStatus>,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// List saved books
    List {
        #[arg(short, long)]
        email: String,
    },
    /// Save a book
    Add {
        #[arg(short, long)]
        email: String,

        /// Book id
        #[arg(short, long)]
        book: String,
    },
    /// Remove a saved entry
    Remove {
        #[arg(short, long)]
        email: String,

        /// Wishlist entry id
        id: String,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the saved theme
    Show,
    /// Save a theme (`light` or `dark`)
    Set { theme: Theme },
}

#[derive(Subcommand)]
enum LoginAction {
    /// Save credentials for the login form to prefill
    Remember {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Print the remembered email
    Show,
    /// Drop saved credentials
    Forget,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Books(args) => commands::books::browse(args).await?,
        Commands::Book { id } => commands::books::show(id).await?,
        Commands::Order { action } => match action {
            OrderAction::Place {
                email,
                book,
                quantity,
            } => commands::orders::place(&email, book, quantity).await?,
            OrderAction::List { email } => commands::orders::list(email.as_deref()).await?,
            OrderAction::Update {
                id,
                payment,
                shipping,
            } => commands::orders::update(id, payment, shipping).await?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::List { email } => commands::wishlist::list(&email).await?,
            WishlistAction::Add { email, book } => commands::wishlist::add(&email, book).await?,
            WishlistAction::Remove { email, id } => {
                commands::wishlist::remove(&email, id).await?;
            }
        },
        Commands::Dashboard { email } => commands::dashboard::show(&email).await?,
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::settings::theme_show()?,
            ThemeAction::Set { theme } => commands::settings::theme_set(theme)?,
        },
        Commands::Login { action } => match action {
            LoginAction::Remember { email, password } => {
                commands::settings::login_remember(&email, password)?;
            }
            LoginAction::Show => commands::settings::login_show()?,
            LoginAction::Forget => commands::settings::login_forget()?,
        },
    }
    Ok(())
}
