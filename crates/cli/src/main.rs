//! Little Sprout CLI - drive the storefront API from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Log in and persist the session
//! sprout-cli auth login -u alice -p hunter2
//!
//! # Browse the catalog
//! sprout-cli catalog list
//!
//! # Check out product 3
//! sprout-cli orders create -p 3 -c 4242424242424242
//!
//! # Order history
//! sprout-cli orders list
//!
//! # All orders across users (admin accounts only)
//! sprout-cli orders admin
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_API_URL` - Backend base URL (default `http://localhost:8000/api/`)
//! - `SPROUT_SESSION_FILE` - Session state file (default `.sprout-session.json`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sprout-cli")]
#[command(author, version, about = "Little Sprout storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the local session
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Create and inspect orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Log in and persist the session
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new account and persist the session
    Register {
        /// Desired username
        #[arg(short, long)]
        username: String,

        /// Contact email address
        #[arg(short, long)]
        email: String,

        /// Desired password
        #[arg(short, long)]
        password: String,
    },
    /// Show the user the stored token identifies
    Me,
    /// Drop the stored session
    Logout,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all products
    List,
    /// Show a single product
    Show {
        /// Product id
        id: i32,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List your orders
    List,
    /// Show a single order
    Show {
        /// Order id
        id: i32,
    },
    /// Check out a product
    Create {
        /// Product to order
        #[arg(short, long)]
        product: i32,

        /// Card number (sent to the backend as-is)
        #[arg(short, long)]
        card: String,
    },
    /// List all orders across users (admin only)
    Admin,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Login { username, password } => {
                commands::auth::login(&username, &password).await?;
            }
            AuthAction::Register {
                username,
                email,
                password,
            } => {
                commands::auth::register(&username, &email, &password).await?;
            }
            AuthAction::Me => commands::auth::me().await?,
            AuthAction::Logout => commands::auth::logout(),
        },
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list().await?,
            CatalogAction::Show { id } => commands::catalog::show(id).await?,
        },
        Commands::Orders { action } => match action {
            OrderAction::List => commands::orders::list().await?,
            OrderAction::Show { id } => commands::orders::show(id).await?,
            OrderAction::Create { product, card } => {
                commands::orders::create(product, &card).await?;
            }
            OrderAction::Admin => commands::orders::admin().await?,
        },
    }
    Ok(())
}
