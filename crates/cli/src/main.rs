//! Panther CLI - drives the storefront stores from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! panther products list
//! panther products show panther-core
//!
//! # Manage the cart
//! panther cart add panther-core --quantity 2
//! panther cart show
//!
//! # Session
//! panther login you@example.com secret
//! panther account
//! panther logout
//!
//! # Checkout and shipping
//! panther checkout --order-id order_123
//! panther shipment track PKR123456
//! ```
//!
//! State persists under `PANTHER_DATA_DIR` (default `.panther`), so the
//! cart and session survive between invocations the way a browser profile
//! would.

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary's entire job is talking to the terminal.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

use commands::Session;

#[derive(Parser)]
#[command(name = "panther")]
#[command(author, version, about = "The Panther storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Log in with email and password
    Login { email: String, password: String },
    /// Create an account and log in
    Register {
        email: String,
        password: String,
        /// First name for the new account
        #[arg(long)]
        first_name: Option<String>,
        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// End the current session
    Logout,
    /// Show session status
    Account,
    /// Open a hosted checkout dialog for the current cart
    Checkout {
        /// Order identifier issued by the payment backend
        #[arg(long)]
        order_id: String,
    },
    /// Dark/light theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Shipment tracking
    Shipment {
        #[command(subcommand)]
        action: ShipmentAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List the catalog
    List,
    /// Show one product in detail
    Show { id: String },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show line items and totals
    Show,
    /// Add a product to the cart
    Add {
        id: String,
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove { id: String },
    /// Set the quantity of a line item
    Update { id: String, quantity: u32 },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the current mode and its style variables
    Show,
    /// Flip between dark and light
    Toggle,
}

#[derive(Subcommand)]
enum ShipmentAction {
    /// Forward the current cart as a shipment order
    Create {
        #[command(flatten)]
        address: commands::shipping::AddressArgs,
    },
    /// Fetch the tracking record for a shipment
    Track { id: String },
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; default to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "panther_cli=info,panther_storefront=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> panther_storefront::error::Result<()> {
    let mut session = Session::bootstrap()?;

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List => commands::catalog::list(&session),
            ProductsAction::Show { id } => commands::catalog::show(&session, &id)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&session),
            CartAction::Add { id, quantity } => commands::cart::add(&mut session, &id, quantity)?,
            CartAction::Remove { id } => commands::cart::remove(&mut session, &id)?,
            CartAction::Update { id, quantity } => {
                commands::cart::update(&mut session, &id, quantity)?;
            }
            CartAction::Clear => commands::cart::clear(&mut session)?,
        },
        Commands::Login { email, password } => {
            commands::auth::login(&mut session, &email, &password).await;
        }
        Commands::Register {
            email,
            password,
            first_name,
            phone,
        } => {
            commands::auth::register(&mut session, &email, &password, first_name, phone).await?;
        }
        Commands::Logout => commands::auth::logout(&mut session),
        Commands::Account => commands::auth::account(&session),
        Commands::Checkout { order_id } => {
            commands::checkout::open(&session, &order_id).await?;
        }
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::theme::show(&session),
            ThemeAction::Toggle => commands::theme::toggle(&mut session)?,
        },
        Commands::Shipment { action } => match action {
            ShipmentAction::Create { address } => {
                commands::shipping::create(&session, address).await?;
            }
            ShipmentAction::Track { id } => commands::shipping::track(&session, &id).await?,
        },
    }
    Ok(())
}
