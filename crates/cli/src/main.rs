//! Raterly CLI - terminal front-end over the client core.
//!
//! # Usage
//!
//! ```bash
//! # Log in (or register) against the backend at RATERLY_API_URL
//! raterly login -e user@example.com -p 'Valid#Pass1'
//! raterly signup -n "Jordan Everyday Shopper" -e jordan@example.com \
//!     -a "14 Market Street" -p 'Valid#Pass1'
//!
//! # Role-dispatched home view
//! raterly home
//!
//! # Browse and rate stores (user role)
//! raterly stores --name books --sort-by rating --order desc
//! raterly rate 42 4
//!
//! # Admin tables
//! raterly users --role owner --sort-by email
//!
//! # Session management
//! raterly passwd --old 'Valid#Pass1' --new 'Other#Pass2'
//! raterly logout
//! ```
//!
//! The binary renders whatever state the `raterly-client` views expose;
//! all session, routing, and fetch logic lives in that crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "raterly")]
#[command(author, version, about = "Raterly client CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new account (logs in on success)
    Signup {
        /// Display name (advertised: 20-60 characters)
        #[arg(short, long)]
        name: String,

        /// Account email
        #[arg(short, long)]
        email: String,

        /// Postal address (advertised: at most 400 characters)
        #[arg(short, long)]
        address: String,

        /// Password (advertised: 8-16 chars, an uppercase and a special
        /// character)
        #[arg(short, long)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Rotate the account password (keeps the current session)
    Passwd {
        /// Current password
        #[arg(long)]
        old: String,

        /// New password
        #[arg(long)]
        new: String,
    },
    /// Show the role-dispatched home view
    Home,
    /// Browse the store list (user role)
    Stores {
        /// Substring filter on the store name
        #[arg(long, default_value = "")]
        name: String,

        /// Substring filter on the address
        #[arg(long, default_value = "")]
        address: String,

        /// Sort column (`name`, `address`, `rating`)
        #[arg(long, default_value = "name")]
        sort_by: String,

        /// Sort direction (`asc`, `desc`)
        #[arg(long, default_value = "asc")]
        order: String,
    },
    /// Submit a rating for a store (user role)
    Rate {
        /// Store ID
        store_id: i64,

        /// Score, 1-5
        score: u8,
    },
    /// Show the admin store table (admin role)
    AdminStores {
        /// Substring filter on the store name
        #[arg(long, default_value = "")]
        name: String,

        /// Substring filter on the contact email
        #[arg(long, default_value = "")]
        email: String,

        /// Substring filter on the address
        #[arg(long, default_value = "")]
        address: String,

        /// Sort column (`name`, `email`, `address`, `rating`)
        #[arg(long, default_value = "name")]
        sort_by: String,

        /// Sort direction (`asc`, `desc`)
        #[arg(long, default_value = "asc")]
        order: String,
    },
    /// Show the admin user table (admin role)
    Users {
        /// Substring filter on the display name
        #[arg(long, default_value = "")]
        name: String,

        /// Substring filter on the email
        #[arg(long, default_value = "")]
        email: String,

        /// Substring filter on the address
        #[arg(long, default_value = "")]
        address: String,

        /// Exact role filter (`admin`, `user`, `owner`)
        #[arg(long)]
        role: Option<String>,

        /// Sort column (`name`, `email`, `address`, `role`)
        #[arg(long, default_value = "name")]
        sort_by: String,

        /// Sort direction (`asc`, `desc`)
        #[arg(long, default_value = "asc")]
        order: String,
    },
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
        Commands::Login { email, password } => {
            commands::auth::login(&email, password).await?;
        }
        Commands::Signup {
            name,
            email,
            address,
            password,
        } => {
            commands::auth::signup(name, email, address, password).await?;
        }
        Commands::Logout => commands::auth::logout()?,
        Commands::Passwd { old, new } => {
            commands::auth::change_password(old, new).await?;
        }
        Commands::Home => commands::home::show().await?,
        Commands::Stores {
            name,
            address,
            sort_by,
            order,
        } => {
            commands::browse::stores(name, address, &sort_by, &order).await?;
        }
        Commands::Rate { store_id, score } => {
            commands::browse::rate(store_id, score).await?;
        }
        Commands::AdminStores {
            name,
            email,
            address,
            sort_by,
            order,
        } => {
            commands::admin::stores(name, email, address, &sort_by, &order).await?;
        }
        Commands::Users {
            name,
            email,
            address,
            role,
            sort_by,
            order,
        } => {
            commands::admin::users(name, email, address, role.as_deref(), &sort_by, &order).await?;
        }
    }
    Ok(())
}
