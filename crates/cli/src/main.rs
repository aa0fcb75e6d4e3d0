//! SER CLI - Database migrations and user provisioning.
//!
//! # Usage
//!
//! ```bash
//! # Create the users and session tables
//! ser-cli migrate
//!
//! # Create a user the API can log in as
//! ser-cli user create -u noor -d "Noor"
//!
//! # Look a user up by ID or username
//! ser-cli user show 42
//! ser-cli user show noor
//! ```
//!
//! All commands read `SER_DATABASE_URL` (or `DATABASE_URL`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ser-cli")]
#[command(author, version, about = "SER CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Unique username
        #[arg(short, long)]
        username: String,

        /// Optional display name
        #[arg(short, long)]
        display_name: Option<String>,
    },
    /// Show a user by numeric ID or username
    Show {
        /// User ID or username
        user: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::User { action } => match action {
            UserAction::Create {
                username,
                display_name,
            } => {
                commands::user::create(&username, display_name.as_deref()).await?;
            }
            UserAction::Show { user } => commands::user::show(&user).await?,
        },
    }
    Ok(())
}
