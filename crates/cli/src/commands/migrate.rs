//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! ser-cli migrate
//! ```
//!
//! Applies `crates/api/migrations/` and then creates the session table used by
//! the `PostgreSQL` session store. Both steps are idempotent.

use ser_api::middleware::postgres_store;

use super::{CommandError, connect};

/// Run all migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running schema migrations...");
    sqlx::migrate!("../api/migrations").run(&pool).await?;

    tracing::info!("Creating session table...");
    postgres_store(&pool).migrate().await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
