//! User provisioning commands.
//!
//! The API has no registration surface, so users are created here.

use ser_api::db::{RepositoryError, UserRepository};
use ser_api::models::User;
use ser_core::UserId;

use super::{CommandError, connect};

/// Create a user.
///
/// # Errors
///
/// Returns `CommandError::Invalid` for a blank username, or a repository error
/// if the username is taken.
pub async fn create(username: &str, display_name: Option<&str>) -> Result<UserId, CommandError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(CommandError::Invalid("username must not be empty".to_owned()));
    }

    let pool = connect().await?;
    let user = UserRepository::new(&pool)
        .create(username, display_name)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                CommandError::Invalid(format!("username already exists: {username}"))
            }
            other => other.into(),
        })?;

    tracing::info!(user_id = %user.id, "User created");
    print_user(&user);

    Ok(user.id)
}

/// Show a user by numeric ID, falling back to a username lookup.
///
/// # Errors
///
/// Returns `CommandError::UserNotFound` if nothing matches.
pub async fn show(user: &str) -> Result<(), CommandError> {
    let pool = connect().await?;
    let repo = UserRepository::new(&pool);

    let found = match user.parse::<UserId>() {
        Ok(id) => repo.get_by_id(id).await?,
        Err(_) => repo.get_by_username(user).await?,
    };

    let found = found.ok_or_else(|| CommandError::UserNotFound(user.to_owned()))?;
    print_user(&found);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_user(user: &User) {
    println!("id:           {}", user.id);
    println!("username:     {}", user.username);
    println!(
        "display name: {}",
        user.display_name.as_deref().unwrap_or("-")
    );
    println!("created at:   {}", user.created_at.to_rfc3339());
}
