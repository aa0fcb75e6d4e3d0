//! User lookup by session identity.

use std::collections::HashMap;

use chrono::Utc;
use futures::future::BoxFuture;
use sqlx::PgPool;

use ser_core::UserId;

use crate::db::{RepositoryError, UserRepository};
use crate::models::User;

/// Resolves an identity to a user record.
pub trait UserDirectory: Send + Sync {
    /// Look a user up by ID. `Ok(None)` means the identity is unknown.
    fn find_user(&self, id: UserId) -> BoxFuture<'_, Result<Option<User>, RepositoryError>>;

    /// Check that the backing store is reachable.
    fn ping(&self) -> BoxFuture<'_, Result<(), RepositoryError>>;
}

/// Directory backed by the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserDirectory for PgUserDirectory {
    fn find_user(&self, id: UserId) -> BoxFuture<'_, Result<Option<User>, RepositoryError>> {
        Box::pin(async move { UserRepository::new(&self.pool).get_by_id(id).await })
    }

    fn ping(&self) -> BoxFuture<'_, Result<(), RepositoryError>> {
        Box::pin(async move { UserRepository::new(&self.pool).ping().await })
    }
}

/// Fixed in-memory directory for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct StaticUserDirectory {
    users: HashMap<UserId, User>,
}

impl StaticUserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user with the given ID and username.
    #[must_use]
    pub fn with_user(mut self, id: UserId, username: &str) -> Self {
        self.users.insert(
            id,
            User {
                id,
                username: username.to_owned(),
                display_name: None,
                created_at: Utc::now(),
            },
        );
        self
    }
}

impl UserDirectory for StaticUserDirectory {
    fn find_user(&self, id: UserId) -> BoxFuture<'_, Result<Option<User>, RepositoryError>> {
        let user = self.users.get(&id).cloned();
        Box::pin(async move { Ok(user) })
    }

    fn ping(&self) -> BoxFuture<'_, Result<(), RepositoryError>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_directory_lookup() {
        let directory = StaticUserDirectory::new().with_user(UserId::new(3), "noor");

        let found = directory.find_user(UserId::new(3)).await.unwrap();
        assert_eq!(found.map(|u| u.username), Some("noor".to_owned()));

        assert!(directory.find_user(UserId::new(4)).await.unwrap().is_none());
        assert!(directory.ping().await.is_ok());
    }
}
