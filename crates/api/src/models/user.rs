//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ser_core::UserId;

/// An account the session identity resolves to.
///
/// Only existence is consulted by the request gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Name shown to other users.
    pub display_name: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}
