//! Authentication gate extractors.
//!
//! Every chat and admin handler takes one of these extractors as its first
//! argument, so the gate runs before any body is read:
//!
//! 1. the session must carry a `user_id`, else 401,
//! 2. the `user_id` must name a user the [`UserDirectory`] knows, else 404
//!    (an identity that is not a user id at all is also 404),
//! 3. for [`RequireAdmin`], the [`AdminPolicy`] must admit the user, else 403.
//!
//! [`UserDirectory`]: crate::services::UserDirectory
//! [`AdminPolicy`]: crate::services::AdminPolicy

use axum::{extract::FromRequestParts, http::request::Parts};
use serde_json::Value;
use tower_sessions::Session;

use ser_core::UserId;

use crate::error::{AppError, set_sentry_user};
use crate::middleware::RequestId;
use crate::models::{User, session_keys};
use crate::state::AppState;

/// Message for a session without an identity.
pub const NOT_LOGGED_IN: &str = "User not logged in";

/// Message for an identity that no longer resolves.
pub const USER_NOT_FOUND: &str = "User not found";

/// Message for an authenticated user the admin policy rejects.
pub const ADMIN_REQUIRED: &str = "Admin access required";

/// Per-request context handed to handlers once the gate passes.
///
/// Carries the resolved user and the caller's session handle; chat state is
/// read and written through the session.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub session: Session,
}

/// Extractor that requires an authenticated, existing user.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireUser(ctx): RequireUser) -> impl IntoResponse {
///     format!("Hello, {}!", ctx.user.username)
/// }
/// ```
pub struct RequireUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        authenticate(parts, state).await.map(Self)
    }
}

/// Extractor that requires an authenticated user the admin policy admits.
pub struct RequireAdmin(pub AuthenticatedUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let ctx = authenticate(parts, state).await?;

        let policy = state.admin_policy();
        if !policy.is_admin(&ctx.user) {
            tracing::warn!(
                request_id = ?parts.extensions.get::<RequestId>().map(RequestId::as_str),
                user_id = %ctx.user.id,
                policy = policy.name(),
                "Admin access denied"
            );
            return Err(AppError::Forbidden(ADMIN_REQUIRED.to_owned()));
        }

        Ok(Self(ctx))
    }
}

/// Resolve the session identity to a user.
async fn authenticate(parts: &Parts, state: &AppState) -> Result<AuthenticatedUser, AppError> {
    let request_id = parts.extensions.get::<RequestId>().map(RequestId::as_str);

    // Set by SessionManagerLayer; absent only if the layer is missing.
    let session = parts
        .extensions
        .get::<Session>()
        .cloned()
        .ok_or_else(|| AppError::Unauthorized(NOT_LOGGED_IN.to_owned()))?;

    let raw = session
        .get::<Value>(session_keys::USER_ID)
        .await?
        .filter(|value| !value.is_null())
        .ok_or_else(|| AppError::Unauthorized(NOT_LOGGED_IN.to_owned()))?;

    let Some(user_id) = parse_identity(&raw) else {
        tracing::debug!(?request_id, identity = %raw, "Session identity is not a user id");
        return Err(AppError::IdentityNotFound(USER_NOT_FOUND.to_owned()));
    };

    let user = state
        .directory()
        .find_user(user_id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(?request_id, %user_id, "Session identity does not resolve");
            AppError::IdentityNotFound(USER_NOT_FOUND.to_owned())
        })?;

    set_sentry_user(&user.id);

    Ok(AuthenticatedUser { user, session })
}

/// Interpret a stored identity. Numbers and numeric strings are user ids;
/// anything else cannot name a user.
fn parse_identity(raw: &Value) -> Option<UserId> {
    match raw {
        Value::Number(_) => serde_json::from_value(raw.clone()).ok(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Helper to set the authenticated identity in the session (login).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user_id: UserId,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::USER_ID, user_id).await
}
