//! Admin authorization policy.

use crate::models::User;

/// Decides whether a resolved user may use the admin surface.
pub trait AdminPolicy: Send + Sync {
    /// Whether `user` is an administrator.
    fn is_admin(&self, user: &User) -> bool;

    /// Short policy name for logs.
    fn name(&self) -> &'static str;
}

/// Stub policy: every authenticated user is an administrator.
///
/// Users carry no role field yet, so there is nothing to check against.
/// Replace this before exposing the admin surface publicly.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAuthenticated;

impl AdminPolicy for AllowAuthenticated {
    fn is_admin(&self, _user: &User) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "allow-authenticated"
    }
}
