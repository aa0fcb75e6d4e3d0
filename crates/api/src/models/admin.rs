//! Shapes returned by the admin surface.

use serde::{Deserialize, Serialize};

use ser_core::{ReportStatus, UserStatus};

/// A user as listed for moderators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedUser {
    pub id: String,
    pub username: String,
    pub display_name: String,
    /// RFC 3339 timestamp of last activity.
    pub last_active: String,
    pub status: UserStatus,
}

/// A report filed by one user against another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub reporter_id: String,
    pub reported_user_id: String,
    pub reason: String,
    pub status: ReportStatus,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Runtime-tunable system settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    /// Maximum chat length, in seconds.
    pub max_chat_duration: u32,
    /// Idle time before a chat is disconnected, in seconds.
    pub auto_disconnect_timeout: u32,
    pub maintenance_mode: bool,
    pub registration_enabled: bool,
    pub guest_access_enabled: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            max_chat_duration: 3600,
            auto_disconnect_timeout: 1800,
            maintenance_mode: false,
            registration_enabled: true,
            guest_access_enabled: true,
        }
    }
}
