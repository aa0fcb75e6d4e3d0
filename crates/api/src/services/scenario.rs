//! Simulated chat and moderation data.
//!
//! No matching engine, message store or moderation backend exists yet. Handlers
//! ask a [`ScenarioGenerator`] for everything they would otherwise fetch, so a
//! real implementation can be dropped in behind the same trait.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use ser_core::{Gender, Partner, ReportStatus, UserStatus};

use crate::models::{ChatStats, ManagedUser, Report, SystemSettings};

/// Display names the random matcher picks from.
pub const PARTNER_NAMES: [&str; 4] = ["سارة", "محمد", "فاطمة", "علي"];

/// Display name given to partners reached through a direct chat.
pub const DIRECT_CHAT_NAME: &str = "مستخدم مباشر";

/// Source of simulated responses.
pub trait ScenarioGenerator: Send + Sync {
    /// Find a random chat partner.
    fn match_partner(&self) -> Partner;

    /// Partner description for a direct chat with `target_user_id`.
    fn direct_partner(&self, target_user_id: String) -> Partner {
        Partner::new(target_user_id, DIRECT_CHAT_NAME, Gender::Unknown)
    }

    /// Identifier for a freshly sent message.
    fn message_id(&self) -> String;

    /// Identifier for a freshly created reconnect request.
    fn reconnect_request_id(&self) -> String;

    /// Statistics for the caller's chat history.
    fn chat_stats(&self) -> ChatStats;

    /// Messages in the caller's current chat.
    fn messages(&self) -> Vec<Value> {
        Vec::new()
    }

    /// Pending reconnect requests addressed to the caller.
    fn reconnect_requests(&self) -> Vec<Value> {
        Vec::new()
    }

    /// Users the caller has chatted with before.
    fn met_users(&self) -> Vec<Value> {
        Vec::new()
    }

    /// Users listed on the admin surface.
    fn managed_users(&self) -> Vec<ManagedUser>;

    /// Reports listed on the admin surface.
    fn reports(&self) -> Vec<Report>;

    /// Current system settings.
    fn system_settings(&self) -> SystemSettings {
        SystemSettings::default()
    }
}

/// Random scenario backed by a `StdRng`.
///
/// Use [`MockScenario::seeded`] for reproducible output.
#[derive(Debug)]
pub struct MockScenario {
    rng: Mutex<StdRng>,
}

impl MockScenario {
    /// Scenario seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Scenario with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    fn four_digit_id(&self) -> String {
        self.with_rng(|rng| rng.random_range(1000..=9999_u32).to_string())
    }
}

impl Default for MockScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioGenerator for MockScenario {
    fn match_partner(&self) -> Partner {
        self.with_rng(|rng| {
            let id = rng.random_range(1000..=9999_u32).to_string();
            let name = PARTNER_NAMES.choose(rng).copied().unwrap_or("سارة");
            let gender = Gender::MATCHABLE
                .choose(rng)
                .copied()
                .unwrap_or(Gender::Female);
            Partner::new(id, name, gender)
        })
    }

    fn message_id(&self) -> String {
        self.four_digit_id()
    }

    fn reconnect_request_id(&self) -> String {
        self.four_digit_id()
    }

    fn chat_stats(&self) -> ChatStats {
        self.with_rng(|rng| ChatStats {
            total_chats: rng.random_range(10..=100),
            total_time: rng.random_range(3600..=36000),
            average_duration: rng.random_range(300..=1800),
        })
    }

    fn managed_users(&self) -> Vec<ManagedUser> {
        vec![
            ManagedUser {
                id: "1".to_owned(),
                username: "user1".to_owned(),
                display_name: "مستخدم واحد".to_owned(),
                last_active: "2024-01-01T10:00:00Z".to_owned(),
                status: UserStatus::Active,
            },
            ManagedUser {
                id: "2".to_owned(),
                username: "user2".to_owned(),
                display_name: "مستخدم اثنان".to_owned(),
                last_active: "2024-01-01T11:00:00Z".to_owned(),
                status: UserStatus::Active,
            },
        ]
    }

    fn reports(&self) -> Vec<Report> {
        vec![
            Report {
                id: "1".to_owned(),
                reporter_id: "user1".to_owned(),
                reported_user_id: "user2".to_owned(),
                reason: "سلوك غير مناسب".to_owned(),
                status: ReportStatus::Pending,
                created_at: "2024-01-01T10:00:00Z".to_owned(),
            },
            Report {
                id: "2".to_owned(),
                reporter_id: "user3".to_owned(),
                reported_user_id: "user4".to_owned(),
                reason: "محتوى غير مناسب".to_owned(),
                status: ReportStatus::Resolved,
                created_at: "2024-01-01T09:00:00Z".to_owned(),
            },
        ]
    }
}
