//! Status enums carried on the wire.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a status enum from its wire name fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseStatusError {
    kind: &'static str,
    value: String,
}

impl ParseStatusError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Gender reported for a chat partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    /// Used when the partner was picked directly and no profile is known.
    #[default]
    Unknown,
}

impl Gender {
    /// Genders the random matcher draws from.
    pub const MATCHABLE: [Self; 2] = [Self::Male, Self::Female];

    /// Wire name of the gender.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseStatusError::new("gender", s)),
        }
    }
}

/// Chat session status as reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatStatus {
    /// A partner is attached to the session.
    Connected,
    /// No partner is attached.
    None,
    /// The session was just ended.
    Ended,
}

/// Account status shown in the admin user list.
///
/// Bans are acknowledged but not persisted, so every listed account is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
}

/// Moderation status of a user report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    Resolved,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trips_through_str() {
        for gender in [Gender::Male, Gender::Female, Gender::Unknown] {
            assert_eq!(gender.as_str().parse::<Gender>().unwrap(), gender);
        }
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_matchable_genders_exclude_unknown() {
        assert!(!Gender::MATCHABLE.contains(&Gender::Unknown));
    }

    #[test]
    fn test_chat_status_wire_names() {
        assert_eq!(
            serde_json::to_value(ChatStatus::None).unwrap(),
            serde_json::json!("none")
        );
        assert_eq!(
            serde_json::to_value(ChatStatus::Connected).unwrap(),
            serde_json::json!("connected")
        );
    }

    #[test]
    fn test_parse_error_message() {
        let err = "robot".parse::<Gender>().unwrap_err();
        assert_eq!(err.to_string(), "invalid gender: robot");
    }
}
