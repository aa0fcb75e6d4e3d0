//! Chat partner description.

use serde::{Deserialize, Serialize};

use super::status::Gender;

/// Ephemeral description of a chat counterpart.
///
/// Synthesized per request and never persisted outside the caller's session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    /// Opaque partner identifier.
    pub id: String,
    /// Name shown in the chat window.
    pub display_name: String,
    /// Avatar image URL. Always `null` for generated partners.
    pub avatar_url: Option<String>,
    /// Partner's gender.
    pub gender: Gender,
}

impl Partner {
    /// Create a partner without an avatar.
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar_url: None,
            gender,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_serializes_null_avatar() {
        let partner = Partner::new("1234", "Sara", Gender::Female);
        let json = serde_json::to_value(&partner).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1234",
                "display_name": "Sara",
                "avatar_url": null,
                "gender": "female"
            })
        );
    }
}
