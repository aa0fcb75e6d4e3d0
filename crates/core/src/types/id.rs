//! Account identifier.

use serde::{Deserialize, Serialize};

/// Numeric key of a row in the `users` table.
///
/// Stored in the session after login and serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a decimal id, ignoring surrounding whitespace.
impl std::str::FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(feature = "postgres")]
mod postgres {
    use sqlx::Postgres;
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};

    use super::UserId;

    impl sqlx::Type<Postgres> for UserId {
        fn type_info() -> PgTypeInfo {
            <i32 as sqlx::Type<Postgres>>::type_info()
        }

        fn compatible(ty: &PgTypeInfo) -> bool {
            <i32 as sqlx::Type<Postgres>>::compatible(ty)
        }
    }

    impl<'r> sqlx::Decode<'r, Postgres> for UserId {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            <i32 as sqlx::Decode<Postgres>>::decode(value).map(Self)
        }
    }

    impl sqlx::Encode<'_, Postgres> for UserId {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            <i32 as sqlx::Encode<Postgres>>::encode_by_ref(&self.0, buf)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_serializes_as_bare_number() {
        let id = UserId::new(42);
        assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(42));

        let back: UserId = serde_json::from_value(serde_json::json!(42)).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_user_id_rejects_non_numeric_json() {
        assert!(serde_json::from_value::<UserId>(serde_json::json!("ghost")).is_err());
    }

    #[test]
    fn test_user_id_from_str() {
        assert_eq!(" 7 ".parse::<UserId>().unwrap(), UserId::new(7));
        assert!("abc".parse::<UserId>().is_err());
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::new(1001).to_string(), "1001");
    }
}
