//! Lenient JSON body extractor.
//!
//! Handlers decide for themselves what a missing body means, so this extractor
//! never rejects. A body counts as absent when it is empty, is not valid JSON,
//! is not a JSON object, or is an empty object.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

use crate::error::AppError;

/// A JSON object body, or nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonPayload(Option<Map<String, Value>>);

impl JsonPayload {
    /// Interpret raw body bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) if !map.is_empty() => Self(Some(map)),
            _ => Self(None),
        }
    }

    /// The object, or `None` if the body was absent.
    #[must_use]
    pub fn into_optional(self) -> Option<Map<String, Value>> {
        self.0
    }

    /// The object, or a 400 with `message` if the body was absent.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest(message)` when there is no body.
    pub fn require(self, message: &str) -> Result<Map<String, Value>, AppError> {
        self.0.ok_or_else(|| AppError::bad_request(message))
    }

    /// The object, or a 400 with `message` if the body was absent or lacks any
    /// of `keys`. A key holding `null` counts as present.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest(message)` when validation fails.
    pub fn require_keys(
        self,
        keys: &[&str],
        message: &str,
    ) -> Result<Map<String, Value>, AppError> {
        let map = self.require(message)?;
        if keys.iter().all(|key| map.contains_key(*key)) {
            Ok(map)
        } else {
            Err(AppError::bad_request(message))
        }
    }
}

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(Self::from_bytes(&bytes)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Unreadable request body treated as absent");
                Ok(Self(None))
            }
        }
    }
}

/// Render a JSON value the way it should appear inside a message.
///
/// Strings are used verbatim; anything else uses its JSON text, so a boolean
/// `response` reads `true` rather than a language-specific spelling.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
