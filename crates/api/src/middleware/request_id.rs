//! Request correlation IDs.
//!
//! Every request gets a [`RequestId`]: the upstream `x-request-id` when it is
//! a short printable token, a fresh UUID v4 otherwise. The ID is recorded on
//! the request span and Sentry scope, stored as a request extension for the
//! gate's logs, and echoed on the response.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID accepted as-is.
pub const MAX_REQUEST_ID_LEN: usize = 128;

/// Correlation ID of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Take the upstream ID from `headers`, or mint one if it is missing or
    /// not a printable ASCII token of at most [`MAX_REQUEST_ID_LEN`] bytes.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|id| is_acceptable(id))
            .map_or_else(Self::generate, |id| Self(id.to_owned()))
    }

    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_acceptable(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN && id.bytes().all(|b| b.is_ascii_graphic())
}

/// Middleware that assigns and propagates the [`RequestId`].
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_headers(request.headers());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", request_id.as_str()));

    let header = HeaderValue::from_str(request_id.as_str()).ok();
    request.extensions_mut().insert(request_id);

    let mut response = next.run(request).await;
    if let Some(value) = header {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(id) {
            headers.insert(REQUEST_ID_HEADER, value);
        }
        headers
    }

    fn is_uuid(id: &RequestId) -> bool {
        Uuid::parse_str(id.as_str()).is_ok()
    }

    #[test]
    fn test_upstream_id_is_kept() {
        let id = RequestId::from_headers(&headers_with("edge-7f3a"));
        assert_eq!(id.as_str(), "edge-7f3a");
    }

    #[test]
    fn test_missing_id_is_generated() {
        assert!(is_uuid(&RequestId::from_headers(&HeaderMap::new())));
    }

    #[test]
    fn test_unusable_ids_are_replaced() {
        let too_long = "a".repeat(MAX_REQUEST_ID_LEN + 1);
        for raw in ["", "has space", too_long.as_str()] {
            let id = RequestId::from_headers(&headers_with(raw));
            assert!(is_uuid(&id), "{raw:?} kept as {id:?}");
        }
    }
}
