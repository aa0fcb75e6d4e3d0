//! Integration test harness for SER.
//!
//! Builds the full API router against in-memory collaborators and drives it
//! with `tower::ServiceExt::oneshot`, so no database or listening socket is
//! needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ser-integration-tests
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let app = TestApp::new();
//! let cookie = app.login(KNOWN_USER).await;
//! let resp = app.post("/api/chat/start-session", Some(&cookie), None).await;
//! assert_eq!(resp.status, StatusCode::OK);
//! ```

#![allow(clippy::expect_used, clippy::missing_panics_doc)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session};

use ser_api::config::ApiConfig;
use ser_api::middleware::auth::set_current_user;
use ser_api::middleware::session::SESSION_COOKIE_NAME;
use ser_api::models::session_keys;
use ser_api::routes;
use ser_api::services::{
    AdminPolicy, AllowAuthenticated, MockScenario, StaticUserDirectory, UserDirectory,
};
use ser_api::state::AppState;
use ser_core::UserId;

/// User present in the test directory.
pub const KNOWN_USER: UserId = UserId::new(1);

/// User whose session identity does not resolve.
pub const MISSING_USER: UserId = UserId::new(999);

/// Seed used for the scenario generator so runs are reproducible.
pub const SCENARIO_SEED: u64 = 42;

/// A response with its body decoded.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
    /// Parsed body, or `Value::Null` when the body is not JSON.
    pub json: Value,
}

/// The API router plus the session store backing it.
pub struct TestApp {
    router: Router,
    store: MemoryStore,
}

impl TestApp {
    /// App with the default collaborators and the permissive admin policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(Arc::new(AllowAuthenticated))
    }

    /// App with a custom admin policy.
    #[must_use]
    pub fn with_policy(admin_policy: Arc<dyn AdminPolicy>) -> Self {
        let directory: Arc<dyn UserDirectory> =
            Arc::new(StaticUserDirectory::new().with_user(KNOWN_USER, "noor"));
        let state = AppState::new(
            test_config(),
            directory,
            admin_policy,
            Arc::new(MockScenario::seeded(SCENARIO_SEED)),
        );
        let store = MemoryStore::default();

        Self {
            router: routes::app(state, store.clone()),
            store,
        }
    }

    /// Create a session logged in as `user_id` and return its cookie header.
    pub async fn login(&self, user_id: UserId) -> String {
        let session = Session::new(None, Arc::new(self.store.clone()), None);
        set_current_user(&session, user_id)
            .await
            .expect("set session identity");
        session.save().await.expect("save session");

        let id = session.id().expect("saved session has an id");
        format!("{SESSION_COOKIE_NAME}={id}")
    }

    /// Create a session whose identity is an arbitrary stored value, as an
    /// external login flow might write it.
    pub async fn login_with_identity(&self, identity: Value) -> String {
        let session = Session::new(None, Arc::new(self.store.clone()), None);
        session
            .insert(session_keys::USER_ID, identity)
            .await
            .expect("write session");
        session.save().await.expect("save session");

        let id = session.id().expect("saved session has an id");
        format!("{SESSION_COOKIE_NAME}={id}")
    }

    /// Create an empty session (no identity) and return its cookie header.
    pub async fn anonymous_session(&self) -> String {
        let session = Session::new(None, Arc::new(self.store.clone()), None);
        session
            .insert("visited", true)
            .await
            .expect("write session");
        session.save().await.expect("save session");

        let id = session.id().expect("saved session has an id");
        format!("{SESSION_COOKIE_NAME}={id}")
    }

    /// Send a request with an optional cookie and raw body.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<&str>,
    ) -> TestResponse {
        self.request_with_headers(method, uri, cookie, body, &[]).await
    }

    /// Like [`TestApp::request`], with extra request headers.
    pub async fn request_with_headers(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<&str>,
        extra_headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in extra_headers {
            builder = builder.header(*name, *value);
        }
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_owned())))
            .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            json,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, cookie, None).await
    }

    pub async fn post(&self, uri: &str, cookie: Option<&str>, body: Option<&str>) -> TestResponse {
        self.request(Method::POST, uri, cookie, body).await
    }

    pub async fn put(&self, uri: &str, cookie: Option<&str>, body: Option<&str>) -> TestResponse {
        self.request(Method::PUT, uri, cookie, body).await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration with only the required variable set.
fn test_config() -> ApiConfig {
    ApiConfig::from_source(|key| {
        (key == "SER_DATABASE_URL").then(|| "postgres://localhost/ser_test".to_owned())
    })
    .expect("test configuration is valid")
}
