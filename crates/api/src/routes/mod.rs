//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                              - Liveness check
//! GET  /health/ready                        - Readiness check (user directory)
//!
//! # Chat (requires a logged-in user)
//! POST /api/chat/start-session              - Match a partner
//! POST /api/chat/end-session                - Detach the partner
//! GET  /api/chat/session-status             - Current partner, if any
//! POST /api/chat/report                     - Report the partner
//! POST /api/chat/send-message               - Send a message
//! GET  /api/chat/get-messages               - Messages in the chat
//! POST /api/chat/request-reconnect          - Ask to chat again
//! POST /api/chat/respond-reconnect          - Answer a reconnect request
//! GET  /api/chat/get-reconnect-requests     - Pending reconnect requests
//! GET  /api/chat/met-users                  - Previous partners
//! POST /api/chat/start-direct-chat          - Chat with a specific user
//! POST /api/chat/report-problem             - Report a service problem
//! POST /api/chat/contact-us                 - Contact the operators
//! GET  /api/chat/stats                      - Chat statistics
//!
//! # Admin (requires a user the admin policy admits)
//! GET  /api/admin/users                     - User listing
//! POST /api/admin/users/{user_id}/ban       - Ban a user
//! POST /api/admin/users/{user_id}/unban     - Lift a ban
//! GET  /api/admin/reports                   - Report listing
//! POST /api/admin/reports/{report_id}/review - Review a report
//! GET  /api/admin/system-settings           - Read settings
//! PUT  /api/admin/system-settings           - Update settings
//! ```

pub mod admin;
pub mod chat;
pub mod health;

use axum::{
    Router,
    extract::Request,
    middleware,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tower_sessions::SessionStore;

use crate::error::panic_response;
use crate::middleware::{create_session_layer, request_id_middleware};
use crate::state::AppState;

/// Create the chat routes router.
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/start-session", post(chat::start_session))
        .route("/end-session", post(chat::end_session))
        .route("/session-status", get(chat::session_status))
        .route("/report", post(chat::report))
        .route("/send-message", post(chat::send_message))
        .route("/get-messages", get(chat::get_messages))
        .route("/request-reconnect", post(chat::request_reconnect))
        .route("/respond-reconnect", post(chat::respond_reconnect))
        .route("/get-reconnect-requests", get(chat::get_reconnect_requests))
        .route("/met-users", get(chat::met_users))
        .route("/start-direct-chat", post(chat::start_direct_chat))
        .route("/report-problem", post(chat::report_problem))
        .route("/contact-us", post(chat::contact_us))
        .route("/stats", get(chat::stats))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::get_users))
        .route("/users/{user_id}/ban", post(admin::ban_user))
        .route("/users/{user_id}/unban", post(admin::unban_user))
        .route("/reports", get(admin::get_reports))
        .route("/reports/{report_id}/review", post(admin::review_report))
        .route(
            "/system-settings",
            get(admin::get_system_settings).put(admin::update_system_settings),
        )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api/chat", chat_routes())
        .nest("/api/admin", admin_routes())
}

/// Build the application with its middleware stack over `store`.
///
/// Sentry layers are not included; the binary adds them outermost.
pub fn app<S>(state: AppState, store: S) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = create_session_layer(store, state.config());

    routes()
        .layer(session_layer)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
