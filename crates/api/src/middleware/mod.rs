//! HTTP middleware stack for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`)
//! 2. `CatchPanicLayer` (panics become JSON 500 responses)
//! 3. `TraceLayer` (request span with a `request_id` field)
//! 4. Request ID (record/propagate `x-request-id`)
//! 5. Session layer (tower-sessions)
//! 6. Auth gate (`RequireUser` / `RequireAdmin` extractors, per handler)

pub mod auth;
pub mod request_id;
pub mod session;

pub use auth::{AuthenticatedUser, RequireAdmin, RequireUser};
pub use request_id::{RequestId, request_id_middleware};
pub use session::{create_session_layer, postgres_store};
