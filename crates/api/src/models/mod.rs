//! Domain models for the API.

pub mod admin;
pub mod chat;
pub mod chat_state;
pub mod session;
pub mod user;

pub use admin::{ManagedUser, Report, SystemSettings};
pub use chat::ChatStats;
pub use chat_state::ChatState;
pub use session::keys as session_keys;
pub use user::User;
