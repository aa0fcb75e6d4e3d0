//! Collaborators the handlers depend on.
//!
//! Each sits behind a trait so a real implementation can replace the current
//! one without changing handler contracts:
//!
//! - [`directory`] - resolves session identities to users
//! - [`admin_policy`] - decides who may use the admin surface
//! - [`scenario`] - produces the simulated matching and moderation data

pub mod admin_policy;
pub mod directory;
pub mod scenario;

pub use admin_policy::{AdminPolicy, AllowAuthenticated};
pub use directory::{PgUserDirectory, StaticUserDirectory, UserDirectory};
pub use scenario::{MockScenario, ScenarioGenerator};
