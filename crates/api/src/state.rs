//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::services::{AdminPolicy, ScenarioGenerator, UserDirectory};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// collaborators every request goes through.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    directory: Arc<dyn UserDirectory>,
    admin_policy: Arc<dyn AdminPolicy>,
    scenario: Arc<dyn ScenarioGenerator>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - API configuration
    /// * `directory` - Identity lookup used by the request gate
    /// * `admin_policy` - Decides access to the admin surface
    /// * `scenario` - Source of simulated chat and moderation data
    #[must_use]
    pub fn new(
        config: ApiConfig,
        directory: Arc<dyn UserDirectory>,
        admin_policy: Arc<dyn AdminPolicy>,
        scenario: Arc<dyn ScenarioGenerator>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                directory,
                admin_policy,
                scenario,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get the user directory.
    #[must_use]
    pub fn directory(&self) -> &dyn UserDirectory {
        self.inner.directory.as_ref()
    }

    /// Get the admin policy.
    #[must_use]
    pub fn admin_policy(&self) -> &dyn AdminPolicy {
        self.inner.admin_policy.as_ref()
    }

    /// Get the scenario generator.
    #[must_use]
    pub fn scenario(&self) -> &dyn ScenarioGenerator {
        self.inner.scenario.as_ref()
    }
}
