//! Application state for the payroll engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, StatutoryRates};

/// Shared application state.
///
/// Holds the loaded jurisdiction configuration. It is read-only after
/// startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the statutory rates in force.
    pub fn rates(&self) -> &StatutoryRates {
        self.config.rates()
    }
}
