//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! payroll rules from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{JurisdictionConfig, JurisdictionMetadata, StatutoryRates};

/// Loads and provides access to jurisdiction configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/timor_leste/
/// ├── jurisdiction.yaml   # Jurisdiction metadata
/// └── statutory.yaml      # Tax, INSS, overtime, severance and notice rules
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/timor_leste").unwrap();
/// println!("Minimum wage: ${}", loader.rates().minimum_wage_monthly);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: JurisdictionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The statutory rates fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let rates = Self::load_yaml::<StatutoryRates>(&path.join("statutory.yaml"))?;
        rates.validate()?;

        info!(
            jurisdiction = %metadata.code,
            version = %metadata.version,
            "Loaded statutory configuration"
        );

        Ok(Self {
            config: JurisdictionConfig::new(metadata, rates),
        })
    }

    /// Returns a loader over the compiled-in Timor-Leste snapshot.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::builtin();
    /// assert_eq!(loader.jurisdiction().code, "TL");
    /// ```
    pub fn builtin() -> Self {
        Self {
            config: JurisdictionConfig::new(
                JurisdictionMetadata::timor_leste(),
                StatutoryRates::timor_leste(),
            ),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying jurisdiction configuration.
    pub fn config(&self) -> &JurisdictionConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Returns the statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        self.config.rates()
    }
}
