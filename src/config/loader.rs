//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading analytics
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AnalyticsError, AnalyticsResult};

use super::types::{AnalyticsConfig, FairnessConfig, ThresholdConfig, WorkloadConfig};

/// Loads and provides access to analytics configuration.
///
/// # Directory Structure
///
/// ```text
/// config/ed_roster/
/// ├── workload.yaml    # Shift length, difficulty weights, intensity surcharges
/// ├── fairness.yaml    # Dispersion coefficients, dimension weights, workload flags
/// └── thresholds.yaml  # Recommendation and alert thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_analytics::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ed_roster")?;
/// println!("Night weight: {}", loader.config().workload.weights.night);
/// # Ok::<(), roster_analytics::error::AnalyticsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AnalyticsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any of the three files is missing
    /// - Any file contains invalid YAML or is missing a field
    /// - The loaded values fail [`AnalyticsConfig::validate`]
    pub fn load<P: AsRef<Path>>(path: P) -> AnalyticsResult<Self> {
        let path = path.as_ref();

        let workload = Self::load_yaml::<WorkloadConfig>(&path.join("workload.yaml"))?;
        let fairness = Self::load_yaml::<FairnessConfig>(&path.join("fairness.yaml"))?;
        let thresholds = Self::load_yaml::<ThresholdConfig>(&path.join("thresholds.yaml"))?;

        let config = AnalyticsConfig {
            workload,
            fairness,
            thresholds,
        };
        config.validate()?;

        debug!(path = %path.display(), "Loaded analytics configuration");
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AnalyticsResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AnalyticsError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AnalyticsError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AnalyticsConfig {
        self.config
    }
}
