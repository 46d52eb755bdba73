//! Configuration for the Roster Analytics Engine.
//!
//! Weights, dispersion coefficients and rule thresholds are named constants
//! in [`defaults`]; [`AnalyticsConfig`] carries them into the analyses and
//! can be overridden from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use roster_analytics::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ed_roster").unwrap();
//! println!("Shift length: {}h", config.config().workload.shift_hours);
//! ```

pub mod defaults;
mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AlertThresholds, AnalyticsConfig, DifficultyWeights, DimensionFactors, FairnessConfig,
    IntensityConfig, OpportunityConfig, RecommendationThresholds, ThresholdConfig,
    WorkloadConfig,
};
