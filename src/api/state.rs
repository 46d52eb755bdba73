//! Application state for the Roster Analytics API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::AnalyticsConfig;
use crate::repository::RosterRepository;

/// Shared application state.
///
/// Holds the analytics configuration and the roster served by the `GET`
/// endpoints. Both are read-only and shared behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The validated analytics configuration.
    config: Arc<AnalyticsConfig>,
    /// The roster data source.
    roster: Arc<dyn RosterRepository + Send + Sync>,
}

impl AppState {
    /// Creates a new application state from a configuration and a roster.
    pub fn new<R>(config: AnalyticsConfig, roster: R) -> Self
    where
        R: RosterRepository + Send + Sync + 'static,
    {
        Self {
            config: Arc::new(config),
            roster: Arc::new(roster),
        }
    }

    /// Returns the analytics configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Returns the roster data source.
    pub fn roster(&self) -> &(dyn RosterRepository + Send + Sync) {
        self.roster.as_ref()
    }
}
