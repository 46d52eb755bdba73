//! Roster Analytics Engine for emergency-department physician rosters
//!
//! This crate turns one month of shift assignments into two independent
//! views: per-physician and department workload statistics, and fairness
//! scores with rotation quality, opportunity distribution, recommendations
//! and inequity alerts.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
