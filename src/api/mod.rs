//! HTTP API module for the Roster Analytics Engine.
//!
//! This module provides the REST endpoints that expose the workload and
//! fairness analyses, either over the roster held in [`AppState`] or over a
//! snapshot posted in the request body.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PhysicianRequest, RosterEntryRequest, SnapshotRequest};
pub use response::ApiError;
pub use state::AppState;
