//! HTTP request handlers for the Roster Analytics API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{compute_fairness_metrics, compute_workload_analysis};
use crate::config::AnalyticsConfig;
use crate::error::AnalyticsResult;
use crate::repository::RosterRepository;

use super::request::SnapshotRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Which analysis a request asks for.
#[derive(Debug, Clone, Copy)]
enum Analysis {
    Workload,
    Fairness,
}

impl Analysis {
    fn name(self) -> &'static str {
        match self {
            Analysis::Workload => "workload",
            Analysis::Fairness => "fairness",
        }
    }
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analytics/workload/:year/:month", get(workload_handler))
        .route("/analytics/fairness/:year/:month", get(fairness_handler))
        .route("/analytics/workload", post(workload_snapshot_handler))
        .route("/analytics/fairness", post(fairness_snapshot_handler))
        .with_state(state)
}

/// Handler for `GET /analytics/workload/:year/:month`.
async fn workload_handler(
    State(state): State<AppState>,
    period: Result<Path<(i32, u32)>, PathRejection>,
) -> Response {
    stored_roster(state, period, Analysis::Workload)
}

/// Handler for `GET /analytics/fairness/:year/:month`.
async fn fairness_handler(
    State(state): State<AppState>,
    period: Result<Path<(i32, u32)>, PathRejection>,
) -> Response {
    stored_roster(state, period, Analysis::Fairness)
}

/// Handler for `POST /analytics/workload`.
///
/// Analyses the roster snapshot carried in the request body.
async fn workload_snapshot_handler(
    State(state): State<AppState>,
    payload: Result<Json<SnapshotRequest>, JsonRejection>,
) -> Response {
    posted_snapshot(state, payload, Analysis::Workload)
}

/// Handler for `POST /analytics/fairness`.
async fn fairness_snapshot_handler(
    State(state): State<AppState>,
    payload: Result<Json<SnapshotRequest>, JsonRejection>,
) -> Response {
    posted_snapshot(state, payload, Analysis::Fairness)
}

fn stored_roster(
    state: AppState,
    period: Result<Path<(i32, u32)>, PathRejection>,
    analysis: Analysis,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let (year, month) = match period {
        Ok(Path(period)) => period,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid roster period in path"
            );
            return error_response(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_period(rejection.body_text()),
            );
        }
    };

    info!(
        correlation_id = %correlation_id,
        analysis = analysis.name(),
        year,
        month,
        "Processing analytics request"
    );
    run_analysis(correlation_id, analysis, state.roster(), state.config(), year, month)
}

fn posted_snapshot(
    state: AppState,
    payload: Result<Json<SnapshotRequest>, JsonRejection>,
    analysis: Analysis,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        analysis = analysis.name(),
        "Processing snapshot analytics request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                json_rejection_error(correlation_id, rejection),
            );
        }
    };

    let (year, month, roster) = request.into_parts();
    run_analysis(correlation_id, analysis, &roster, state.config(), year, month)
}

fn run_analysis(
    correlation_id: Uuid,
    analysis: Analysis,
    roster: &dyn RosterRepository,
    config: &AnalyticsConfig,
    year: i32,
    month: u32,
) -> Response {
    let start_time = Instant::now();
    match analysis {
        Analysis::Workload => finish(
            correlation_id,
            analysis,
            start_time,
            compute_workload_analysis(roster, config, year, month),
        ),
        Analysis::Fairness => finish(
            correlation_id,
            analysis,
            start_time,
            compute_fairness_metrics(roster, config, year, month),
        ),
    }
}

fn finish<T: Serialize>(
    correlation_id: Uuid,
    analysis: Analysis,
    start_time: Instant,
    result: AnalyticsResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                analysis = analysis.name(),
                duration_us = duration.as_micros(),
                "Analysis completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                analysis = analysis.name(),
                error = %err,
                "Analysis failed"
            );
            let api_error: ApiErrorResponse = err.into();
            error_response(api_error.status, api_error.error)
        }
    }
}

fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn error_response(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
