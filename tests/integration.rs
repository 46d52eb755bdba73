//! End-to-end tests for the Roster Analytics Engine.
//!
//! This test suite drives both analyses through the HTTP router:
//! - Workload aggregation (tallies, weighted hours, streaks, weekends)
//! - Department summary and balance score
//! - Fairness scores, rotation and opportunity analysis
//! - Recommendations and inequity alerts
//! - Edge cases and error responses

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use roster_analytics::api::{AppState, create_router};
use roster_analytics::config::ConfigLoader;
use roster_analytics::models::{Physician, ShiftAssignment, ShiftType};
use roster_analytics::repository::InMemoryRoster;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state(roster: InMemoryRoster) -> AppState {
    let loader = ConfigLoader::load("./config/ed_roster").expect("Failed to load config");
    AppState::new(loader.into_config(), roster)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state(InMemoryRoster::default()))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn assert_decimal(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .map(decimal)
        .unwrap_or_else(|| panic!("Expected decimal string, got {}", value));
    assert_eq!(actual, decimal(expected), "value {} != {}", actual, expected);
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, json)
}

async fn post_analysis(router: Router, analysis: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(format!("/analytics/{}", analysis))
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get_analysis(router: Router, analysis: &str, year: i32, month: u32) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .uri(format!("/analytics/{}/{}/{}", analysis, year, month))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

fn physician(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

fn entry(id: &str, physician_id: &str, shift: &str, date: &str, referral: bool) -> Value {
    json!({
        "id": id,
        "physician_id": physician_id,
        "shift": shift,
        "date": date,
        "is_referral_duty": referral
    })
}

/// `count` consecutive morning shifts from the 1st of March 2026.
fn mornings(physician_id: &str, count: u32) -> Vec<Value> {
    (1..=count)
        .map(|day| {
            entry(
                &format!("{}_{:02}", physician_id, day),
                physician_id,
                "morning",
                &format!("2026-03-{:02}", day),
                false,
            )
        })
        .collect()
}

fn snapshot(year: i32, month: u32, physicians: Vec<Value>, assignments: Vec<Value>) -> Value {
    json!({
        "year": year,
        "month": month,
        "physicians": physicians,
        "assignments": assignments
    })
}

// =============================================================================
// SECTION 1: Workload Aggregation
// =============================================================================

#[tokio::test]
async fn test_weighted_hours_and_referral_tally() {
    // Jan 2026: 2 morning, 1 evening, 2 night, 1 referral (on a night)
    let body = snapshot(
        2026,
        1,
        vec![physician("doc_001", "Dr. Osei")],
        vec![
            entry("r1", "doc_001", "morning", "2026-01-05", false),
            entry("r2", "doc_001", "morning", "2026-01-06", false),
            entry("r3", "doc_001", "evening", "2026-01-07", false),
            entry("r4", "doc_001", "night", "2026-01-12", false),
            entry("r5", "doc_001", "night", "2026-01-13", false),
            entry("r6", "doc_001", "night", "2026-01-20", true),
        ],
    );

    let (status, result) = post_analysis(create_router_for_test(), "workload", body).await;

    assert_eq!(status, StatusCode::OK);
    let stats = &result["doctor_analysis"]["doc_001"];
    assert_eq!(stats["shifts"]["morning"], 2);
    assert_eq!(stats["shifts"]["evening"], 1);
    assert_eq!(stats["shifts"]["night"], 2);
    assert_eq!(stats["shifts"]["referral"], 1);
    // 5 shifts * 8h; referral excluded
    assert_decimal(&stats["regular_hours"], "40");
    // 24 + 16 * 1.3 + 8 * 1.2 = 54.4
    assert_decimal(&stats["weighted_hours"], "54.4");
    assert_eq!(stats["work_days"], 6);
    assert_eq!(stats["off_days"], 25);
}

#[tokio::test]
async fn test_streaks_example() {
    let days = ["2026-03-02", "2026-03-03", "2026-03-04", "2026-03-06", "2026-03-07"];
    let assignments = days
        .iter()
        .enumerate()
        .map(|(i, date)| entry(&format!("r{}", i), "doc_001", "evening", date, false))
        .collect();
    let body = snapshot(2026, 3, vec![physician("doc_001", "Dr. Osei")], assignments);

    let (status, result) = post_analysis(create_router_for_test(), "workload", body).await;

    assert_eq!(status, StatusCode::OK);
    let streaks = &result["doctor_analysis"]["doc_001"]["streaks"];
    assert_eq!(streaks["max_consecutive"], 3);
    assert_eq!(streaks["total_streaks"], 2);
    assert_eq!(streaks["streak_lengths"], json!([3, 2]));
    assert_decimal(&streaks["average_streak_length"], "2.5");
}

#[tokio::test]
async fn test_weekend_duties_counted() {
    // 2026-03-07 Saturday, 2026-03-08 Sunday, 2026-03-09 Monday
    let body = snapshot(
        2026,
        3,
        vec![physician("doc_001", "Dr. Osei")],
        vec![
            entry("r1", "doc_001", "morning", "2026-03-07", false),
            entry("r2", "doc_001", "night", "2026-03-08", true),
            entry("r3", "doc_001", "evening", "2026-03-09", false),
        ],
    );

    let (status, result) = post_analysis(create_router_for_test(), "workload", body).await;

    assert_eq!(status, StatusCode::OK);
    let weekend = &result["doctor_analysis"]["doc_001"]["weekend"];
    assert_eq!(weekend["saturday"], 1);
    assert_eq!(weekend["sunday"], 1);
    assert_eq!(weekend["total"], 2);
}

#[tokio::test]
async fn test_leap_year_february() {
    let body = snapshot(2024, 2, vec![physician("doc_001", "Dr. Osei")], vec![]);
    let (status, result) = post_analysis(create_router_for_test(), "workload", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days_in_month"], 29);
    assert_eq!(result["doctor_analysis"]["doc_001"]["off_days"], 29);
    assert_eq!(result["doctor_analysis"]["doc_001"]["intensity_level"], "low");
}

// =============================================================================
// SECTION 2: Department Summary
// =============================================================================

#[tokio::test]
async fn test_department_summary_and_ranking() {
    let mut assignments = mornings("doc_001", 10);
    assignments.extend(mornings("doc_002", 20));
    let body = snapshot(
        2026,
        3,
        vec![physician("doc_002", "Dr. Baptiste"), physician("doc_001", "Dr. Osei")],
        assignments,
    );

    let (status, result) = post_analysis(create_router_for_test(), "workload", body).await;

    assert_eq!(status, StatusCode::OK);
    let department = &result["department_stats"];
    assert_eq!(department["physician_count"], 2);
    assert_decimal(&department["average_regular_hours"], "120");
    assert_decimal(&department["regular_hours_std_dev"], "40");
    assert_eq!(department["balance_rating"], "poor");

    let ranking = result["workload_ranking"].as_array().unwrap();
    assert_eq!(ranking[0]["physician_id"], "doc_002");
    assert_eq!(ranking[0]["rank"], 1);
    assert_eq!(ranking[1]["physician_id"], "doc_001");

    // weighted 80 and 160: deviation 40, 100 - 80 = 20
    assert_decimal(&result["balance_score"]["score"], "20");
    assert_eq!(result["balance_score"]["rating"], "poor");
}

// =============================================================================
// SECTION 3: Fairness
// =============================================================================

#[tokio::test]
async fn test_rotation_example_is_excellent() {
    let body = snapshot(
        2026,
        3,
        vec![physician("doc_001", "Dr. Osei")],
        vec![
            entry("r1", "doc_001", "morning", "2026-03-02", false),
            entry("r2", "doc_001", "evening", "2026-03-03", false),
            entry("r3", "doc_001", "night", "2026-03-04", false),
            entry("r4", "doc_001", "morning", "2026-03-05", false),
        ],
    );

    let (status, result) = post_analysis(create_router_for_test(), "fairness", body).await;

    assert_eq!(status, StatusCode::OK);
    let rotation = &result["rotation_analysis"]["doc_001"];
    assert_eq!(rotation["good_rotations"], 3);
    assert_eq!(rotation["total_transitions"], 3);
    assert_decimal(&rotation["rotation_score"], "100");
    assert_eq!(rotation["quality"], "excellent");
}

#[tokio::test]
async fn test_identical_physicians_score_100() {
    let mut assignments = mornings("doc_001", 15);
    assignments.extend(mornings("doc_002", 15));
    let body = snapshot(
        2026,
        3,
        vec![physician("doc_001", "Dr. Osei"), physician("doc_002", "Dr. Baptiste")],
        assignments,
    );

    let (status, result) = post_analysis(create_router_for_test(), "fairness", body).await;

    assert_eq!(status, StatusCode::OK);
    let scores = &result["fairness_scores"];
    for dimension in ["workload", "weekend", "night", "referral", "premium", "overall"] {
        assert_decimal(&scores[dimension], "100");
    }
    assert_eq!(result["overall_fairness_rating"]["level"], "excellent");
    assert!(result["recommendations"].as_array().unwrap().is_empty());
    assert!(result["inequity_alerts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_workload_redistribution_and_weekend_burden() {
    // Shifts 24, 8 and 16: mean 16, sd 6.53, workload score 67.3
    let mut assignments = mornings("doc_001", 24);
    assignments.extend(mornings("doc_002", 8));
    assignments.extend(mornings("doc_003", 16));
    let body = snapshot(
        2026,
        3,
        vec![
            physician("doc_001", "Dr. Osei"),
            physician("doc_002", "Dr. Baptiste"),
            physician("doc_003", "Dr. Lindqvist"),
        ],
        assignments,
    );

    let (status, result) = post_analysis(create_router_for_test(), "fairness", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["fairness_scores"]["workload"], "67.3");

    let recommendations = result["recommendations"].as_array().unwrap();
    let redistribution = recommendations
        .iter()
        .find(|r| r["type"] == "workload_redistribution")
        .expect("workload redistribution recommendation");
    assert_eq!(redistribution["priority"], "high");
    let description = redistribution["description"].as_str().unwrap();
    assert!(description.contains("Dr. Osei"));
    assert!(description.contains("Dr. Baptiste"));
    assert!(!description.contains("Dr. Lindqvist"));

    // Mar 2026 weekends within days 1-24: 1, 7, 8, 14, 15, 21, 22
    let alerts = result["inequity_alerts"].as_array().unwrap();
    assert!(alerts.iter().all(|a| a["type"] != "workload_imbalance"));
    let burden = alerts
        .iter()
        .find(|a| a["type"] == "weekend_burden")
        .expect("weekend burden alert");
    assert_eq!(burden["level"], "warning");
    assert!(burden["message"].as_str().unwrap().starts_with("Dr. Osei worked 7"));

    let light = result["opportunity_analysis"]["light_workload"].as_array().unwrap();
    assert_eq!(light.len(), 1);
    assert_eq!(light[0]["physician_id"], "doc_002");
    let heavy = result["opportunity_analysis"]["heavy_workload"].as_array().unwrap();
    assert_eq!(heavy[0]["physician_id"], "doc_001");
}

#[tokio::test]
async fn test_zero_physicians() {
    let router = create_router_for_test();

    let (status, workload) = get_analysis(router.clone(), "workload", 2026, 3).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(workload["department_stats"]["physician_count"], 0);
    assert_decimal(&workload["balance_score"]["score"], "100");
    assert_eq!(workload["balance_score"]["rating"], "excellent");

    let (status, fairness) = get_analysis(router, "fairness", 2026, 3).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fairness["fairness_scores"].is_null());
    assert!(fairness["overall_fairness_rating"].is_null());
    assert!(fairness["recommendations"].as_array().unwrap().is_empty());
    assert!(fairness["inequity_alerts"].as_array().unwrap().is_empty());
}

// =============================================================================
// SECTION 4: Stored Roster and Determinism
// =============================================================================

fn stored_roster() -> InMemoryRoster {
    let physicians = vec![
        Physician::new("doc_002", "Dr. Baptiste"),
        Physician::new("doc_001", "Dr. Osei"),
    ];
    let shifts = [ShiftType::Morning, ShiftType::Evening, ShiftType::Night];
    let assignments = (1..=28u32)
        .map(|day| ShiftAssignment {
            id: format!("r_{:02}", day),
            physician_id: if day % 3 == 0 { "doc_001" } else { "doc_002" }.to_string(),
            shift: shifts[(day % 3) as usize],
            date: chrono::NaiveDate::from_ymd_opt(2026, 2, day).unwrap(),
            is_referral_duty: day % 5 == 0,
        })
        .collect();
    InMemoryRoster::new(physicians, assignments)
}

#[tokio::test]
async fn test_stored_roster_is_deterministic() {
    let router = create_router(create_test_state(stored_roster()));

    let (status, first) = get_analysis(router.clone(), "fairness", 2026, 2).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = get_analysis(router.clone(), "fairness", 2026, 2).await;
    assert_eq!(first, second);

    let (_, first) = get_analysis(router.clone(), "workload", 2026, 2).await;
    let (_, second) = get_analysis(router, "workload", 2026, 2).await;
    assert_eq!(first, second);

    let ids: Vec<&String> = first["doctor_analysis"].as_object().unwrap().keys().collect();
    assert_eq!(ids, vec!["doc_001", "doc_002"]);
}

#[tokio::test]
async fn test_stored_roster_other_month_is_empty() {
    let router = create_router(create_test_state(stored_roster()));
    let (status, result) = get_analysis(router, "workload", 2026, 3).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["doctor_analysis"]["doc_001"]["work_days"], 0);
    assert_eq!(result["doctor_analysis"]["doc_002"]["work_days"], 0);
}

// =============================================================================
// SECTION 5: Error Cases
// =============================================================================

#[tokio::test]
async fn test_invalid_month_returns_400() {
    let (status, error) = get_analysis(create_router_for_test(), "fairness", 2026, 13).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PERIOD");
}

#[tokio::test]
async fn test_invalid_year_returns_400() {
    let body = snapshot(99, 3, vec![], vec![]);
    let (status, error) = post_analysis(create_router_for_test(), "workload", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PERIOD");
}

#[tokio::test]
async fn test_unknown_shift_returns_400() {
    let body = snapshot(
        2026,
        3,
        vec![physician("doc_001", "Dr. Osei")],
        vec![entry("r1", "doc_001", "afternoon", "2026-03-02", false)],
    );
    let (status, error) = post_analysis(create_router_for_test(), "workload", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}
