//! The two roster analyses.
//!
//! [`compute_workload_analysis`] and [`compute_fairness_metrics`] read one
//! month of roster data through a [`RosterRepository`] and assemble the
//! calculation results. Both are pure over the repository snapshot:
//! physicians are processed in ascending id order and every map is a
//! `BTreeMap`, so repeated calls produce identical output.

use std::collections::BTreeMap;

use tracing::debug;

use crate::calculation::{
    aggregate_workload, analyze_opportunities, analyze_rotation, department_balance,
    detect_inequities, doctor_fairness_stats, generate_recommendations, overall_fairness_rating,
    rank_workload, score_fairness, summarize_department,
};
use crate::config::AnalyticsConfig;
use crate::error::AnalyticsResult;
use crate::models::{
    DoctorFairnessStats, DoctorWorkloadStats, FairnessMetrics, Physician, RosterMonth,
    ShiftAssignment, WorkloadAnalysis,
};
use crate::repository::RosterRepository;

/// One month of roster data, grouped by physician.
struct MonthSnapshot {
    period: RosterMonth,
    physicians: Vec<Physician>,
    assignments: Vec<ShiftAssignment>,
}

impl MonthSnapshot {
    fn load(roster: &dyn RosterRepository, year: i32, month: u32) -> AnalyticsResult<Self> {
        let period = RosterMonth::new(year, month)?;
        let mut physicians = roster.all_physicians()?;
        physicians.sort_by(|a, b| a.id.cmp(&b.id));
        let assignments = roster.assignments_for_month(period)?;

        debug!(
            period = %period,
            physicians = physicians.len(),
            assignments = assignments.len(),
            "Loaded roster month"
        );

        Ok(Self {
            period,
            physicians,
            assignments,
        })
    }

    /// Each physician's in-month assignments, keyed by physician id.
    ///
    /// Assignments for unknown physicians or outside the month are dropped.
    fn by_physician(&self) -> BTreeMap<&str, Vec<&ShiftAssignment>> {
        let mut grouped: BTreeMap<&str, Vec<&ShiftAssignment>> = self
            .physicians
            .iter()
            .map(|p| (p.id.as_str(), Vec::new()))
            .collect();

        let mut dropped = 0usize;
        for assignment in &self.assignments {
            match grouped.get_mut(assignment.physician_id.as_str()) {
                Some(list) if self.period.contains(assignment.date) => list.push(assignment),
                _ => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!(period = %self.period, dropped, "Ignored assignments outside the roster");
        }
        grouped
    }
}

/// Computes per-physician workload, the department summary, the workload
/// ranking and the balance score for one month.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidPeriod`](crate::error::AnalyticsError::InvalidPeriod)
/// for an invalid year or month, and propagates repository failures.
///
/// # Example
///
/// ```
/// use roster_analytics::analysis::compute_workload_analysis;
/// use roster_analytics::config::AnalyticsConfig;
/// use roster_analytics::models::Physician;
/// use roster_analytics::repository::InMemoryRoster;
///
/// let roster = InMemoryRoster::new(vec![Physician::new("doc_001", "Dr. Osei")], Vec::new());
/// let analysis = compute_workload_analysis(&roster, &AnalyticsConfig::default(), 2026, 2).unwrap();
///
/// assert_eq!(analysis.days_in_month, 28);
/// assert_eq!(analysis.doctor_analysis["doc_001"].off_days, 28);
/// ```
pub fn compute_workload_analysis(
    roster: &dyn RosterRepository,
    config: &AnalyticsConfig,
    year: i32,
    month: u32,
) -> AnalyticsResult<WorkloadAnalysis> {
    let snapshot = MonthSnapshot::load(roster, year, month)?;
    let grouped = snapshot.by_physician();

    let doctors: Vec<DoctorWorkloadStats> = snapshot
        .physicians
        .iter()
        .map(|physician| {
            let assignments = grouped
                .get(physician.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            aggregate_workload(physician, assignments, snapshot.period, &config.workload)
        })
        .collect();

    let department_stats = summarize_department(&doctors);
    let workload_ranking = rank_workload(&doctors);
    let balance_score = department_balance(&doctors);

    debug!(
        period = %snapshot.period,
        balance_score = %balance_score.score,
        "Workload analysis computed"
    );

    Ok(WorkloadAnalysis {
        year: snapshot.period.year(),
        month: snapshot.period.month(),
        days_in_month: snapshot.period.days_in_month(),
        doctor_analysis: doctors
            .into_iter()
            .map(|d| (d.physician_id.clone(), d))
            .collect(),
        department_stats,
        workload_ranking,
        balance_score,
    })
}

/// Computes fairness scores, rotation patterns, opportunity distribution,
/// recommendations, the overall rating and inequity alerts for one month.
///
/// With no physicians the scores and rating are absent and every
/// collection is empty.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidPeriod`](crate::error::AnalyticsError::InvalidPeriod)
/// for an invalid year or month, and propagates repository failures.
pub fn compute_fairness_metrics(
    roster: &dyn RosterRepository,
    config: &AnalyticsConfig,
    year: i32,
    month: u32,
) -> AnalyticsResult<FairnessMetrics> {
    let snapshot = MonthSnapshot::load(roster, year, month)?;
    let grouped = snapshot.by_physician();

    let mut doctor_stats: Vec<DoctorFairnessStats> = Vec::with_capacity(snapshot.physicians.len());
    let mut rotation_analysis = BTreeMap::new();
    for physician in &snapshot.physicians {
        let assignments = grouped
            .get(physician.id.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();
        doctor_stats.push(doctor_fairness_stats(
            physician,
            assignments,
            snapshot.period,
            &config.workload,
        ));
        rotation_analysis.insert(physician.id.clone(), analyze_rotation(assignments));
    }

    let fairness_scores = score_fairness(&doctor_stats, &config.fairness);
    let opportunity_analysis = analyze_opportunities(&doctor_stats, &config.fairness.opportunity);

    let (recommendations, overall_fairness_rating, inequity_alerts) = match &fairness_scores {
        Some(scores) => (
            generate_recommendations(scores, &doctor_stats, &config.thresholds.recommendations),
            Some(overall_fairness_rating(scores.overall)),
            detect_inequities(scores, &doctor_stats, &config.thresholds.alerts),
        ),
        None => (Vec::new(), None, Vec::new()),
    };

    debug!(
        period = %snapshot.period,
        overall = ?fairness_scores.as_ref().map(|s| s.overall),
        recommendations = recommendations.len(),
        alerts = inequity_alerts.len(),
        "Fairness metrics computed"
    );

    Ok(FairnessMetrics {
        year: snapshot.period.year(),
        month: snapshot.period.month(),
        days_in_month: snapshot.period.days_in_month(),
        doctor_stats: doctor_stats
            .into_iter()
            .map(|s| (s.physician_id.clone(), s))
            .collect(),
        fairness_scores,
        rotation_analysis,
        opportunity_analysis,
        recommendations,
        overall_fairness_rating,
        inequity_alerts,
    })
}
