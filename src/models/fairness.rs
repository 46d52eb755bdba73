//! Fairness analysis models.
//!
//! Outputs of the fairness branch: per-physician [`DoctorFairnessStats`],
//! department [`FairnessScores`], rotation patterns, opportunity
//! distribution, and the advisory [`Recommendation`]s and
//! [`InequityAlert`]s, assembled into [`FairnessMetrics`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Rating, ShiftTally};

/// Duty totals used for fairness comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyTotals {
    /// Ordinary shifts (morning + evening + night).
    pub shifts: u32,
    /// Hours of ordinary shifts.
    pub hours: u32,
    /// Shifts plus referral duties.
    pub duties: u32,
    /// Duties on Saturdays or Sundays.
    pub weekend: u32,
    /// Holiday duties. No holiday calendar is modelled, so this mirrors
    /// `weekend`.
    pub holiday: u32,
    /// Night shifts plus referral duties.
    pub premium: u32,
}

/// Duty categories as percentages, one decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyPercentages {
    /// Duties relative to the days in the month.
    pub workload: Decimal,
    /// Weekend duties relative to all duties.
    pub weekend: Decimal,
    /// Night shifts relative to all duties.
    pub night: Decimal,
    /// Referral duties relative to all duties.
    pub referral: Decimal,
    /// Morning shifts relative to all duties.
    pub morning: Decimal,
    /// Evening shifts relative to all duties.
    pub evening: Decimal,
}

/// Fairness inputs for one physician.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorFairnessStats {
    /// The physician's identifier.
    pub physician_id: String,
    /// The physician's display name.
    pub name: String,
    /// Duty category counts.
    pub shifts: ShiftTally,
    /// Derived totals.
    pub totals: DutyTotals,
    /// Derived percentages.
    pub percentages: DutyPercentages,
}

/// One value per fairness measure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionSummary {
    /// Ordinary shift count.
    pub shifts: Decimal,
    /// Ordinary shift hours.
    pub hours: Decimal,
    /// Weekend duties.
    pub weekend: Decimal,
    /// Night shifts.
    pub night: Decimal,
    /// Referral duties.
    pub referral: Decimal,
    /// Premium duties.
    pub premium: Decimal,
}

/// Department fairness scores in [0, 100] with their inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessScores {
    /// Evenness of ordinary shift counts.
    pub workload: Decimal,
    /// Evenness of weekend duties.
    pub weekend: Decimal,
    /// Evenness of night shifts.
    pub night: Decimal,
    /// Evenness of referral duties.
    pub referral: Decimal,
    /// Evenness of premium duties.
    pub premium: Decimal,
    /// Weighted combination of the five dimension scores.
    pub overall: Decimal,
    /// Department means, one decimal.
    pub averages: DimensionSummary,
    /// Population standard deviations, one decimal.
    pub std_devs: DimensionSummary,
    /// Standard deviation over `max(mean, 1)`, two decimals.
    pub coefficients_of_variation: DimensionSummary,
}

/// Shift rotation quality for one physician.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationPattern {
    /// Transitions following the morning, evening, night cycle.
    pub good_rotations: u32,
    /// Transitions repeating the same shift.
    pub consecutive_same_shift: u32,
    /// All transitions between date-ordered duties.
    pub total_transitions: u32,
    /// Good rotations as a percentage of transitions, one decimal.
    pub rotation_score: Decimal,
    /// Rating derived from the score.
    pub quality: Rating,
}

/// One physician's share of an opportunity category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityEntry {
    /// The physician's identifier.
    pub physician_id: String,
    /// The physician's display name.
    pub name: String,
    /// Duties in the category.
    pub count: u32,
    /// Count relative to the physician's duties, one decimal.
    pub percentage: Decimal,
}

/// A physician flagged for an unusually light or heavy month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadFlag {
    /// The physician's identifier.
    pub physician_id: String,
    /// The physician's display name.
    pub name: String,
    /// Ordinary shifts in the month.
    pub shifts: u32,
}

/// Distribution of premium, weekend and referral duties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpportunityAnalysis {
    /// Ranked by premium duties.
    pub premium_shifts: Vec<OpportunityEntry>,
    /// Ranked by weekend duties.
    pub weekend_duties: Vec<OpportunityEntry>,
    /// Ranked by referral duties.
    pub referral_duties: Vec<OpportunityEntry>,
    /// Physicians below the light-workload shift count.
    pub light_workload: Vec<WorkloadFlag>,
    /// Physicians above the heavy-workload shift count.
    pub heavy_workload: Vec<WorkloadFlag>,
}

/// What a recommendation proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Move shifts from over- to under-loaded physicians.
    WorkloadRedistribution,
    /// Spread night shifts more evenly.
    NightShiftBalance,
    /// Rotate weekend duties.
    WeekendRotation,
    /// Spread referral duties more evenly.
    ReferralBalance,
}

/// Recommendation urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Act this roster cycle.
    High,
    /// Act when next drafting the roster.
    Medium,
    /// Monitor.
    Low,
}

/// An advisory scheduling recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// What is proposed.
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// Urgency.
    pub priority: Priority,
    /// Short title.
    pub title: String,
    /// Details naming the physicians involved.
    pub description: String,
    /// Expected effect.
    pub impact: String,
}

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// Requires immediate attention.
    Critical,
    /// Should be reviewed.
    Warning,
}

/// The inequity an alert reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Workload fairness score critically low.
    WorkloadImbalance,
    /// Night shifts concentrated on few physicians.
    NightConcentration,
    /// Excessive weekend duties for some physicians.
    WeekendBurden,
}

/// An advisory inequity alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InequityAlert {
    /// Severity.
    pub level: AlertLevel,
    /// What was detected.
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// What was observed.
    pub message: String,
    /// Suggested action.
    pub action: String,
}

/// Overall fairness label with its fixed description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessRating {
    /// The band.
    pub level: Rating,
    /// The overall score the band was derived from.
    pub score: Decimal,
    /// Human-readable description of the band.
    pub description: String,
}

/// The complete fairness analysis for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessMetrics {
    /// Calendar year analysed.
    pub year: i32,
    /// Month analysed (1-12).
    pub month: u32,
    /// Days in the analysed month.
    pub days_in_month: u32,
    /// Per-physician statistics keyed by physician id.
    pub doctor_stats: BTreeMap<String, DoctorFairnessStats>,
    /// Department scores; absent when there are no physicians.
    pub fairness_scores: Option<FairnessScores>,
    /// Per-physician rotation patterns keyed by physician id.
    pub rotation_analysis: BTreeMap<String, RotationPattern>,
    /// Opportunity distribution.
    pub opportunity_analysis: OpportunityAnalysis,
    /// Advisory recommendations.
    pub recommendations: Vec<Recommendation>,
    /// Overall rating; absent when there are no physicians.
    pub overall_fairness_rating: Option<FairnessRating>,
    /// Advisory inequity alerts.
    pub inequity_alerts: Vec<InequityAlert>,
}
