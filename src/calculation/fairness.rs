//! Fairness scoring.
//!
//! Derives per-physician duty totals and percentages, then converts the
//! cross-physician dispersion of six measures into 0-100 fairness scores
//! and a weighted overall score.
//!
//! The workload dimension is scored from the standard deviation of the
//! absolute shift count, not from the workload percentage reported per
//! physician.

use rust_decimal::Decimal;

use crate::config::{FairnessConfig, WorkloadConfig};
use crate::models::{
    DimensionSummary, DoctorFairnessStats, DutyPercentages, DutyTotals, FairnessScores, Physician,
    RosterMonth, ShiftAssignment,
};

use super::stats::{mean, percentage, population_std_dev, round_one, round_to, score_from_penalty};
use super::tally::{count_weekend_duties, tally_shifts};

/// Builds the fairness inputs for one physician.
pub fn doctor_fairness_stats(
    physician: &Physician,
    assignments: &[&ShiftAssignment],
    period: RosterMonth,
    workload: &WorkloadConfig,
) -> DoctorFairnessStats {
    let tally = tally_shifts(assignments);
    let weekend = count_weekend_duties(assignments).total;
    let shifts = tally.shifts();
    let duties = tally.total_duties();

    let totals = DutyTotals {
        shifts,
        hours: shifts * workload.shift_hours,
        duties,
        weekend,
        holiday: weekend,
        premium: tally.premium(),
    };

    let percentages = DutyPercentages {
        workload: percentage(duties, period.days_in_month()),
        weekend: percentage(weekend, duties),
        night: percentage(tally.night, duties),
        referral: percentage(tally.referral, duties),
        morning: percentage(tally.morning, duties),
        evening: percentage(tally.evening, duties),
    };

    DoctorFairnessStats {
        physician_id: physician.id.clone(),
        name: physician.name.clone(),
        shifts: tally,
        totals,
        percentages,
    }
}

/// Unrounded department means of the six fairness measures.
pub fn dimension_means(stats: &[DoctorFairnessStats]) -> DimensionSummary {
    summarize_dimensions(stats, mean)
}

/// Unrounded population standard deviations of the six fairness measures.
pub fn dimension_std_devs(stats: &[DoctorFairnessStats]) -> DimensionSummary {
    summarize_dimensions(stats, population_std_dev)
}

fn summarize_dimensions(
    stats: &[DoctorFairnessStats],
    reduce: fn(&[Decimal]) -> Decimal,
) -> DimensionSummary {
    let measure = |select: fn(&DoctorFairnessStats) -> u32| -> Decimal {
        let values: Vec<Decimal> = stats.iter().map(|s| Decimal::from(select(s))).collect();
        reduce(&values)
    };

    DimensionSummary {
        shifts: measure(|s| s.totals.shifts),
        hours: measure(|s| s.totals.hours),
        weekend: measure(|s| s.totals.weekend),
        night: measure(|s| s.shifts.night),
        referral: measure(|s| s.shifts.referral),
        premium: measure(|s| s.totals.premium),
    }
}

fn map_summary(summary: &DimensionSummary, f: impl Fn(Decimal) -> Decimal) -> DimensionSummary {
    DimensionSummary {
        shifts: f(summary.shifts),
        hours: f(summary.hours),
        weekend: f(summary.weekend),
        night: f(summary.night),
        referral: f(summary.referral),
        premium: f(summary.premium),
    }
}

fn coefficient_of_variation(std_dev: Decimal, mean: Decimal) -> Decimal {
    round_to(std_dev / mean.max(Decimal::ONE), 2)
}

/// Scores the department's fairness.
///
/// Returns `None` when there are no physicians to compare.
///
/// # Example
///
/// ```
/// use roster_analytics::calculation::score_fairness;
/// use roster_analytics::config::FairnessConfig;
///
/// assert!(score_fairness(&[], &FairnessConfig::default()).is_none());
/// ```
pub fn score_fairness(
    stats: &[DoctorFairnessStats],
    config: &FairnessConfig,
) -> Option<FairnessScores> {
    if stats.is_empty() {
        return None;
    }

    let means = dimension_means(stats);
    let std_devs = dimension_std_devs(stats);
    let coefficients = &config.coefficients;
    let weights = &config.dimension_weights;

    let dimension_score =
        |std_dev: Decimal, coefficient: Decimal| round_one(score_from_penalty(std_dev * coefficient));

    let workload = dimension_score(std_devs.shifts, coefficients.workload);
    let weekend = dimension_score(std_devs.weekend, coefficients.weekend);
    let night = dimension_score(std_devs.night, coefficients.night);
    let referral = dimension_score(std_devs.referral, coefficients.referral);
    let premium = dimension_score(std_devs.premium, coefficients.premium);

    let overall = round_one(
        workload * weights.workload
            + weekend * weights.weekend
            + night * weights.night
            + referral * weights.referral
            + premium * weights.premium,
    );

    let coefficients_of_variation = DimensionSummary {
        shifts: coefficient_of_variation(std_devs.shifts, means.shifts),
        hours: coefficient_of_variation(std_devs.hours, means.hours),
        weekend: coefficient_of_variation(std_devs.weekend, means.weekend),
        night: coefficient_of_variation(std_devs.night, means.night),
        referral: coefficient_of_variation(std_devs.referral, means.referral),
        premium: coefficient_of_variation(std_devs.premium, means.premium),
    };

    Some(FairnessScores {
        workload,
        weekend,
        night,
        referral,
        premium,
        overall,
        averages: map_summary(&means, round_one),
        std_devs: map_summary(&std_devs, round_one),
        coefficients_of_variation,
    })
}
