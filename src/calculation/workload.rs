//! Per-physician workload aggregation.
//!
//! Converts one physician's assignments for a month into shift tallies,
//! regular and difficulty-weighted hours, streak statistics, weekend counts
//! and a composite intensity score.

use rust_decimal::Decimal;

use crate::config::WorkloadConfig;
use crate::config::defaults::{
    INTENSITY_HIGH_FROM, INTENSITY_MODERATE_FROM, INTENSITY_VERY_HIGH_FROM,
};
use crate::models::{
    DoctorWorkloadStats, IntensityLevel, Physician, RosterMonth, ShiftAssignment, ShiftTally,
};

use super::stats::{percentage, round_one};
use super::streaks::analyze_streaks;
use super::tally::{count_weekend_duties, tally_shifts};

/// Unweighted hours of ordinary shifts. Referral duties are not included.
pub fn regular_hours(tally: &ShiftTally, config: &WorkloadConfig) -> Decimal {
    Decimal::from(tally.shifts() * config.shift_hours)
}

/// Hours with night and referral difficulty weights applied.
///
/// # Example
///
/// ```
/// use roster_analytics::calculation::weighted_hours;
/// use roster_analytics::config::WorkloadConfig;
/// use roster_analytics::models::ShiftTally;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tally = ShiftTally { morning: 1, evening: 1, night: 1, referral: 1 };
/// // 16 + 8 * 1.3 + 8 * 1.2 = 36.0
/// assert_eq!(
///     weighted_hours(&tally, &WorkloadConfig::default()),
///     Decimal::from_str("36.0").unwrap()
/// );
/// ```
pub fn weighted_hours(tally: &ShiftTally, config: &WorkloadConfig) -> Decimal {
    let shift_hours = Decimal::from(config.shift_hours);
    let weights = &config.weights;

    Decimal::from(tally.morning + tally.evening) * shift_hours
        + Decimal::from(tally.night) * shift_hours * weights.night
        + Decimal::from(tally.referral) * shift_hours * weights.referral
}

/// Composite intensity score before rounding.
///
/// The weighted duty count plus a penalty for long consecutive runs and a
/// surcharge for heavy night loads.
pub fn intensity_score(tally: &ShiftTally, max_consecutive: u32, config: &WorkloadConfig) -> Decimal {
    let weights = &config.weights;
    let intensity = &config.intensity;

    let base = Decimal::from(tally.morning + tally.evening)
        + Decimal::from(tally.night) * weights.night
        + Decimal::from(tally.referral) * weights.referral;

    let consecutive_penalty = if max_consecutive > intensity.consecutive_day_threshold {
        Decimal::from(max_consecutive - intensity.consecutive_day_threshold)
            * intensity.consecutive_day_penalty
    } else {
        Decimal::ZERO
    };

    let night_intensity = if tally.night > intensity.night_shift_threshold {
        Decimal::from(tally.night - intensity.night_shift_threshold)
            * intensity.night_shift_penalty
    } else {
        Decimal::ZERO
    };

    base + consecutive_penalty + night_intensity
}

impl IntensityLevel {
    /// Classifies an intensity score.
    pub fn from_score(score: Decimal) -> Self {
        if score < INTENSITY_MODERATE_FROM {
            IntensityLevel::Low
        } else if score < INTENSITY_HIGH_FROM {
            IntensityLevel::Moderate
        } else if score < INTENSITY_VERY_HIGH_FROM {
            IntensityLevel::High
        } else {
            IntensityLevel::VeryHigh
        }
    }
}

/// Aggregates one physician's assignments for the month.
///
/// A physician with no assignments yields all-zero statistics, a fully
/// off month and a Low intensity level.
pub fn aggregate_workload(
    physician: &Physician,
    assignments: &[&ShiftAssignment],
    period: RosterMonth,
    config: &WorkloadConfig,
) -> DoctorWorkloadStats {
    let days_in_month = period.days_in_month();
    let tally = tally_shifts(assignments);
    let streaks = analyze_streaks(assignments);
    let weekend = count_weekend_duties(assignments);

    let regular = regular_hours(&tally, config);
    let work_days = tally.total_duties();
    let intensity = intensity_score(&tally, streaks.max_consecutive, config);

    DoctorWorkloadStats {
        physician_id: physician.id.clone(),
        name: physician.name.clone(),
        shifts: tally,
        regular_hours: regular,
        weighted_hours: round_one(weighted_hours(&tally, config)),
        average_hours_per_day: round_one(regular / Decimal::from(days_in_month.max(1))),
        work_days,
        off_days: days_in_month.saturating_sub(work_days),
        work_percentage: percentage(work_days, days_in_month),
        streaks,
        weekend,
        intensity_score: round_one(intensity),
        intensity_level: IntensityLevel::from_score(intensity),
    }
}
