//! Workload analysis models.
//!
//! These are the outputs of the workload branch: per-physician
//! [`DoctorWorkloadStats`], the department-wide [`DepartmentStats`], the
//! weighted-hours ranking and the department balance score, assembled into a
//! [`WorkloadAnalysis`] for one month.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Rating;

/// Counts of each duty category for one physician in one month.
///
/// # Example
///
/// ```
/// use roster_analytics::models::ShiftTally;
///
/// let tally = ShiftTally { morning: 5, evening: 4, night: 3, referral: 2 };
/// assert_eq!(tally.shifts(), 12);
/// assert_eq!(tally.total_duties(), 14);
/// assert_eq!(tally.premium(), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTally {
    /// Ordinary morning shifts.
    pub morning: u32,
    /// Ordinary evening shifts.
    pub evening: u32,
    /// Ordinary night shifts.
    pub night: u32,
    /// Referral duties of any nominal shift.
    pub referral: u32,
}

impl ShiftTally {
    /// Ordinary shifts (morning + evening + night).
    pub fn shifts(&self) -> u32 {
        self.morning + self.evening + self.night
    }

    /// All duties including referral.
    pub fn total_duties(&self) -> u32 {
        self.shifts() + self.referral
    }

    /// Premium duties (night + referral).
    pub fn premium(&self) -> u32 {
        self.night + self.referral
    }
}

/// Consecutive-duty streak statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakStats {
    /// Longest run of consecutive duty days, including single days.
    pub max_consecutive: u32,
    /// Number of runs of two or more consecutive days.
    pub total_streaks: u32,
    /// Lengths of those runs, in date order.
    pub streak_lengths: Vec<u32>,
    /// Mean of `streak_lengths`, one decimal.
    pub average_streak_length: Decimal,
}

/// Weekend duty counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendDuties {
    /// Duties on Saturdays.
    pub saturday: u32,
    /// Duties on Sundays.
    pub sunday: u32,
    /// Saturday plus Sunday duties.
    pub total: u32,
}

/// Qualitative band of a physician's intensity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    /// Score below 20.
    Low,
    /// Score below 30.
    Moderate,
    /// Score below 40.
    High,
    /// Score of 40 or more.
    VeryHigh,
}

impl std::fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntensityLevel::Low => write!(f, "Low"),
            IntensityLevel::Moderate => write!(f, "Moderate"),
            IntensityLevel::High => write!(f, "High"),
            IntensityLevel::VeryHigh => write!(f, "Very High"),
        }
    }
}

/// Workload statistics for one physician in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorWorkloadStats {
    /// The physician's identifier.
    pub physician_id: String,
    /// The physician's display name.
    pub name: String,
    /// Duty category counts.
    pub shifts: ShiftTally,
    /// Unweighted hours of ordinary shifts.
    pub regular_hours: Decimal,
    /// Hours with night and referral difficulty weights applied.
    pub weighted_hours: Decimal,
    /// Regular hours divided by days in the month, one decimal.
    pub average_hours_per_day: Decimal,
    /// Days with a duty (sum of all tallies).
    pub work_days: u32,
    /// Days in the month without a duty.
    pub off_days: u32,
    /// Work days as a percentage of the month, one decimal.
    pub work_percentage: Decimal,
    /// Consecutive-duty statistics.
    pub streaks: StreakStats,
    /// Weekend duty counts.
    pub weekend: WeekendDuties,
    /// Composite intensity score, one decimal.
    pub intensity_score: Decimal,
    /// Band of the intensity score.
    pub intensity_level: IntensityLevel,
}

/// Department-wide aggregates of the workload statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStats {
    /// Number of physicians analysed.
    pub physician_count: u32,
    /// Sum of regular hours.
    pub total_regular_hours: Decimal,
    /// Sum of weighted hours.
    pub total_weighted_hours: Decimal,
    /// Sum of duties.
    pub total_duties: u32,
    /// Mean regular hours, one decimal.
    pub average_regular_hours: Decimal,
    /// Mean weighted hours, one decimal.
    pub average_weighted_hours: Decimal,
    /// Mean duties, one decimal.
    pub average_duties: Decimal,
    /// Population standard deviation of regular hours, one decimal.
    pub regular_hours_std_dev: Decimal,
    /// Rating derived from the standard deviation.
    pub balance_rating: Rating,
}

impl DepartmentStats {
    /// Stats for a department with no physicians.
    pub fn empty() -> Self {
        Self {
            physician_count: 0,
            total_regular_hours: Decimal::ZERO,
            total_weighted_hours: Decimal::ZERO,
            total_duties: 0,
            average_regular_hours: Decimal::ZERO,
            average_weighted_hours: Decimal::ZERO,
            average_duties: Decimal::ZERO,
            regular_hours_std_dev: Decimal::ZERO,
            balance_rating: Rating::Excellent,
        }
    }
}

/// One row of the weighted-hours ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDoctor {
    /// 1-based rank, heaviest workload first.
    pub rank: u32,
    /// The physician's identifier.
    pub physician_id: String,
    /// The physician's display name.
    pub name: String,
    /// Weighted hours for the month.
    pub weighted_hours: Decimal,
    /// Intensity band.
    pub intensity_level: IntensityLevel,
    /// Total duties for the month.
    pub total_duties: u32,
}

/// How tightly weighted hours cluster around the department mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentBalance {
    /// Score in [0, 100], one decimal.
    pub score: Decimal,
    /// Mean absolute deviation of weighted hours, one decimal.
    pub average_deviation: Decimal,
    /// Rating derived from the score.
    pub rating: Rating,
}

/// The complete workload analysis for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadAnalysis {
    /// Calendar year analysed.
    pub year: i32,
    /// Month analysed (1-12).
    pub month: u32,
    /// Days in the analysed month.
    pub days_in_month: u32,
    /// Per-physician statistics keyed by physician id.
    pub doctor_analysis: BTreeMap<String, DoctorWorkloadStats>,
    /// Department aggregates.
    pub department_stats: DepartmentStats,
    /// Physicians ranked by weighted hours.
    pub workload_ranking: Vec<RankedDoctor>,
    /// Department balance score.
    pub balance_score: DepartmentBalance,
}
