//! Department-wide workload summary.
//!
//! Aggregates per-physician workload into department averages and
//! dispersion, ranks physicians by weighted hours, and scores how evenly
//! weighted hours are spread.

use rust_decimal::Decimal;

use crate::config::defaults::{
    BALANCE_DEVIATION_FACTOR, BALANCE_EXCELLENT_ABOVE, BALANCE_FAIR_ABOVE, BALANCE_GOOD_ABOVE,
    HOURS_STD_DEV_EXCELLENT_BELOW, HOURS_STD_DEV_FAIR_BELOW, HOURS_STD_DEV_GOOD_BELOW,
};
use crate::models::{DepartmentBalance, DepartmentStats, DoctorWorkloadStats, RankedDoctor, Rating};

use super::stats::{mean, mean_absolute_deviation, population_std_dev, round_one, score_from_penalty};

/// Rates the spread of regular hours across physicians.
pub fn hours_balance_rating(std_dev: Decimal) -> Rating {
    if std_dev < HOURS_STD_DEV_EXCELLENT_BELOW {
        Rating::Excellent
    } else if std_dev < HOURS_STD_DEV_GOOD_BELOW {
        Rating::Good
    } else if std_dev < HOURS_STD_DEV_FAIR_BELOW {
        Rating::Fair
    } else {
        Rating::Poor
    }
}

/// Rates a department balance score.
pub fn balance_score_rating(score: Decimal) -> Rating {
    if score > BALANCE_EXCELLENT_ABOVE {
        Rating::Excellent
    } else if score > BALANCE_GOOD_ABOVE {
        Rating::Good
    } else if score > BALANCE_FAIR_ABOVE {
        Rating::Fair
    } else {
        Rating::Poor
    }
}

/// Summarizes the department's workload.
///
/// Returns [`DepartmentStats::empty`] when there are no physicians.
pub fn summarize_department(doctors: &[DoctorWorkloadStats]) -> DepartmentStats {
    if doctors.is_empty() {
        return DepartmentStats::empty();
    }

    let regular: Vec<Decimal> = doctors.iter().map(|d| d.regular_hours).collect();
    let weighted: Vec<Decimal> = doctors.iter().map(|d| d.weighted_hours).collect();
    let duties: Vec<Decimal> = doctors.iter().map(|d| Decimal::from(d.work_days)).collect();
    let std_dev = population_std_dev(&regular);

    DepartmentStats {
        physician_count: doctors.len() as u32,
        total_regular_hours: regular.iter().copied().sum(),
        total_weighted_hours: weighted.iter().copied().sum(),
        total_duties: doctors.iter().map(|d| d.work_days).sum(),
        average_regular_hours: round_one(mean(&regular)),
        average_weighted_hours: round_one(mean(&weighted)),
        average_duties: round_one(mean(&duties)),
        regular_hours_std_dev: round_one(std_dev),
        balance_rating: hours_balance_rating(std_dev),
    }
}

/// Ranks physicians by weighted hours, heaviest first.
///
/// The sort is stable, so physicians with equal weighted hours keep their
/// input order.
pub fn rank_workload(doctors: &[DoctorWorkloadStats]) -> Vec<RankedDoctor> {
    let mut ordered: Vec<&DoctorWorkloadStats> = doctors.iter().collect();
    ordered.sort_by(|a, b| b.weighted_hours.cmp(&a.weighted_hours));

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, doctor)| RankedDoctor {
            rank: index as u32 + 1,
            physician_id: doctor.physician_id.clone(),
            name: doctor.name.clone(),
            weighted_hours: doctor.weighted_hours,
            intensity_level: doctor.intensity_level,
            total_duties: doctor.work_days,
        })
        .collect()
}

/// Scores how tightly weighted hours cluster around the department mean.
///
/// # Example
///
/// ```
/// use roster_analytics::calculation::department_balance;
/// use roster_analytics::models::Rating;
/// use rust_decimal::Decimal;
///
/// let balance = department_balance(&[]);
/// assert_eq!(balance.score, Decimal::ONE_HUNDRED);
/// assert_eq!(balance.rating, Rating::Excellent);
/// ```
pub fn department_balance(doctors: &[DoctorWorkloadStats]) -> DepartmentBalance {
    let weighted: Vec<Decimal> = doctors.iter().map(|d| d.weighted_hours).collect();
    let average_deviation = mean_absolute_deviation(&weighted);
    let score = score_from_penalty(average_deviation * BALANCE_DEVIATION_FACTOR);

    DepartmentBalance {
        score: round_one(score),
        average_deviation: round_one(average_deviation),
        rating: balance_score_rating(score),
    }
}
