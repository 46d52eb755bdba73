//! Named analytic constants.
//!
//! Tunable weights and thresholds seed [`AnalyticsConfig::default`]; rating
//! cut-points are fixed and used directly by the calculation modules.
//!
//! [`AnalyticsConfig::default`]: super::AnalyticsConfig

use rust_decimal::Decimal;

const fn tenths(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 1)
}

const fn hundredths(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 2)
}

const fn whole(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

// ---------------------------------------------------------------------------
// Workload
// ---------------------------------------------------------------------------

/// Length of every shift in hours.
pub const SHIFT_HOURS: u32 = 8;
/// Difficulty weight of a night shift (1.3).
pub const NIGHT_SHIFT_WEIGHT: Decimal = tenths(13);
/// Difficulty weight of a referral duty (1.2).
pub const REFERRAL_DUTY_WEIGHT: Decimal = tenths(12);
/// Consecutive duty days tolerated before the intensity penalty applies.
pub const CONSECUTIVE_DAY_THRESHOLD: u32 = 3;
/// Intensity added per consecutive day beyond the threshold (0.5).
pub const CONSECUTIVE_DAY_PENALTY: Decimal = tenths(5);
/// Night shifts tolerated before the night intensity surcharge applies.
pub const NIGHT_INTENSITY_THRESHOLD: u32 = 8;
/// Intensity added per night shift beyond the threshold (0.3).
pub const NIGHT_INTENSITY_PENALTY: Decimal = tenths(3);

/// Intensity scores from here are Moderate.
pub const INTENSITY_MODERATE_FROM: Decimal = whole(20);
/// Intensity scores from here are High.
pub const INTENSITY_HIGH_FROM: Decimal = whole(30);
/// Intensity scores from here are Very High.
pub const INTENSITY_VERY_HIGH_FROM: Decimal = whole(40);

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

/// Regular-hours standard deviation below this is Excellent.
pub const HOURS_STD_DEV_EXCELLENT_BELOW: Decimal = whole(10);
/// Regular-hours standard deviation below this is Good.
pub const HOURS_STD_DEV_GOOD_BELOW: Decimal = whole(20);
/// Regular-hours standard deviation below this is Fair.
pub const HOURS_STD_DEV_FAIR_BELOW: Decimal = whole(30);

/// Balance points lost per hour of mean absolute deviation.
pub const BALANCE_DEVIATION_FACTOR: Decimal = whole(2);
/// Balance scores above this are Excellent.
pub const BALANCE_EXCELLENT_ABOVE: Decimal = whole(85);
/// Balance scores above this are Good.
pub const BALANCE_GOOD_ABOVE: Decimal = whole(70);
/// Balance scores above this are Fair.
pub const BALANCE_FAIR_ABOVE: Decimal = whole(50);

// ---------------------------------------------------------------------------
// Fairness
// ---------------------------------------------------------------------------

/// Score points lost per unit of shift-count standard deviation.
pub const WORKLOAD_COEFFICIENT: Decimal = whole(5);
/// Score points lost per unit of weekend-duty standard deviation.
pub const WEEKEND_COEFFICIENT: Decimal = whole(10);
/// Score points lost per unit of night-shift standard deviation.
pub const NIGHT_COEFFICIENT: Decimal = whole(8);
/// Score points lost per unit of referral-duty standard deviation.
pub const REFERRAL_COEFFICIENT: Decimal = whole(12);
/// Score points lost per unit of premium-duty standard deviation.
pub const PREMIUM_COEFFICIENT: Decimal = whole(6);

/// Share of the workload score in the overall score.
pub const WORKLOAD_SCORE_WEIGHT: Decimal = hundredths(30);
/// Share of the weekend score in the overall score.
pub const WEEKEND_SCORE_WEIGHT: Decimal = hundredths(20);
/// Share of the night score in the overall score.
pub const NIGHT_SCORE_WEIGHT: Decimal = hundredths(20);
/// Share of the referral score in the overall score.
pub const REFERRAL_SCORE_WEIGHT: Decimal = hundredths(15);
/// Share of the premium score in the overall score.
pub const PREMIUM_SCORE_WEIGHT: Decimal = hundredths(15);

/// Overall scores from here are Excellent.
pub const OVERALL_EXCELLENT_FROM: Decimal = whole(85);
/// Overall scores from here are Good.
pub const OVERALL_GOOD_FROM: Decimal = whole(70);
/// Overall scores from here are Fair.
pub const OVERALL_FAIR_FROM: Decimal = whole(55);

// ---------------------------------------------------------------------------
// Rotation and opportunity
// ---------------------------------------------------------------------------

/// Rotation scores from here are Excellent.
pub const ROTATION_EXCELLENT_FROM: Decimal = whole(75);
/// Rotation scores from here are Good.
pub const ROTATION_GOOD_FROM: Decimal = whole(50);
/// Rotation scores from here are Fair.
pub const ROTATION_FAIR_FROM: Decimal = whole(25);

/// Fewer ordinary shifts than this flags a light workload.
pub const LIGHT_WORKLOAD_SHIFTS: u32 = 12;
/// More ordinary shifts than this flags a heavy workload.
pub const HEAVY_WORKLOAD_SHIFTS: u32 = 20;

// ---------------------------------------------------------------------------
// Recommendations and alerts
// ---------------------------------------------------------------------------

/// Workload score below which redistribution is considered.
pub const WORKLOAD_SCORE_FLOOR: Decimal = whole(70);
/// Shifts above or below the mean that mark a physician for redistribution.
pub const WORKLOAD_SHIFT_MARGIN: Decimal = whole(3);
/// Night score below which night balancing is considered.
pub const NIGHT_SCORE_FLOOR: Decimal = whole(60);
/// Night shifts above the mean that mark a physician as over-assigned.
pub const NIGHT_EXCESS_MARGIN: Decimal = whole(2);
/// Night shifts below the mean that mark a physician as under-assigned.
pub const NIGHT_DEFICIT_MARGIN: Decimal = whole(1);
/// Weekend score below which weekend rotation is recommended.
pub const WEEKEND_SCORE_FLOOR: Decimal = whole(65);
/// Referral score below which referral balancing is considered.
pub const REFERRAL_SCORE_FLOOR: Decimal = whole(70);
/// Referral duties above the mean that mark a physician as over-assigned.
pub const REFERRAL_EXCESS_MARGIN: Decimal = whole(1);

/// Workload score below which a critical alert is raised.
pub const CRITICAL_WORKLOAD_SCORE: Decimal = whole(50);
/// Night-shift range across physicians above which a warning is raised.
pub const NIGHT_RANGE_LIMIT: u32 = 5;
/// Weekend duties above which a physician is flagged as overburdened.
pub const WEEKEND_BURDEN_LIMIT: u32 = 6;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fractional_constants() {
        assert_eq!(NIGHT_SHIFT_WEIGHT, dec("1.3"));
        assert_eq!(REFERRAL_DUTY_WEIGHT, dec("1.2"));
        assert_eq!(CONSECUTIVE_DAY_PENALTY, dec("0.5"));
        assert_eq!(NIGHT_INTENSITY_PENALTY, dec("0.3"));
        assert_eq!(WORKLOAD_SCORE_WEIGHT, dec("0.30"));
        assert_eq!(REFERRAL_SCORE_WEIGHT, dec("0.15"));
    }

    #[test]
    fn test_dimension_weights_sum_to_one() {
        let total = WORKLOAD_SCORE_WEIGHT
            + WEEKEND_SCORE_WEIGHT
            + NIGHT_SCORE_WEIGHT
            + REFERRAL_SCORE_WEIGHT
            + PREMIUM_SCORE_WEIGHT;
        assert_eq!(total, Decimal::ONE);
    }

    #[test]
    fn test_whole_constants() {
        assert_eq!(WORKLOAD_COEFFICIENT, dec("5"));
        assert_eq!(REFERRAL_COEFFICIENT, dec("12"));
        assert_eq!(OVERALL_FAIR_FROM, dec("55"));
    }
}
