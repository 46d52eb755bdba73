//! Scheduling recommendations and the overall fairness rating.
//!
//! A fixed rule set over the fairness scores and per-physician counts.
//! Physician comparisons use the unrounded department means; the score
//! floors apply to the reported (one decimal) dimension scores.

use rust_decimal::Decimal;

use crate::config::RecommendationThresholds;
use crate::config::defaults::{OVERALL_EXCELLENT_FROM, OVERALL_FAIR_FROM, OVERALL_GOOD_FROM};
use crate::models::{
    DoctorFairnessStats, FairnessRating, FairnessScores, Priority, Rating, Recommendation,
    RecommendationKind,
};

use super::fairness::dimension_means;
use super::stats::round_one;

/// Names of the physicians matching `predicate`, in input order.
pub(crate) fn names_where(
    stats: &[DoctorFairnessStats],
    predicate: impl Fn(&DoctorFairnessStats) -> bool,
) -> Vec<String> {
    stats
        .iter()
        .filter(|s| predicate(s))
        .map(|s| s.name.clone())
        .collect()
}

/// Generates recommendations in fixed order: workload, night, weekend,
/// referral.
pub fn generate_recommendations(
    scores: &FairnessScores,
    stats: &[DoctorFairnessStats],
    thresholds: &RecommendationThresholds,
) -> Vec<Recommendation> {
    if stats.is_empty() {
        return Vec::new();
    }

    let means = dimension_means(stats);
    let mut recommendations = Vec::new();

    if scores.workload < thresholds.workload_score_floor {
        let upper = means.shifts + thresholds.workload_shift_margin;
        let lower = means.shifts - thresholds.workload_shift_margin;
        let over = names_where(stats, |s| Decimal::from(s.totals.shifts) > upper);
        let under = names_where(stats, |s| Decimal::from(s.totals.shifts) < lower);

        if !over.is_empty() && !under.is_empty() {
            recommendations.push(Recommendation {
                kind: RecommendationKind::WorkloadRedistribution,
                priority: Priority::High,
                title: "Redistribute workload".to_string(),
                description: format!(
                    "Move shifts from {} to {}; the department average is {} shifts",
                    over.join(", "),
                    under.join(", "),
                    round_one(means.shifts)
                ),
                impact: "Evens out shift counts and raises the workload fairness score"
                    .to_string(),
            });
        }
    }

    if scores.night < thresholds.night_score_floor {
        let upper = means.night + thresholds.night_excess_margin;
        let lower = means.night - thresholds.night_deficit_margin;
        let over = names_where(stats, |s| Decimal::from(s.shifts.night) > upper);
        let under = names_where(stats, |s| Decimal::from(s.shifts.night) < lower);

        if !over.is_empty() {
            let mut description = format!(
                "{} carry more night shifts than the department average of {}",
                over.join(", "),
                round_one(means.night)
            );
            if !under.is_empty() {
                description.push_str(&format!("; {} can take more", under.join(", ")));
            }
            recommendations.push(Recommendation {
                kind: RecommendationKind::NightShiftBalance,
                priority: Priority::Medium,
                title: "Balance night shifts".to_string(),
                description,
                impact: "Reduces fatigue concentrated on a few physicians".to_string(),
            });
        }
    }

    if scores.weekend < thresholds.weekend_score_floor {
        recommendations.push(Recommendation {
            kind: RecommendationKind::WeekendRotation,
            priority: Priority::Medium,
            title: "Improve weekend rotation".to_string(),
            description: format!(
                "Weekend duties vary by {} around an average of {}; rotate weekend coverage",
                scores.std_devs.weekend,
                round_one(means.weekend)
            ),
            impact: "Shares weekend time off more evenly".to_string(),
        });
    }

    if scores.referral < thresholds.referral_score_floor {
        let upper = means.referral + thresholds.referral_excess_margin;
        let over = names_where(stats, |s| Decimal::from(s.shifts.referral) > upper);

        if !over.is_empty() {
            recommendations.push(Recommendation {
                kind: RecommendationKind::ReferralBalance,
                priority: Priority::Low,
                title: "Balance referral duties".to_string(),
                description: format!(
                    "{} hold more referral duties than the department average of {}",
                    over.join(", "),
                    round_one(means.referral)
                ),
                impact: "Spreads referral experience across the team".to_string(),
            });
        }
    }

    recommendations
}

/// Labels an overall fairness score.
///
/// # Example
///
/// ```
/// use roster_analytics::calculation::overall_fairness_rating;
/// use roster_analytics::models::Rating;
/// use rust_decimal::Decimal;
///
/// assert_eq!(overall_fairness_rating(Decimal::from(70)).level, Rating::Good);
/// ```
pub fn overall_fairness_rating(score: Decimal) -> FairnessRating {
    let (level, description) = if score >= OVERALL_EXCELLENT_FROM {
        (Rating::Excellent, "Duties are shared very evenly across physicians")
    } else if score >= OVERALL_GOOD_FROM {
        (Rating::Good, "Duties are shared fairly with minor imbalances")
    } else if score >= OVERALL_FAIR_FROM {
        (Rating::Fair, "Noticeable imbalances in duty distribution need attention")
    } else {
        (Rating::Poor, "Significant inequities in duty distribution require action")
    };

    FairnessRating {
        level,
        score,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DimensionSummary, DutyPercentages, DutyTotals, ShiftTally};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn doctor(id: &str, shifts: u32, night: u32, referral: u32, weekend: u32) -> DoctorFairnessStats {
        DoctorFairnessStats {
            physician_id: id.to_string(),
            name: format!("Dr. {}", id),
            shifts: ShiftTally {
                morning: shifts - night,
                evening: 0,
                night,
                referral,
            },
            totals: DutyTotals {
                shifts,
                hours: shifts * 8,
                duties: shifts + referral,
                weekend,
                holiday: weekend,
                premium: night + referral,
            },
            percentages: DutyPercentages {
                workload: Decimal::ZERO,
                weekend: Decimal::ZERO,
                night: Decimal::ZERO,
                referral: Decimal::ZERO,
                morning: Decimal::ZERO,
                evening: Decimal::ZERO,
            },
        }
    }

    fn scores(workload: &str, weekend: &str, night: &str, referral: &str) -> FairnessScores {
        FairnessScores {
            workload: dec(workload),
            weekend: dec(weekend),
            night: dec(night),
            referral: dec(referral),
            premium: dec("100"),
            overall: dec("80"),
            averages: DimensionSummary::default(),
            std_devs: DimensionSummary::default(),
            coefficients_of_variation: DimensionSummary::default(),
        }
    }

    fn thresholds() -> RecommendationThresholds {
        RecommendationThresholds::default()
    }

    #[test]
    fn test_workload_redistribution_fires_with_both_groups() {
        // average 16; 20 > 19 and 12 < 13
        let stats = vec![doctor("a", 20, 0, 0, 0), doctor("b", 12, 0, 0, 0), doctor("c", 16, 0, 0, 0)];

        let recommendations = generate_recommendations(&scores("65", "100", "100", "100"), &stats, &thresholds());

        assert_eq!(recommendations.len(), 1);
        let recommendation = &recommendations[0];
        assert_eq!(recommendation.kind, RecommendationKind::WorkloadRedistribution);
        assert_eq!(recommendation.priority, Priority::High);
        assert!(recommendation.description.contains("Dr. a"));
        assert!(recommendation.description.contains("Dr. b"));
        assert!(!recommendation.description.contains("Dr. c"));
    }

    #[test]
    fn test_workload_redistribution_needs_an_underloaded_physician() {
        // average 18; 22 > 21 but nobody below 15
        let stats = vec![doctor("a", 22, 0, 0, 0), doctor("b", 16, 0, 0, 0), doctor("c", 16, 0, 0, 0)];
        let recommendations = generate_recommendations(&scores("65", "100", "100", "100"), &stats, &thresholds());
        assert!(recommendations.is_empty());
    }

    #[test]
    fn test_workload_redistribution_needs_low_score() {
        let stats = vec![doctor("a", 20, 0, 0, 0), doctor("b", 12, 0, 0, 0)];
        let recommendations = generate_recommendations(&scores("70", "100", "100", "100"), &stats, &thresholds());
        assert!(recommendations.is_empty());
    }

    #[test]
    fn test_night_balance_names_over_and_under() {
        // night average 4; 8 > 6, 1 < 3
        let stats = vec![doctor("a", 16, 8, 0, 0), doctor("b", 16, 1, 0, 0), doctor("c", 16, 3, 0, 0)];

        let recommendations = generate_recommendations(&scores("100", "100", "55", "100"), &stats, &thresholds());

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].kind, RecommendationKind::NightShiftBalance);
        assert_eq!(recommendations[0].priority, Priority::Medium);
        assert!(recommendations[0].description.starts_with("Dr. a carry"));
        assert!(recommendations[0].description.contains("Dr. b can take more"));
    }

    #[test]
    fn test_weekend_rotation_is_unconditional_below_floor() {
        let stats = vec![doctor("a", 16, 0, 0, 2), doctor("b", 16, 0, 0, 2)];
        let recommendations = generate_recommendations(&scores("100", "64.9", "100", "100"), &stats, &thresholds());
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].kind, RecommendationKind::WeekendRotation);
    }

    #[test]
    fn test_referral_balance_low_priority() {
        // referral average 2; 5 > 3
        let stats = vec![doctor("a", 16, 0, 5, 0), doctor("b", 16, 0, 1, 0), doctor("c", 16, 0, 0, 0)];
        let recommendations = generate_recommendations(&scores("100", "100", "100", "60"), &stats, &thresholds());
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].kind, RecommendationKind::ReferralBalance);
        assert_eq!(recommendations[0].priority, Priority::Low);
        assert!(recommendations[0].description.contains("Dr. a"));
    }

    #[test]
    fn test_fixed_rule_order() {
        let stats = vec![doctor("a", 24, 10, 6, 8), doctor("b", 8, 0, 0, 0), doctor("c", 16, 2, 0, 1)];
        let recommendations = generate_recommendations(&scores("10", "10", "10", "10"), &stats, &thresholds());
        let kinds: Vec<RecommendationKind> = recommendations.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RecommendationKind::WorkloadRedistribution,
                RecommendationKind::NightShiftBalance,
                RecommendationKind::WeekendRotation,
                RecommendationKind::ReferralBalance,
            ]
        );
    }

    #[test]
    fn test_overall_rating_bands() {
        assert_eq!(overall_fairness_rating(dec("85")).level, Rating::Excellent);
        assert_eq!(overall_fairness_rating(dec("84.9")).level, Rating::Good);
        assert_eq!(overall_fairness_rating(dec("55")).level, Rating::Fair);
        assert_eq!(overall_fairness_rating(dec("54.9")).level, Rating::Poor);
        assert_eq!(overall_fairness_rating(dec("54.9")).score, dec("54.9"));
        assert!(!overall_fairness_rating(dec("0")).description.is_empty());
    }
}
