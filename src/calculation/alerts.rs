//! Inequity alerts.

use crate::config::AlertThresholds;
use crate::models::{AlertKind, AlertLevel, DoctorFairnessStats, FairnessScores, InequityAlert};

use super::recommendations::names_where;

/// Detects inequities severe enough to alert on.
///
/// Alerts are emitted in fixed order: workload imbalance, night
/// concentration, weekend burden.
pub fn detect_inequities(
    scores: &FairnessScores,
    stats: &[DoctorFairnessStats],
    thresholds: &AlertThresholds,
) -> Vec<InequityAlert> {
    let mut alerts = Vec::new();

    if scores.workload < thresholds.critical_workload_score {
        alerts.push(InequityAlert {
            level: AlertLevel::Critical,
            kind: AlertKind::WorkloadImbalance,
            message: format!(
                "Workload fairness score is critically low at {}",
                scores.workload
            ),
            action: "Redistribute shifts before publishing the roster".to_string(),
        });
    }

    let nights = stats.iter().map(|s| s.shifts.night);
    if let (Some(max_night), Some(min_night)) = (nights.clone().max(), nights.min()) {
        let range = max_night - min_night;
        if range > thresholds.night_range_limit {
            alerts.push(InequityAlert {
                level: AlertLevel::Warning,
                kind: AlertKind::NightConcentration,
                message: format!(
                    "Night shifts range from {} to {} per physician (spread of {})",
                    min_night, max_night, range
                ),
                action: "Spread night shifts across more physicians".to_string(),
            });
        }
    }

    if let Some(max_weekend) = stats.iter().map(|s| s.totals.weekend).max() {
        if max_weekend > thresholds.weekend_burden_limit {
            let burdened = names_where(stats, |s| s.totals.weekend == max_weekend);
            alerts.push(InequityAlert {
                level: AlertLevel::Warning,
                kind: AlertKind::WeekendBurden,
                message: format!(
                    "{} worked {} weekend duties this month",
                    burdened.join(", "),
                    max_weekend
                ),
                action: "Rotate weekend coverage to other physicians".to_string(),
            });
        }
    }

    alerts
}
