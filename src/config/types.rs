//! Configuration types for roster analysis.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files in a configuration directory. Every
//! type defaults to the constants in [`super::defaults`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

use super::defaults::*;

/// Difficulty multipliers applied to weighted hours and intensity.
///
/// Morning and evening shifts always carry weight 1.0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyWeights {
    /// Weight of a night shift.
    pub night: Decimal,
    /// Weight of a referral duty.
    pub referral: Decimal,
}

impl Default for DifficultyWeights {
    fn default() -> Self {
        Self {
            night: NIGHT_SHIFT_WEIGHT,
            referral: REFERRAL_DUTY_WEIGHT,
        }
    }
}

/// Surcharges added on top of the weighted duty count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityConfig {
    /// Consecutive days tolerated before the streak penalty.
    pub consecutive_day_threshold: u32,
    /// Penalty per consecutive day beyond the threshold.
    pub consecutive_day_penalty: Decimal,
    /// Night shifts tolerated before the night surcharge.
    pub night_shift_threshold: u32,
    /// Surcharge per night shift beyond the threshold.
    pub night_shift_penalty: Decimal,
}

impl Default for IntensityConfig {
    fn default() -> Self {
        Self {
            consecutive_day_threshold: CONSECUTIVE_DAY_THRESHOLD,
            consecutive_day_penalty: CONSECUTIVE_DAY_PENALTY,
            night_shift_threshold: NIGHT_INTENSITY_THRESHOLD,
            night_shift_penalty: NIGHT_INTENSITY_PENALTY,
        }
    }
}

/// Workload configuration from workload.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Length of every shift in hours.
    pub shift_hours: u32,
    /// Difficulty weights.
    pub weights: DifficultyWeights,
    /// Intensity surcharges.
    pub intensity: IntensityConfig,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            shift_hours: SHIFT_HOURS,
            weights: DifficultyWeights::default(),
            intensity: IntensityConfig::default(),
        }
    }
}

/// One factor per fairness dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionFactors {
    /// Workload (shift count) dimension.
    pub workload: Decimal,
    /// Weekend dimension.
    pub weekend: Decimal,
    /// Night dimension.
    pub night: Decimal,
    /// Referral dimension.
    pub referral: Decimal,
    /// Premium dimension.
    pub premium: Decimal,
}

impl DimensionFactors {
    /// Default standard-deviation coefficients.
    pub fn default_coefficients() -> Self {
        Self {
            workload: WORKLOAD_COEFFICIENT,
            weekend: WEEKEND_COEFFICIENT,
            night: NIGHT_COEFFICIENT,
            referral: REFERRAL_COEFFICIENT,
            premium: PREMIUM_COEFFICIENT,
        }
    }

    /// Default overall-score weights.
    pub fn default_weights() -> Self {
        Self {
            workload: WORKLOAD_SCORE_WEIGHT,
            weekend: WEEKEND_SCORE_WEIGHT,
            night: NIGHT_SCORE_WEIGHT,
            referral: REFERRAL_SCORE_WEIGHT,
            premium: PREMIUM_SCORE_WEIGHT,
        }
    }

    /// Sum of the five factors.
    pub fn total(&self) -> Decimal {
        self.workload + self.weekend + self.night + self.referral + self.premium
    }

    /// Returns the first dimension holding a negative factor.
    pub fn first_negative(&self) -> Option<&'static str> {
        [
            ("workload", self.workload),
            ("weekend", self.weekend),
            ("night", self.night),
            ("referral", self.referral),
            ("premium", self.premium),
        ]
        .into_iter()
        .find(|(_, value)| value.is_sign_negative() && !value.is_zero())
        .map(|(name, _)| name)
    }
}

/// Shift counts that flag light and heavy months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityConfig {
    /// Fewer shifts than this is a light workload.
    pub light_workload_shifts: u32,
    /// More shifts than this is a heavy workload.
    pub heavy_workload_shifts: u32,
}

impl Default for OpportunityConfig {
    fn default() -> Self {
        Self {
            light_workload_shifts: LIGHT_WORKLOAD_SHIFTS,
            heavy_workload_shifts: HEAVY_WORKLOAD_SHIFTS,
        }
    }
}

/// Fairness configuration from fairness.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessConfig {
    /// Score points lost per unit of standard deviation.
    pub coefficients: DimensionFactors,
    /// Weights of the dimension scores in the overall score.
    pub dimension_weights: DimensionFactors,
    /// Light/heavy workload flags.
    pub opportunity: OpportunityConfig,
}

impl Default for FairnessConfig {
    fn default() -> Self {
        Self {
            coefficients: DimensionFactors::default_coefficients(),
            dimension_weights: DimensionFactors::default_weights(),
            opportunity: OpportunityConfig::default(),
        }
    }
}

/// Conditions under which recommendations are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Workload score below which redistribution is considered.
    pub workload_score_floor: Decimal,
    /// Distance from the mean shift count that marks a physician.
    pub workload_shift_margin: Decimal,
    /// Night score below which night balancing is considered.
    pub night_score_floor: Decimal,
    /// Night shifts above the mean that mark over-assignment.
    pub night_excess_margin: Decimal,
    /// Night shifts below the mean that mark under-assignment.
    pub night_deficit_margin: Decimal,
    /// Weekend score below which rotation is recommended.
    pub weekend_score_floor: Decimal,
    /// Referral score below which referral balancing is considered.
    pub referral_score_floor: Decimal,
    /// Referral duties above the mean that mark over-assignment.
    pub referral_excess_margin: Decimal,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            workload_score_floor: WORKLOAD_SCORE_FLOOR,
            workload_shift_margin: WORKLOAD_SHIFT_MARGIN,
            night_score_floor: NIGHT_SCORE_FLOOR,
            night_excess_margin: NIGHT_EXCESS_MARGIN,
            night_deficit_margin: NIGHT_DEFICIT_MARGIN,
            weekend_score_floor: WEEKEND_SCORE_FLOOR,
            referral_score_floor: REFERRAL_SCORE_FLOOR,
            referral_excess_margin: REFERRAL_EXCESS_MARGIN,
        }
    }
}

/// Conditions under which inequity alerts are raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Workload score below which a critical alert is raised.
    pub critical_workload_score: Decimal,
    /// Night-shift range above which a warning is raised.
    pub night_range_limit: u32,
    /// Weekend duties above which a warning is raised.
    pub weekend_burden_limit: u32,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            critical_workload_score: CRITICAL_WORKLOAD_SCORE,
            night_range_limit: NIGHT_RANGE_LIMIT,
            weekend_burden_limit: WEEKEND_BURDEN_LIMIT,
        }
    }
}

/// Threshold configuration from thresholds.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Recommendation rules.
    pub recommendations: RecommendationThresholds,
    /// Alert rules.
    pub alerts: AlertThresholds,
}

/// The complete analytics configuration.
///
/// # Example
///
/// ```
/// use roster_analytics::config::AnalyticsConfig;
///
/// let config = AnalyticsConfig::default();
/// assert_eq!(config.workload.shift_hours, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Workload aggregation settings.
    pub workload: WorkloadConfig,
    /// Fairness scoring settings.
    pub fairness: FairnessConfig,
    /// Recommendation and alert thresholds.
    pub thresholds: ThresholdConfig,
}

impl AnalyticsConfig {
    /// Checks that the configuration can drive the analyses.
    ///
    /// Shift hours must be positive, weights and coefficients must not be
    /// negative, and the dimension weights must sum to exactly 1.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.workload.shift_hours == 0 {
            return Err(invalid("workload.shift_hours", "must be greater than zero"));
        }

        let weights = &self.workload.weights;
        if weights.night.is_sign_negative() || weights.referral.is_sign_negative() {
            return Err(invalid("workload.weights", "must not be negative"));
        }

        if let Some(dimension) = self.fairness.coefficients.first_negative() {
            return Err(invalid(
                &format!("fairness.coefficients.{}", dimension),
                "must not be negative",
            ));
        }

        if let Some(dimension) = self.fairness.dimension_weights.first_negative() {
            return Err(invalid(
                &format!("fairness.dimension_weights.{}", dimension),
                "must not be negative",
            ));
        }

        let total = self.fairness.dimension_weights.total();
        if total != Decimal::ONE {
            return Err(invalid(
                "fairness.dimension_weights",
                &format!("must sum to 1, got {}", total.normalize()),
            ));
        }

        let opportunity = &self.fairness.opportunity;
        if opportunity.light_workload_shifts > opportunity.heavy_workload_shifts {
            return Err(invalid(
                "fairness.opportunity",
                "light_workload_shifts must not exceed heavy_workload_shifts",
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> AnalyticsError {
    AnalyticsError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}
