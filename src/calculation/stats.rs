//! Descriptive statistics and rounding helpers.
//!
//! All analyses report values rounded half away from zero; comparisons
//! against thresholds use the unrounded values.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

/// Rounds to one decimal place, half away from zero.
///
/// # Example
///
/// ```
/// use roster_analytics::calculation::round_one;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_one(Decimal::from_str("2.45").unwrap()), Decimal::from_str("2.5").unwrap());
/// ```
pub fn round_one(value: Decimal) -> Decimal {
    round_to(value, 1)
}

/// Rounds to `places` decimal places, half away from zero.
pub fn round_to(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Arithmetic mean; zero for an empty slice.
pub fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    values.iter().copied().sum::<Decimal>() / Decimal::from(values.len())
}

/// Population standard deviation (divides by N); zero for an empty slice.
pub fn population_std_dev(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let average = mean(values);
    let variance = values
        .iter()
        .map(|value| {
            let deviation = *value - average;
            deviation * deviation
        })
        .sum::<Decimal>()
        / Decimal::from(values.len());
    variance.sqrt().unwrap_or(Decimal::ZERO)
}

/// Mean absolute deviation from the mean; zero for an empty slice.
pub fn mean_absolute_deviation(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let average = mean(values);
    values
        .iter()
        .map(|value| (*value - average).abs())
        .sum::<Decimal>()
        / Decimal::from(values.len())
}

/// `part / max(whole, 1) * 100`, one decimal.
pub fn percentage(part: u32, whole: u32) -> Decimal {
    let denominator = Decimal::from(whole.max(1));
    round_one(Decimal::from(part) / denominator * Decimal::ONE_HUNDRED)
}

/// `100 - penalty`, floored at zero.
pub fn score_from_penalty(penalty: Decimal) -> Decimal {
    (Decimal::ONE_HUNDRED - penalty).max(Decimal::ZERO)
}
