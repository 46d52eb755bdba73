//! Shift rotation quality.

use rust_decimal::Decimal;

use crate::config::defaults::{ROTATION_EXCELLENT_FROM, ROTATION_FAIR_FROM, ROTATION_GOOD_FROM};
use crate::models::{Rating, RotationPattern, ShiftAssignment, ShiftType};

use super::stats::round_one;

/// Whether moving from `from` to `to` follows the forward rotation
/// morning, evening, night, morning.
pub fn is_forward_rotation(from: ShiftType, to: ShiftType) -> bool {
    matches!(
        (from, to),
        (ShiftType::Morning, ShiftType::Evening)
            | (ShiftType::Evening, ShiftType::Night)
            | (ShiftType::Night, ShiftType::Morning)
    )
}

/// Rates a rotation score.
pub fn rotation_quality(score: Decimal) -> Rating {
    if score >= ROTATION_EXCELLENT_FROM {
        Rating::Excellent
    } else if score >= ROTATION_GOOD_FROM {
        Rating::Good
    } else if score >= ROTATION_FAIR_FROM {
        Rating::Fair
    } else {
        Rating::Poor
    }
}

/// Analyses transitions between one physician's date-ordered duties.
///
/// Referral duties take part through their nominal shift. Assignments on
/// the same date keep their input order.
pub fn analyze_rotation(assignments: &[&ShiftAssignment]) -> RotationPattern {
    let mut ordered: Vec<&ShiftAssignment> = assignments.to_vec();
    ordered.sort_by_key(|a| a.date);

    let mut good_rotations = 0;
    let mut consecutive_same_shift = 0;
    let mut total_transitions = 0;

    for pair in ordered.windows(2) {
        let (from, to) = (pair[0].shift, pair[1].shift);
        total_transitions += 1;
        if is_forward_rotation(from, to) {
            good_rotations += 1;
        } else if from == to {
            consecutive_same_shift += 1;
        }
    }

    let score = if total_transitions == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(good_rotations) / Decimal::from(total_transitions) * Decimal::ONE_HUNDRED
    };

    RotationPattern {
        good_rotations,
        consecutive_same_shift,
        total_transitions,
        rotation_score: round_one(score),
        quality: rotation_quality(score),
    }
}
