//! Consecutive-duty streak detection.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{ShiftAssignment, StreakStats};

use super::stats::{mean, round_one};

/// Analyses runs of duties on consecutive calendar days.
///
/// Assignments are ordered by date. Successive dates exactly one day apart
/// extend the current run; any other gap (including a second duty on the
/// same day) closes it. Only runs of two or more days count as streaks, but
/// `max_consecutive` also considers single days.
///
/// # Example
///
/// ```
/// use roster_analytics::calculation::analyze_streaks;
/// use roster_analytics::models::{ShiftAssignment, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let assignments: Vec<ShiftAssignment> = [1, 2, 3, 5, 6]
///     .iter()
///     .map(|day| ShiftAssignment {
///         id: format!("r_{}", day),
///         physician_id: "doc_001".to_string(),
///         shift: ShiftType::Morning,
///         date: NaiveDate::from_ymd_opt(2026, 3, *day).unwrap(),
///         is_referral_duty: false,
///     })
///     .collect();
/// let refs: Vec<&ShiftAssignment> = assignments.iter().collect();
///
/// let streaks = analyze_streaks(&refs);
/// assert_eq!(streaks.max_consecutive, 3);
/// assert_eq!(streaks.streak_lengths, vec![3, 2]);
/// assert_eq!(streaks.average_streak_length, Decimal::from_str("2.5").unwrap());
/// ```
pub fn analyze_streaks(assignments: &[&ShiftAssignment]) -> StreakStats {
    let mut dates: Vec<NaiveDate> = assignments.iter().map(|a| a.date).collect();
    if dates.is_empty() {
        return StreakStats::default();
    }
    dates.sort();

    let mut streak_lengths = Vec::new();
    let mut max_consecutive = 1;
    let mut current = 1;

    for pair in dates.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            current += 1;
        } else {
            close_run(current, &mut max_consecutive, &mut streak_lengths);
            current = 1;
        }
    }
    close_run(current, &mut max_consecutive, &mut streak_lengths);

    let lengths: Vec<Decimal> = streak_lengths.iter().map(|l| Decimal::from(*l)).collect();

    StreakStats {
        max_consecutive,
        total_streaks: streak_lengths.len() as u32,
        average_streak_length: round_one(mean(&lengths)),
        streak_lengths,
    }
}

fn close_run(length: u32, max_consecutive: &mut u32, streak_lengths: &mut Vec<u32>) {
    *max_consecutive = (*max_consecutive).max(length);
    if length >= 2 {
        streak_lengths.push(length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn on_days(days: &[u32]) -> Vec<ShiftAssignment> {
        days.iter()
            .enumerate()
            .map(|(i, day)| ShiftAssignment {
                id: format!("r_{:03}", i),
                physician_id: "doc_001".to_string(),
                shift: ShiftType::Evening,
                date: NaiveDate::from_ymd_opt(2026, 3, *day).unwrap(),
                is_referral_duty: false,
            })
            .collect()
    }

    fn streaks_for(days: &[u32]) -> StreakStats {
        let assignments = on_days(days);
        let refs: Vec<&ShiftAssignment> = assignments.iter().collect();
        analyze_streaks(&refs)
    }

    #[test]
    fn test_streaks_1_2_3_5_6() {
        let streaks = streaks_for(&[1, 2, 3, 5, 6]);
        assert_eq!(streaks.max_consecutive, 3);
        assert_eq!(streaks.total_streaks, 2);
        assert_eq!(streaks.streak_lengths, vec![3, 2]);
        assert_eq!(streaks.average_streak_length, dec("2.5"));
    }

    #[test]
    fn test_unsorted_input_is_ordered_first() {
        assert_eq!(streaks_for(&[6, 1, 3, 5, 2]), streaks_for(&[1, 2, 3, 5, 6]));
    }

    #[test]
    fn test_isolated_days_are_not_streaks() {
        let streaks = streaks_for(&[1, 3, 5, 7]);
        assert_eq!(streaks.max_consecutive, 1);
        assert_eq!(streaks.total_streaks, 0);
        assert!(streaks.streak_lengths.is_empty());
        assert_eq!(streaks.average_streak_length, Decimal::ZERO);
    }

    #[test]
    fn test_same_day_duplicate_closes_run() {
        // 1, 2, 2, 3: the zero-day gap splits the run into [1,2] and [2,3]
        let streaks = streaks_for(&[1, 2, 2, 3]);
        assert_eq!(streaks.streak_lengths, vec![2, 2]);
        assert_eq!(streaks.max_consecutive, 2);
    }

    #[test]
    fn test_no_assignments() {
        assert_eq!(streaks_for(&[]), StreakStats::default());
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        // Streaks of 2, 2 and 3 days: mean 2.333...
        let streaks = streaks_for(&[1, 2, 4, 5, 7, 8, 9]);
        assert_eq!(streaks.streak_lengths, vec![2, 2, 3]);
        assert_eq!(streaks.average_streak_length, dec("2.3"));
    }
}
