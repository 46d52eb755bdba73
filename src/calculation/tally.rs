//! Duty tallies.
//!
//! Counts a physician's assignments per duty category and per weekend day.
//! Referral duties are counted only as referral, never under their nominal
//! shift.

use chrono::Weekday;

use crate::models::{DutyCategory, ShiftAssignment, ShiftTally, WeekendDuties};

/// Tallies assignments into morning, evening, night and referral counts.
///
/// # Example
///
/// ```
/// use roster_analytics::calculation::tally_shifts;
/// use roster_analytics::models::{ShiftAssignment, ShiftType};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let night = ShiftAssignment {
///     id: "r_001".to_string(),
///     physician_id: "doc_001".to_string(),
///     shift: ShiftType::Night,
///     date,
///     is_referral_duty: false,
/// };
/// let referral = ShiftAssignment { id: "r_002".to_string(), is_referral_duty: true, ..night.clone() };
///
/// let tally = tally_shifts(&[&night, &referral]);
/// assert_eq!(tally.night, 1);
/// assert_eq!(tally.referral, 1);
/// ```
pub fn tally_shifts(assignments: &[&ShiftAssignment]) -> ShiftTally {
    assignments
        .iter()
        .fold(ShiftTally::default(), |mut tally, assignment| {
            match assignment.duty_category() {
                DutyCategory::Morning => tally.morning += 1,
                DutyCategory::Evening => tally.evening += 1,
                DutyCategory::Night => tally.night += 1,
                DutyCategory::Referral => tally.referral += 1,
            }
            tally
        })
}

/// Counts duties falling on Saturdays and Sundays.
pub fn count_weekend_duties(assignments: &[&ShiftAssignment]) -> WeekendDuties {
    let mut weekend = WeekendDuties::default();
    for assignment in assignments {
        match assignment.day_of_week() {
            Weekday::Sat => weekend.saturday += 1,
            Weekday::Sun => weekend.sunday += 1,
            _ => continue,
        }
        weekend.total += 1;
    }
    weekend
}
