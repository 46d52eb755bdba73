//! Shift assignment model and related types.
//!
//! A [`ShiftAssignment`] is one roster entry: a physician placed on a shift
//! on a calendar day, optionally as the referral duty.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One of the three fixed 8-hour duty windows in a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Morning shift.
    Morning,
    /// Evening shift.
    Evening,
    /// Night shift.
    Night,
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::Morning => write!(f, "morning"),
            ShiftType::Evening => write!(f, "evening"),
            ShiftType::Night => write!(f, "night"),
        }
    }
}

/// The bucket an assignment is tallied under.
///
/// Referral duty is its own category regardless of the nominal shift the
/// assignment carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyCategory {
    /// Ordinary morning shift.
    Morning,
    /// Ordinary evening shift.
    Evening,
    /// Ordinary night shift.
    Night,
    /// Referral duty of any nominal shift.
    Referral,
}

/// A single roster entry.
///
/// # Example
///
/// ```
/// use roster_analytics::models::{DutyCategory, ShiftAssignment, ShiftType};
/// use chrono::NaiveDate;
///
/// let assignment = ShiftAssignment {
///     id: "r_001".to_string(),
///     physician_id: "doc_001".to_string(),
///     shift: ShiftType::Night,
///     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(), // Saturday
///     is_referral_duty: true,
/// };
/// assert_eq!(assignment.duty_category(), DutyCategory::Referral);
/// assert!(assignment.is_weekend());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Unique identifier for the roster entry.
    pub id: String,
    /// The physician on duty.
    pub physician_id: String,
    /// The nominal shift window.
    pub shift: ShiftType,
    /// The calendar day of the duty.
    pub date: NaiveDate,
    /// Whether this entry is the referral duty.
    #[serde(default)]
    pub is_referral_duty: bool,
}

impl ShiftAssignment {
    /// Returns the tally bucket for this assignment.
    pub fn duty_category(&self) -> DutyCategory {
        if self.is_referral_duty {
            return DutyCategory::Referral;
        }
        match self.shift {
            ShiftType::Morning => DutyCategory::Morning,
            ShiftType::Evening => DutyCategory::Evening,
            ShiftType::Night => DutyCategory::Night,
        }
    }

    /// Returns the day of the week of the duty.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns true when the duty falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.day_of_week(), Weekday::Sat | Weekday::Sun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_assignment(shift: ShiftType, date: &str, is_referral_duty: bool) -> ShiftAssignment {
        ShiftAssignment {
            id: "r_001".to_string(),
            physician_id: "doc_001".to_string(),
            shift,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            is_referral_duty,
        }
    }

    #[test]
    fn test_ordinary_shifts_map_to_their_category() {
        assert_eq!(
            make_assignment(ShiftType::Morning, "2026-01-15", false).duty_category(),
            DutyCategory::Morning
        );
        assert_eq!(
            make_assignment(ShiftType::Evening, "2026-01-15", false).duty_category(),
            DutyCategory::Evening
        );
        assert_eq!(
            make_assignment(ShiftType::Night, "2026-01-15", false).duty_category(),
            DutyCategory::Night
        );
    }

    #[test]
    fn test_referral_overrides_nominal_shift() {
        for shift in [ShiftType::Morning, ShiftType::Evening, ShiftType::Night] {
            assert_eq!(
                make_assignment(shift, "2026-01-15", true).duty_category(),
                DutyCategory::Referral
            );
        }
    }

    #[test]
    fn test_weekend_detection() {
        // 2026-01-15 Thursday, 2026-01-17 Saturday, 2026-01-18 Sunday
        assert!(!make_assignment(ShiftType::Morning, "2026-01-15", false).is_weekend());
        assert!(make_assignment(ShiftType::Morning, "2026-01-17", false).is_weekend());
        assert!(make_assignment(ShiftType::Morning, "2026-01-18", false).is_weekend());
    }

    #[test]
    fn test_assignment_deserialization_defaults_referral_flag() {
        let json = r#"{
            "id": "r_001",
            "physician_id": "doc_001",
            "shift": "evening",
            "date": "2026-01-15"
        }"#;
        let assignment: ShiftAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.shift, ShiftType::Evening);
        assert!(!assignment.is_referral_duty);
    }
}
