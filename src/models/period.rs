//! Roster period model.
//!
//! Analyses always cover exactly one calendar month. [`RosterMonth`] is the
//! validated (year, month) pair and knows the month's length.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Earliest year accepted for a roster period.
pub const MIN_ROSTER_YEAR: i32 = 1000;
/// Latest year accepted for a roster period.
pub const MAX_ROSTER_YEAR: i32 = 9999;

/// A validated calendar month.
///
/// # Example
///
/// ```
/// use roster_analytics::models::RosterMonth;
///
/// let february = RosterMonth::new(2024, 2).unwrap();
/// assert_eq!(february.days_in_month(), 29);
///
/// assert!(RosterMonth::new(2024, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RosterMonth {
    year: i32,
    month: u32,
}

impl RosterMonth {
    /// Creates a roster month, rejecting months outside 1-12 and years
    /// that are not four digits.
    pub fn new(year: i32, month: u32) -> AnalyticsResult<Self> {
        let valid_year = (MIN_ROSTER_YEAR..=MAX_ROSTER_YEAR).contains(&year);
        if !valid_year || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(AnalyticsError::InvalidPeriod { year, month });
        }
        Ok(Self { year, month })
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the number of days in the month (28-31).
    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31)
    }

    /// Returns true when the date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for RosterMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
