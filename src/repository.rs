//! Read access to roster data.
//!
//! The analyses consume roster data through [`RosterRepository`] so that the
//! backing store (database, remote service, in-memory snapshot) stays outside
//! the engine. [`InMemoryRoster`] is a read-only snapshot used by the HTTP
//! layer, tests and benchmarks.

use crate::error::AnalyticsResult;
use crate::models::{Physician, RosterMonth, ShiftAssignment};

/// Source of physicians and their shift assignments.
pub trait RosterRepository {
    /// All assignments dated within `period`.
    fn assignments_for_month(&self, period: RosterMonth) -> AnalyticsResult<Vec<ShiftAssignment>>;

    /// Every physician on the roster, in any order.
    fn all_physicians(&self) -> AnalyticsResult<Vec<Physician>>;
}

/// An immutable roster snapshot held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    physicians: Vec<Physician>,
    assignments: Vec<ShiftAssignment>,
}

impl InMemoryRoster {
    /// Creates a snapshot from physicians and assignments of any month.
    pub fn new(physicians: Vec<Physician>, assignments: Vec<ShiftAssignment>) -> Self {
        Self {
            physicians,
            assignments,
        }
    }

    /// Number of assignments across all months.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}

impl RosterRepository for InMemoryRoster {
    fn assignments_for_month(&self, period: RosterMonth) -> AnalyticsResult<Vec<ShiftAssignment>> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| period.contains(a.date))
            .cloned()
            .collect())
    }

    fn all_physicians(&self) -> AnalyticsResult<Vec<Physician>> {
        Ok(self.physicians.clone())
    }
}
