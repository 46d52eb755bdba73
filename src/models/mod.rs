//! Core data models for the Roster Analytics Engine.
//!
//! Input records ([`Physician`], [`ShiftAssignment`]), the validated
//! [`RosterMonth`], and every derived structure the analyses return.

mod assignment;
mod fairness;
mod period;
mod physician;
mod rating;
mod workload;

pub use assignment::{DutyCategory, ShiftAssignment, ShiftType};
pub use fairness::{
    AlertKind, AlertLevel, DimensionSummary, DoctorFairnessStats, DutyPercentages, DutyTotals,
    FairnessMetrics, FairnessRating, FairnessScores, InequityAlert, OpportunityAnalysis,
    OpportunityEntry, Priority, Recommendation, RecommendationKind, RotationPattern, WorkloadFlag,
};
pub use period::{MAX_ROSTER_YEAR, MIN_ROSTER_YEAR, RosterMonth};
pub use physician::Physician;
pub use rating::Rating;
pub use workload::{
    DepartmentBalance, DepartmentStats, DoctorWorkloadStats, IntensityLevel, RankedDoctor,
    ShiftTally, StreakStats, WeekendDuties, WorkloadAnalysis,
};
