//! Request types for the Roster Analytics API.
//!
//! This module defines the JSON body accepted by the `POST /analytics/*`
//! endpoints: a self-contained roster snapshot for one month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Physician, ShiftAssignment, ShiftType};
use crate::repository::InMemoryRoster;

/// Request body for `POST /analytics/workload` and `POST /analytics/fairness`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRequest {
    /// Calendar year to analyse.
    pub year: i32,
    /// Month to analyse (1-12).
    pub month: u32,
    /// Every physician on the roster.
    pub physicians: Vec<PhysicianRequest>,
    /// Roster entries; entries outside the month are ignored.
    #[serde(default)]
    pub assignments: Vec<RosterEntryRequest>,
}

/// Physician information in a snapshot request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicianRequest {
    /// Unique identifier for the physician.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

/// One roster entry in a snapshot request.
///
/// Accepts the field names used by older rostering clients:
/// `doctorId`/`erDoctorId` for `physician_id` and `isReferralDuty` for
/// `is_referral_duty`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntryRequest {
    /// Unique identifier for the entry.
    pub id: String,
    /// The assigned physician.
    #[serde(alias = "doctorId", alias = "erDoctorId")]
    pub physician_id: String,
    /// The nominal shift.
    pub shift: ShiftType,
    /// The calendar day of the duty.
    pub date: NaiveDate,
    /// Whether the entry is the referral duty.
    #[serde(default, alias = "isReferralDuty")]
    pub is_referral_duty: bool,
}

impl From<PhysicianRequest> for Physician {
    fn from(req: PhysicianRequest) -> Self {
        Physician {
            id: req.id,
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}

impl From<RosterEntryRequest> for ShiftAssignment {
    fn from(req: RosterEntryRequest) -> Self {
        ShiftAssignment {
            id: req.id,
            physician_id: req.physician_id,
            shift: req.shift,
            date: req.date,
            is_referral_duty: req.is_referral_duty,
        }
    }
}

impl SnapshotRequest {
    /// Splits the request into the requested period and an in-memory roster.
    pub fn into_parts(self) -> (i32, u32, InMemoryRoster) {
        let roster = InMemoryRoster::new(
            self.physicians.into_iter().map(Into::into).collect(),
            self.assignments.into_iter().map(Into::into).collect(),
        );
        (self.year, self.month, roster)
    }
}
