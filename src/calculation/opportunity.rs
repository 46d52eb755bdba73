//! Opportunity distribution.
//!
//! Ranks physicians by their share of premium, weekend and referral duties
//! and flags unusually light or heavy months.

use crate::config::OpportunityConfig;
use crate::models::{DoctorFairnessStats, OpportunityAnalysis, OpportunityEntry, WorkloadFlag};

use super::stats::percentage;

fn ranked(
    stats: &[DoctorFairnessStats],
    count: impl Fn(&DoctorFairnessStats) -> u32,
) -> Vec<OpportunityEntry> {
    let mut entries: Vec<OpportunityEntry> = stats
        .iter()
        .map(|s| {
            let value = count(s);
            OpportunityEntry {
                physician_id: s.physician_id.clone(),
                name: s.name.clone(),
                count: value,
                percentage: percentage(value, s.totals.duties),
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.physician_id.cmp(&b.physician_id))
    });
    entries
}

fn flagged(stats: &[DoctorFairnessStats], predicate: impl Fn(u32) -> bool) -> Vec<WorkloadFlag> {
    stats
        .iter()
        .filter(|s| predicate(s.totals.shifts))
        .map(|s| WorkloadFlag {
            physician_id: s.physician_id.clone(),
            name: s.name.clone(),
            shifts: s.totals.shifts,
        })
        .collect()
}

/// Builds the opportunity analysis.
pub fn analyze_opportunities(
    stats: &[DoctorFairnessStats],
    config: &OpportunityConfig,
) -> OpportunityAnalysis {
    OpportunityAnalysis {
        premium_shifts: ranked(stats, |s| s.totals.premium),
        weekend_duties: ranked(stats, |s| s.totals.weekend),
        referral_duties: ranked(stats, |s| s.shifts.referral),
        light_workload: flagged(stats, |shifts| shifts < config.light_workload_shifts),
        heavy_workload: flagged(stats, |shifts| shifts > config.heavy_workload_shifts),
    }
}
