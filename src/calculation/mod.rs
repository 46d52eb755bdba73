//! Calculation logic for the roster analytics engine.
//!
//! Two independent branches over the same roster month: the workload branch
//! (duty tallies, streaks, weighted hours, intensity, then the department
//! summary and balance score) and the fairness branch (dispersion scores,
//! rotation quality, opportunity distribution, then recommendations and
//! inequity alerts). Every function here is pure.

mod alerts;
mod department;
mod fairness;
mod opportunity;
mod recommendations;
mod rotation;
mod stats;
mod streaks;
mod tally;
mod workload;

pub use alerts::detect_inequities;
pub use department::{
    balance_score_rating, department_balance, hours_balance_rating, rank_workload,
    summarize_department,
};
pub use fairness::{dimension_means, dimension_std_devs, doctor_fairness_stats, score_fairness};
pub use opportunity::analyze_opportunities;
pub use recommendations::{generate_recommendations, overall_fairness_rating};
pub use rotation::{analyze_rotation, is_forward_rotation, rotation_quality};
pub use stats::{
    mean, mean_absolute_deviation, percentage, population_std_dev, round_one, round_to,
    score_from_penalty,
};
pub use streaks::analyze_streaks;
pub use tally::{count_weekend_duties, tally_shifts};
pub use workload::{aggregate_workload, intensity_score, regular_hours, weighted_hours};
