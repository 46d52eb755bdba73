//! Qualitative rating shared by the balance, rotation and fairness reports.

use serde::{Deserialize, Serialize};

/// A four-step qualitative label.
///
/// Each report derives the label from its own cut-points; the label itself
/// carries no thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Best band.
    Excellent,
    /// Second band.
    Good,
    /// Third band.
    Fair,
    /// Lowest band.
    Poor,
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Excellent => write!(f, "Excellent"),
            Rating::Good => write!(f, "Good"),
            Rating::Fair => write!(f, "Fair"),
            Rating::Poor => write!(f, "Poor"),
        }
    }
}
