//! Physician model.

use serde::{Deserialize, Serialize};

/// A physician on the emergency-department roster.
///
/// Only `id` and `name` take part in the analysis; contact details are
/// carried through untouched so the same record can be shared with the
/// rest of the rostering system.
///
/// # Example
///
/// ```
/// use roster_analytics::models::Physician;
///
/// let physician = Physician::new("doc_001", "Dr. Amara Osei");
/// assert_eq!(physician.id, "doc_001");
/// assert!(physician.email.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Physician {
    /// Unique identifier for the physician.
    pub id: String,
    /// Display name used in recommendations and alerts.
    pub name: String,
    /// Contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Physician {
    /// Creates a physician with no contact details.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            phone: None,
        }
    }
}
