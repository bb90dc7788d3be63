use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::ValidationError;

/// A viewer's request for a title not yet in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaRequest {
    pub id: String,
    pub title: String,
    pub notes: String,
    pub status: RequestStatus,
}

/// Lifecycle tag for a request. Creation always starts at `Pending`;
/// transitions happen outside the core (an operator editing the queue),
/// so the other variants exist only so edited files still round-trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Fulfilled,
    Rejected,
}

impl MediaRequest {
    /// Build a pending request with a fresh id. The title must be
    /// non-empty after trimming; notes are free text and may be blank.
    pub fn new(title: &str, notes: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            notes: notes.to_string(),
            status: RequestStatus::Pending,
        })
    }
}
