use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A visitor review of an attraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub attraction_id: String,
    pub author: String,
    /// Star rating, 1–5. Backends validate the range; the adapter clamps
    /// anything out of bounds.
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// An outbound review draft — [`Review`] minus the backend-assigned `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub attraction_id: String,
    pub author: String,
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
}
