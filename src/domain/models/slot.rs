use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One bookable interval of one resource. `is_booked` is set outside this
/// service and never cleared again.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Slot {
    pub id: String,
    pub resource_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub price: Option<f64>,
    pub is_booked: bool,
}

impl Slot {
    pub fn key(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start_time, self.end_time)
    }
}
