use serde::{Deserialize, Serialize};
use chrono::NaiveTime;
use sqlx::FromRow;

/// Weekly template row. `day_of_week` runs Monday = 1 .. Sunday = 7.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct WeeklyScheduleRule {
    pub resource_id: String,
    pub day_of_week: i32,
    pub is_open: bool,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
}
