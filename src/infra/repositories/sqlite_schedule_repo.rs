use crate::domain::{models::schedule::WeeklyScheduleRule, ports::ScheduleRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteScheduleRepo {
    pool: SqlitePool,
}

impl SqliteScheduleRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl ScheduleRepository for SqliteScheduleRepo {
    async fn list_by_resource(&self, resource_id: &str) -> Result<Vec<WeeklyScheduleRule>, AppError> {
        sqlx::query_as::<_, WeeklyScheduleRule>(
            r#"SELECT resource_id, day_of_week, is_open, open_time, close_time FROM weekly_schedules
               WHERE resource_id = ? ORDER BY day_of_week ASC"#
        )
            .bind(resource_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
