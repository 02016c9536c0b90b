use crate::domain::{models::schedule::WeeklyScheduleRule, ports::ScheduleRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresScheduleRepo {
    pool: PgPool,
}

impl PostgresScheduleRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl ScheduleRepository for PostgresScheduleRepo {
    async fn list_by_resource(&self, resource_id: &str) -> Result<Vec<WeeklyScheduleRule>, AppError> {
        sqlx::query_as::<_, WeeklyScheduleRule>(
            r#"SELECT resource_id, day_of_week, is_open, open_time, close_time FROM weekly_schedules
               WHERE resource_id = $1 ORDER BY day_of_week ASC"#
        )
            .bind(resource_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
