use crate::domain::{models::slot::Slot, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use chrono::{DateTime, Utc};

pub struct PostgresSlotRepo {
    pool: PgPool,
}

impl PostgresSlotRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl SlotRepository for PostgresSlotRepo {
    async fn list_for_resource(&self, resource_id: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Slot>, AppError> {
        sqlx::query_as::<_, Slot>(
            r#"SELECT id, resource_id, start_time, end_time, price, is_booked FROM slots
               WHERE resource_id = $1 AND start_time >= $2 AND start_time < $3
               ORDER BY start_time ASC"#
        )
            .bind(resource_id)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_for_business(&self, business_id: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Slot>, AppError> {
        sqlx::query_as::<_, Slot>(
            r#"SELECT s.id, s.resource_id, s.start_time, s.end_time, s.price, s.is_booked FROM slots s
               JOIN resources r ON r.id = s.resource_id
               WHERE r.business_id = $1 AND s.start_time >= $2 AND s.start_time < $3
               ORDER BY s.start_time ASC"#
        )
            .bind(business_id)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
