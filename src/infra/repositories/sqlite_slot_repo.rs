use crate::domain::{models::slot::Slot, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use chrono::{DateTime, Utc};

pub struct SqliteSlotRepo {
    pool: SqlitePool,
}

impl SqliteSlotRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl SlotRepository for SqliteSlotRepo {
    async fn list_for_resource(&self, resource_id: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Slot>, AppError> {
        sqlx::query_as::<_, Slot>(
            r#"SELECT id, resource_id, start_time, end_time, price, is_booked FROM slots
               WHERE resource_id = ? AND start_time >= ? AND start_time < ?
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
               WHERE r.business_id = ? AND s.start_time >= ? AND s.start_time < ?
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
