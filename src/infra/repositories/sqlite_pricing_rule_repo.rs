use crate::domain::{models::pricing_rule::PricingRule, ports::PricingRuleRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePricingRuleRepo {
    pool: SqlitePool,
}

impl SqlitePricingRuleRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl PricingRuleRepository for SqlitePricingRuleRepo {
    async fn create(&self, rule: &PricingRule) -> Result<PricingRule, AppError> {
        sqlx::query_as::<_, PricingRule>(
            r#"INSERT INTO pricing_rules (id, resource_id, rule_name, price_override, day_of_week, start_time, end_time, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&rule.id)
            .bind(&rule.resource_id)
            .bind(&rule.rule_name)
            .bind(rule.price_override)
            .bind(&rule.day_of_week)
            .bind(rule.start_time)
            .bind(rule.end_time)
            .bind(rule.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_resource(&self, resource_id: &str) -> Result<Vec<PricingRule>, AppError> {
        sqlx::query_as::<_, PricingRule>(
            "SELECT * FROM pricing_rules WHERE resource_id = ? ORDER BY created_at DESC"
        )
            .bind(resource_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM pricing_rules WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Pricing rule not found".into()));
        }
        Ok(())
    }
}
