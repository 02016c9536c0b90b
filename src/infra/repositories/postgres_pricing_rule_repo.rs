use crate::domain::{models::pricing_rule::PricingRule, ports::PricingRuleRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPricingRuleRepo {
    pool: PgPool,
}

impl PostgresPricingRuleRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl PricingRuleRepository for PostgresPricingRuleRepo {
    async fn create(&self, rule: &PricingRule) -> Result<PricingRule, AppError> {
        sqlx::query_as::<_, PricingRule>(
            r#"INSERT INTO pricing_rules (id, resource_id, rule_name, price_override, day_of_week, start_time, end_time, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
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
            "SELECT * FROM pricing_rules WHERE resource_id = $1 ORDER BY created_at DESC"
        )
            .bind(resource_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM pricing_rules WHERE id = $1")
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
