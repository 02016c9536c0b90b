use crate::domain::models::{
    resource::Resource, slot::Slot, schedule::WeeklyScheduleRule, pricing_rule::PricingRule,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Resource>, AppError>;
    /// Ordered by name.
    async fn list_by_business(&self, business_id: &str) -> Result<Vec<Resource>, AppError>;
}

/// Slot lookups take a half-open window `[from, to)` on `start_time`.
#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn list_for_resource(&self, resource_id: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Slot>, AppError>;
    async fn list_for_business(&self, business_id: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Slot>, AppError>;
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn list_by_resource(&self, resource_id: &str) -> Result<Vec<WeeklyScheduleRule>, AppError>;
}

#[async_trait]
pub trait PricingRuleRepository: Send + Sync {
    async fn create(&self, rule: &PricingRule) -> Result<PricingRule, AppError>;
    /// Newest first.
    async fn list_by_resource(&self, resource_id: &str) -> Result<Vec<PricingRule>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
