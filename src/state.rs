use std::sync::Arc;
use crate::domain::ports::{
    PricingRuleRepository, ResourceRepository, ScheduleRepository, SlotRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub resource_repo: Arc<dyn ResourceRepository>,
    pub slot_repo: Arc<dyn SlotRepository>,
    pub schedule_repo: Arc<dyn ScheduleRepository>,
    pub pricing_rule_repo: Arc<dyn PricingRuleRepository>,
}
