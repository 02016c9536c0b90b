use crate::domain::services::pricing::PricingRuleDraft;
use serde::Deserialize;

/// Every field is optional so that missing input surfaces as a validation
/// message instead of a deserialization rejection.
#[derive(Deserialize, Default)]
pub struct CreatePricingRuleRequest {
    pub rule_name: Option<String>,
    pub price_override: Option<f64>,
    pub day_of_week: Option<Vec<i32>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl From<CreatePricingRuleRequest> for PricingRuleDraft {
    fn from(req: CreatePricingRuleRequest) -> Self {
        Self {
            rule_name: req.rule_name,
            price_override: req.price_override,
            day_of_week: req.day_of_week,
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

#[derive(Deserialize)]
pub struct QuoteRequest {
    pub date: String,
    pub slot_ids: Vec<String>,
}
