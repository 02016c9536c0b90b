use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// Price override for a subset of weekdays (Monday = 1 .. Sunday = 7) and a
/// time range. Applying it to `Slot::price` happens elsewhere.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct PricingRule {
    pub id: String,
    pub resource_id: String,
    pub rule_name: String,
    pub price_override: f64,
    pub day_of_week: Json<Vec<i32>>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

pub struct NewPricingRuleParams {
    pub resource_id: String,
    pub rule_name: String,
    pub price_override: f64,
    pub day_of_week: Vec<i32>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl PricingRule {
    pub fn new(params: NewPricingRuleParams) -> Self {
        let mut days = params.day_of_week;
        days.sort_unstable();
        days.dedup();

        Self {
            id: Uuid::new_v4().to_string(),
            resource_id: params.resource_id,
            rule_name: params.rule_name.trim().to_string(),
            price_override: params.price_override,
            day_of_week: Json(days),
            start_time: params.start_time,
            end_time: params.end_time,
            created_at: Utc::now(),
        }
    }

    pub fn applies_on(&self, day_of_week: i32) -> bool {
        self.day_of_week.0.contains(&day_of_week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rule_normalizes_days() {
        let rule = PricingRule::new(NewPricingRuleParams {
            resource_id: "court-1".into(),
            rule_name: "  Weekend peak ".into(),
            price_override: 35.0,
            day_of_week: vec![7, 6, 7],
            start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        });

        assert_eq!(rule.day_of_week.0, vec![6, 7]);
        assert_eq!(rule.rule_name, "Weekend peak");
        assert!(rule.applies_on(6));
        assert!(!rule.applies_on(1));
    }
}
