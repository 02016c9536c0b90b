use chrono::NaiveTime;
use crate::domain::models::pricing_rule::NewPricingRuleParams;
use crate::error::AppError;

/// Unvalidated form input for a pricing rule.
#[derive(Debug, Default, Clone)]
pub struct PricingRuleDraft {
    pub rule_name: Option<String>,
    pub price_override: Option<f64>,
    pub day_of_week: Option<Vec<i32>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

fn parse_time(value: &str, field: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| AppError::Validation(format!("Invalid {} (HH:MM)", field)))
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

/// Checks a draft before anything is written. Nothing partial is ever
/// returned: either every field is valid or the first problem is reported.
pub fn validate_draft(resource_id: &str, draft: PricingRuleDraft) -> Result<NewPricingRuleParams, AppError> {
    let rule_name = required(draft.rule_name, "rule_name")?;
    if rule_name.trim().is_empty() {
        return Err(AppError::Validation("rule_name is required".into()));
    }

    let price_override = required(draft.price_override, "price_override")?;
    if !price_override.is_finite() || price_override < 0.0 {
        return Err(AppError::Validation("price_override must be a non-negative amount".into()));
    }

    let day_of_week = required(draft.day_of_week, "day_of_week")?;
    if day_of_week.is_empty() {
        return Err(AppError::Validation("day_of_week must name at least one day".into()));
    }
    if let Some(bad) = day_of_week.iter().find(|d| !(1..=7).contains(*d)) {
        return Err(AppError::Validation(format!("day_of_week {} outside 1..7", bad)));
    }

    let start_time = parse_time(&required(draft.start_time, "start_time")?, "start_time")?;
    let end_time = parse_time(&required(draft.end_time, "end_time")?, "end_time")?;
    if start_time >= end_time {
        return Err(AppError::Validation("start_time must be before end_time".into()));
    }

    Ok(NewPricingRuleParams {
        resource_id: resource_id.to_string(),
        rule_name,
        price_override,
        day_of_week,
        start_time,
        end_time,
    })
}
