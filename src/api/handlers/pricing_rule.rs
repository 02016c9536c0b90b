use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreatePricingRuleRequest;
use crate::domain::models::pricing_rule::PricingRule;
use crate::domain::services::pricing::validate_draft;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_pricing_rules(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rules = state.pricing_rule_repo.list_by_resource(&resource_id).await?;
    Ok(Json(rules))
}

pub async fn create_pricing_rule(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
    Json(payload): Json<CreatePricingRuleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_draft(&resource_id, payload.into())?;

    state.resource_repo.find_by_id(&resource_id).await?
        .ok_or(AppError::NotFound("Resource not found".into()))?;

    let created = state.pricing_rule_repo.create(&PricingRule::new(params)).await?;
    info!("Created pricing rule '{}' for resource {} at {}", created.rule_name, resource_id, created.price_override);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_pricing_rule(
    State(state): State<Arc<AppState>>,
    Path(rule_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.pricing_rule_repo.delete(&rule_id).await?;
    info!("Deleted pricing rule: {}", rule_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
