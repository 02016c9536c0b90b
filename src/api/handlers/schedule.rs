use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::DisabledDaysResponse;
use crate::domain::services::availability::disabled_days_or_open;
use crate::error::AppError;
use std::sync::Arc;

pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rules = state.schedule_repo.list_by_resource(&resource_id).await?;
    Ok(Json(rules))
}

/// Never fails on a schedule error: the calendar is left unrestricted.
pub async fn get_disabled_days(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
) -> impl IntoResponse {
    let rules = state.schedule_repo.list_by_resource(&resource_id).await;
    let disabled = disabled_days_or_open(rules);

    Json(DisabledDaysResponse {
        resource_id,
        disabled_days: disabled.into_iter().collect(),
    })
}
