use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::QuoteRequest;
use crate::api::dtos::responses::{MatrixRowResponse, QuoteResponse, SlotMatrixResponse, SlotsResponse};
use crate::domain::models::resource::ResourceSummary;
use crate::domain::services::calendar::{day_window, parse_date};
use crate::domain::services::selection::Selection;
use crate::domain::services::slot_matrix::build_slot_matrix;
use crate::error::AppError;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

fn date_param(params: &HashMap<String, String>) -> Result<NaiveDate, AppError> {
    let date_str = params.get("date").ok_or(AppError::Validation("Date required".into()))?;
    parse_date(date_str)
}

pub async fn list_resource_slots(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date = date_param(&params)?;
    state.resource_repo.find_by_id(&resource_id).await?
        .ok_or(AppError::NotFound("Resource not found".into()))?;

    let (from, to) = day_window(state.config.timezone, date)?;
    let slots = state.slot_repo.list_for_resource(&resource_id, from, to).await?;

    Ok(Json(SlotsResponse { date: date.to_string(), slots }))
}

pub async fn list_business_slots(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date = date_param(&params)?;
    let (from, to) = day_window(state.config.timezone, date)?;
    let slots = state.slot_repo.list_for_business(&business_id, from, to).await?;

    Ok(Json(SlotsResponse { date: date.to_string(), slots }))
}

pub async fn get_slot_matrix(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date = date_param(&params)?;
    let (from, to) = day_window(state.config.timezone, date)?;

    let resources = state.resource_repo.list_by_business(&business_id).await?;
    let slots = state.slot_repo.list_for_business(&business_id, from, to).await?;
    let matrix = build_slot_matrix(&slots);

    let rows = matrix.iter()
        .map(|row| MatrixRowResponse::from_row(row, &resources, None))
        .collect();

    Ok(Json(SlotMatrixResponse {
        date: date.to_string(),
        resources: resources.iter().map(ResourceSummary::from).collect(),
        rows,
        empty: matrix.is_empty(),
    }))
}

pub async fn quote_selection(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
    Json(payload): Json<QuoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&payload.date)?;
    let (from, to) = day_window(state.config.timezone, date)?;
    let slots = state.slot_repo.list_for_business(&business_id, from, to).await?;

    let mut selection = Selection::new();
    let mut refused = Vec::new();

    for slot_id in &payload.slot_ids {
        let slot = slots.iter().find(|s| &s.id == slot_id)
            .ok_or_else(|| AppError::Validation(format!("Unknown slot {} for {}", slot_id, date)))?;

        if selection.contains(slot_id) {
            continue;
        }
        if !selection.toggle(slot) {
            refused.push(slot_id.clone());
        }
    }

    let total = selection.total(&slots);
    info!("Quoted {} slots for business {} on {}: {}", selection.len(), business_id, date, total);

    Ok(Json(QuoteResponse {
        date: date.to_string(),
        selected: selection.ids().map(str::to_string).collect(),
        refused,
        total,
    }))
}
