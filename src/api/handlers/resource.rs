use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::domain::models::resource::ResourceSummary;
use crate::error::AppError;
use std::sync::Arc;

pub async fn get_resource(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resource = state.resource_repo.find_by_id(&resource_id).await?
        .ok_or(AppError::NotFound("Resource not found".into()))?;
    Ok(Json(resource))
}

pub async fn list_business_resources(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resources = state.resource_repo.list_by_business(&business_id).await?;
    let summaries: Vec<ResourceSummary> = resources.iter().map(ResourceSummary::from).collect();
    Ok(Json(summaries))
}
