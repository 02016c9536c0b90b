use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::BookingPageResponse;
use crate::domain::services::booking_page::{BookingPage, BookingSources, InitialConfig};
use std::collections::HashMap;
use std::sync::Arc;

/// Renders the booking screen state for `resourceId` / `date`. An optional
/// comma separated `selected` list is toggled in order, as clicks would be.
pub async fn get_booking_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let initial = InitialConfig::from_query(&params);
    let mut page = BookingPage::open(BookingSources::from_state(&state), initial).await;

    if let Some(selected) = params.get("selected") {
        for slot_id in selected.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            page.toggle_slot(slot_id);
        }
    }

    Json(BookingPageResponse::from(&page))
}
