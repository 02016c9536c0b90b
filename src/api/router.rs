use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, resource, slot, schedule, pricing_rule, booking_page};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Resources
        .route("/api/v1/resources/{resource_id}", get(resource::get_resource))
        .route("/api/v1/businesses/{business_id}/resources", get(resource::list_business_resources))

        // Slots & Matrix
        .route("/api/v1/resources/{resource_id}/slots", get(slot::list_resource_slots))
        .route("/api/v1/businesses/{business_id}/slots", get(slot::list_business_slots))
        .route("/api/v1/businesses/{business_id}/matrix", get(slot::get_slot_matrix))
        .route("/api/v1/businesses/{business_id}/quote", post(slot::quote_selection))

        // Weekly schedule
        .route("/api/v1/resources/{resource_id}/schedule", get(schedule::get_schedule))
        .route("/api/v1/resources/{resource_id}/disabled-days", get(schedule::get_disabled_days))

        // Booking page
        .route("/api/v1/booking-page", get(booking_page::get_booking_page))

        // Pricing rules (admin)
        .route("/api/v1/resources/{resource_id}/pricing-rules", get(pricing_rule::list_pricing_rules).post(pricing_rule::create_pricing_rule))
        .route("/api/v1/pricing-rules/{rule_id}", delete(pricing_rule::delete_pricing_rule))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
