mod common;

use axum::http::StatusCode;
use common::{seed_courts, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_page_loads_resource_business_and_slots() {
    let app = TestApp::new().await;
    seed_courts(&app).await;
    app.insert_schedule("court-a", 7, true).await;

    let (status, body) = app.get("/api/v1/booking-page?resourceId=court-a&date=2025-03-10").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["resource"]["business_id"], "biz-1");
    assert_eq!(body["resources"], json!([
        {"id": "court-a", "name": "Court A"},
        {"id": "court-b", "name": "Court B"}
    ]));
    assert_eq!(body["date"], "2025-03-10");
    assert_eq!(body["disabled_days"], json!([1, 2, 3, 4, 5, 6]));
    assert_eq!(body["rows"].as_array().unwrap().len(), 3);
    assert_eq!(body["no_slots"], false);
    assert_eq!(body["total"], 0.0);
    assert!(body["error"].is_null());
}

#[tokio::test]
async fn test_page_selection_skips_booked_and_totals() {
    let app = TestApp::new().await;
    seed_courts(&app).await;

    let (_, body) = app.get("/api/v1/booking-page?resourceId=court-a&date=2025-03-10&selected=b-09,a-09").await;

    assert_eq!(body["selected"], json!(["a-09"]));
    assert_eq!(body["total"], 20.0);
    assert_eq!(body["rows"][0]["cells"][0]["selected"], true);
    assert_eq!(body["rows"][0]["cells"][1]["selected"], false);
}

#[tokio::test]
async fn test_page_unknown_resource_reports_not_found() {
    let app = TestApp::new().await;
    seed_courts(&app).await;

    let (status, body) = app.get("/api/v1/booking-page?resourceId=ghost&date=2025-03-10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["kind"], "not_found");
    assert_eq!(body["error"]["message"], "Resource not found");
    assert!(body["rows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_page_empty_day_signals_no_slots() {
    let app = TestApp::new().await;
    seed_courts(&app).await;

    let (_, body) = app.get("/api/v1/booking-page?resourceId=court-b&date=2025-03-21").await;
    assert_eq!(body["no_slots"], true);
    assert!(body["error"].is_null());
}

#[tokio::test]
async fn test_page_slot_store_failure_is_inline_error() {
    let app = TestApp::new().await;
    seed_courts(&app).await;
    sqlx::query("DROP TABLE slots").execute(&app.pool).await.unwrap();

    let (status, body) = app.get("/api/v1/booking-page?resourceId=court-a&date=2025-03-10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["kind"], "data_access");
    assert_eq!(body["no_slots"], false);
    assert_eq!(body["resources"].as_array().unwrap().len(), 2);
}
