mod common;

use axum::http::StatusCode;
use common::{seed_courts, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_quote_totals_free_slots() {
    let app = TestApp::new().await;
    seed_courts(&app).await;

    let (status, body) = app.send_json("POST", "/api/v1/businesses/biz-1/quote", json!({
        "date": "2025-03-10",
        "slot_ids": ["a-09", "a-10"]
    })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 45.0);
    assert_eq!(body["selected"], json!(["a-09", "a-10"]));
    assert_eq!(body["refused"], json!([]));
}

#[tokio::test]
async fn test_quote_refuses_booked_slots() {
    let app = TestApp::new().await;
    seed_courts(&app).await;

    let (status, body) = app.send_json("POST", "/api/v1/businesses/biz-1/quote", json!({
        "date": "2025-03-10",
        "slot_ids": ["b-09", "a-09"]
    })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected"], json!(["a-09"]));
    assert_eq!(body["refused"], json!(["b-09"]));
    assert_eq!(body["total"], 20.0);
}

#[tokio::test]
async fn test_quote_counts_missing_price_as_zero_and_ignores_repeats() {
    let app = TestApp::new().await;
    seed_courts(&app).await;

    let (_, body) = app.send_json("POST", "/api/v1/businesses/biz-1/quote", json!({
        "date": "2025-03-10",
        "slot_ids": ["b-11", "a-10", "a-10"]
    })).await;

    assert_eq!(body["selected"], json!(["a-10", "b-11"]));
    assert_eq!(body["total"], 25.0);
}

#[tokio::test]
async fn test_quote_rejects_slot_from_other_day() {
    let app = TestApp::new().await;
    seed_courts(&app).await;

    let (status, body) = app.send_json("POST", "/api/v1/businesses/biz-1/quote", json!({
        "date": "2025-03-10",
        "slot_ids": ["a-next"]
    })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("a-next"));
}
