use booking_availability::{
    api::router::create_router,
    config::Config,
    infra::factory::sqlite_state,
    state::AppState,
};
use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{body::Body, http::Request, Router};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            timezone: chrono_tz::UTC,
        };

        let state = Arc::new(sqlite_state(&config, pool.clone()));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn insert_resource(&self, id: &str, name: &str, business_id: &str) {
        sqlx::query("INSERT INTO resources (id, name, business_id) VALUES (?, ?, ?)")
            .bind(id).bind(name).bind(business_id)
            .execute(&self.pool).await.unwrap();
    }

    pub async fn insert_slot(&self, id: &str, resource_id: &str, start: DateTime<Utc>, minutes: i64, price: Option<f64>, is_booked: bool) {
        sqlx::query("INSERT INTO slots (id, resource_id, start_time, end_time, price, is_booked) VALUES (?, ?, ?, ?, ?, ?)")
            .bind(id).bind(resource_id).bind(start).bind(start + chrono::Duration::minutes(minutes))
            .bind(price).bind(is_booked)
            .execute(&self.pool).await.unwrap();
    }

    #[allow(dead_code)]
    pub async fn insert_schedule(&self, resource_id: &str, day_of_week: i32, is_open: bool) {
        sqlx::query("INSERT INTO weekly_schedules (resource_id, day_of_week, is_open, open_time, close_time) VALUES (?, ?, ?, ?, ?)")
            .bind(resource_id).bind(day_of_week).bind(is_open)
            .bind(NaiveTime::from_hms_opt(8, 0, 0)).bind(NaiveTime::from_hms_opt(22, 0, 0))
            .execute(&self.pool).await.unwrap();
    }

    pub async fn get(&self, uri: &str) -> (axum::http::StatusCode, Value) {
        let response = self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap();
        let status = response.status();
        (status, parse_body(response).await)
    }

    #[allow(dead_code)]
    pub async fn send_json(&self, method: &str, uri: &str, payload: Value) -> (axum::http::StatusCode, Value) {
        let response = self.router.clone().oneshot(
            Request::builder().method(method).uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string())).unwrap()
        ).await.unwrap();
        let status = response.status();
        (status, parse_body(response).await)
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

/// 2025-03-10 is a Monday.
#[allow(dead_code)]
pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, minute, 0).unwrap()
}

/// Two courts of `biz-1` plus one resource of another business.
#[allow(dead_code)]
pub async fn seed_courts(app: &TestApp) {
    app.insert_resource("court-b", "Court B", "biz-1").await;
    app.insert_resource("court-a", "Court A", "biz-1").await;
    app.insert_resource("studio", "Studio", "biz-2").await;

    app.insert_slot("a-09", "court-a", at(10, 9, 0), 60, Some(20.0), false).await;
    app.insert_slot("b-09", "court-b", at(10, 9, 0), 60, Some(20.0), true).await;
    app.insert_slot("a-10", "court-a", at(10, 10, 0), 60, Some(25.0), false).await;
    app.insert_slot("b-11", "court-b", at(10, 11, 0), 60, None, false).await;
    app.insert_slot("a-next", "court-a", at(11, 9, 0), 60, Some(30.0), false).await;
    app.insert_slot("studio-09", "studio", at(10, 9, 0), 60, Some(99.0), false).await;
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
