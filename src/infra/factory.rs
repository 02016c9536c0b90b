use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::infra::repositories::{
    postgres_resource_repo::PostgresResourceRepo, postgres_slot_repo::PostgresSlotRepo,
    postgres_schedule_repo::PostgresScheduleRepo, postgres_pricing_rule_repo::PostgresPricingRuleRepo,
    sqlite_resource_repo::SqliteResourceRepo, sqlite_slot_repo::SqliteSlotRepo,
    sqlite_schedule_repo::SqliteScheduleRepo, sqlite_pricing_rule_repo::SqlitePricingRuleRepo,
};

pub fn sqlite_state(config: &Config, pool: SqlitePool) -> AppState {
    AppState {
        config: config.clone(),
        resource_repo: Arc::new(SqliteResourceRepo::new(pool.clone())),
        slot_repo: Arc::new(SqliteSlotRepo::new(pool.clone())),
        schedule_repo: Arc::new(SqliteScheduleRepo::new(pool.clone())),
        pricing_rule_repo: Arc::new(SqlitePricingRuleRepo::new(pool)),
    }
}

pub fn postgres_state(config: &Config, pool: PgPool) -> AppState {
    AppState {
        config: config.clone(),
        resource_repo: Arc::new(PostgresResourceRepo::new(pool.clone())),
        slot_repo: Arc::new(PostgresSlotRepo::new(pool.clone())),
        schedule_repo: Arc::new(PostgresScheduleRepo::new(pool.clone())),
        pricing_rule_repo: Arc::new(PostgresPricingRuleRepo::new(pool)),
    }
}

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;
        postgres_state(config, pool)
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;
        sqlite_state(config, pool)
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
