use std::env;
use chrono_tz::Tz;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Zone in which a calendar date is turned into a day window.
    pub timezone: Tz,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            timezone: env::var("APP_TIMEZONE")
                .unwrap_or_else(|_| "UTC".to_string())
                .parse()
                .expect("APP_TIMEZONE must be an IANA time zone name"),
        }
    }
}
