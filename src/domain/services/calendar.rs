use chrono::{DateTime, Duration, LocalResult, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use crate::error::AppError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AppError::Validation("Invalid date format (yyyy-MM-dd)".into()))
}

pub fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

fn local_midnight(tz: Tz, date: NaiveDate) -> Result<DateTime<Utc>, AppError> {
    let midnight = date.and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::InternalWithMsg(format!("no midnight for {}", date)))?;

    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        // Midnight skipped by a DST jump: the day starts at the first valid instant.
        LocalResult::None => (1..=180)
            .find_map(|m| tz.from_local_datetime(&(midnight + Duration::minutes(m))).earliest())
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| AppError::Validation(format!("No valid local start for {}", date))),
    }
}

/// Half-open UTC window `[start_of_day, start_of_next_day)` of a local date.
pub fn day_window(tz: Tz, date: NaiveDate) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let next = date.succ_opt()
        .ok_or_else(|| AppError::Validation("Date out of range".into()))?;
    Ok((local_midnight(tz, date)?, local_midnight(tz, next)?))
}
