use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use tracing::warn;
use crate::domain::models::schedule::WeeklyScheduleRule;
use crate::error::AppError;

/// Calendar weekday numbering used for disabled days: Sunday = 0 .. Saturday = 6.
pub type CalendarDay = u32;

const DAYS_IN_WEEK: u32 = 7;

/// Maps a schedule weekday (Monday = 1 .. Sunday = 7) to the calendar
/// numbering. Anything outside 1..=7 is not a weekday.
pub fn to_calendar_day(day_of_week: i32) -> Option<CalendarDay> {
    match day_of_week {
        1..=7 => Some((day_of_week as u32) % DAYS_IN_WEEK),
        _ => None,
    }
}

/// Weekdays the calendar must not offer for a resource.
///
/// A weekday is open when at least one rule for it has `is_open`. Rows with
/// an invalid weekday are skipped; with no usable rules there is no
/// restriction and nothing is disabled.
pub fn disabled_days(rules: &[WeeklyScheduleRule]) -> BTreeSet<CalendarDay> {
    let days: Vec<(CalendarDay, bool)> = rules.iter()
        .filter_map(|r| match to_calendar_day(r.day_of_week) {
            Some(day) => Some((day, r.is_open)),
            None => {
                warn!("Skipping schedule row for {} with weekday {}", r.resource_id, r.day_of_week);
                None
            }
        })
        .collect();
    if days.is_empty() {
        return BTreeSet::new();
    }

    let open: BTreeSet<CalendarDay> = days.iter()
        .filter(|(_, is_open)| *is_open)
        .map(|(day, _)| *day)
        .collect();

    (0..DAYS_IN_WEEK).filter(|d| !open.contains(d)).collect()
}

/// Same as [`disabled_days`] but a failed schedule load disables nothing.
pub fn disabled_days_or_open(rules: Result<Vec<WeeklyScheduleRule>, AppError>) -> BTreeSet<CalendarDay> {
    match rules {
        Ok(rules) => disabled_days(&rules),
        Err(e) => {
            warn!("Weekly schedule unavailable, calendar left unrestricted: {}", e);
            BTreeSet::new()
        }
    }
}

pub fn is_date_disabled(date: NaiveDate, disabled: &BTreeSet<CalendarDay>) -> bool {
    disabled.contains(&date.weekday().num_days_from_sunday())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(day: i32, is_open: bool) -> WeeklyScheduleRule {
        WeeklyScheduleRule {
            resource_id: "court-1".into(),
            day_of_week: day,
            is_open,
            open_time: None,
            close_time: None,
        }
    }

    #[test]
    fn test_sunday_maps_to_zero() {
        assert_eq!(to_calendar_day(7), Some(0));
        assert_eq!(to_calendar_day(1), Some(1));
        assert_eq!(to_calendar_day(6), Some(6));
    }

    #[test]
    fn test_out_of_range_weekdays_are_skipped() {
        assert_eq!(to_calendar_day(0), None);
        assert_eq!(to_calendar_day(8), None);

        // 0 and 8 must not open Sunday or Monday.
        let disabled = disabled_days(&[rule(3, true), rule(0, true), rule(8, true)]);
        assert_eq!(disabled, BTreeSet::from([0, 1, 2, 4, 5, 6]));

        assert!(disabled_days(&[rule(9, true)]).is_empty());
    }

    #[test]
    fn test_only_sunday_open() {
        let disabled = disabled_days(&[rule(7, true)]);
        assert_eq!(disabled, BTreeSet::from([1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_no_rules_means_no_restriction() {
        assert!(disabled_days(&[]).is_empty());
    }

    #[test]
    fn test_closed_rows_disable_their_day() {
        let rules: Vec<_> = (1..=7).map(|d| rule(d, d <= 5)).collect();
        assert_eq!(disabled_days(&rules), BTreeSet::from([0, 6]));
    }

    #[test]
    fn test_any_open_row_for_a_day_opens_it() {
        let disabled = disabled_days(&[rule(3, false), rule(3, true)]);
        assert!(!disabled.contains(&3));
    }

    #[test]
    fn test_failed_load_fails_open() {
        let result = Err(AppError::InternalWithMsg("store offline".into()));
        assert!(disabled_days_or_open(result).is_empty());
    }

    #[test]
    fn test_date_lookup_uses_calendar_numbering() {
        let disabled = disabled_days(&[rule(7, true)]);
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        assert!(!is_date_disabled(sunday, &disabled));
        assert!(is_date_disabled(monday, &disabled));
    }
}
