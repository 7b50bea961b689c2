use crate::core::phase::classify;
use crate::domain::model::PregnancyPhase;
use crate::utils::error::{Result, WeekError};
use chrono::NaiveDate;
use serde::Serialize;

/// Length of a full-term pregnancy counted from the last menstrual period.
pub const FULL_TERM_DAYS: i64 = 280;
pub const MIN_WEEK: i64 = 1;
pub const MAX_WEEK: i64 = 42;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PregnancyProgress {
    pub due_date: NaiveDate,
    pub today: NaiveDate,
    pub week: i64,
    pub day_of_week: i64,
    pub days_remaining: i64,
    pub progress_percent: f64,
    pub phase: PregnancyPhase,
}

impl PregnancyProgress {
    pub fn from_due_date(due_date: NaiveDate, today: NaiveDate) -> Self {
        let days_until_due = (due_date - today).num_days();
        let elapsed_days = FULL_TERM_DAYS - days_until_due;

        let raw_week = elapsed_days.div_euclid(7);
        let week = raw_week.clamp(MIN_WEEK, MAX_WEEK);
        let day_of_week = if raw_week < MIN_WEEK {
            0
        } else {
            elapsed_days.rem_euclid(7)
        };

        let percent = (elapsed_days as f64 / FULL_TERM_DAYS as f64 * 100.0).clamp(0.0, 100.0);

        Self {
            due_date,
            today,
            week,
            day_of_week,
            days_remaining: days_until_due.max(0),
            progress_percent: (percent * 10.0).round() / 10.0,
            phase: classify(week),
        }
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| WeekError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Trimester;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_halfway_point() {
        let today = date("2026-01-01");
        let due = today + chrono::Duration::days(140);
        let progress = PregnancyProgress::from_due_date(due, today);

        assert_eq!(progress.week, 20);
        assert_eq!(progress.day_of_week, 0);
        assert_eq!(progress.days_remaining, 140);
        assert_eq!(progress.progress_percent, 50.0);
        assert_eq!(progress.phase.trimester, Trimester::Second);
    }

    #[test]
    fn test_overdue_clamps() {
        let progress = PregnancyProgress::from_due_date(date("2026-01-01"), date("2026-02-15"));
        assert_eq!(progress.days_remaining, 0);
        assert_eq!(progress.week, MAX_WEEK);
        assert_eq!(progress.progress_percent, 100.0);
        assert_eq!(progress.phase.trimester, Trimester::Third);
    }

    #[test]
    fn test_far_future_due_date_clamps_to_first_week() {
        let progress = PregnancyProgress::from_due_date(date("2027-06-01"), date("2026-01-01"));
        assert_eq!(progress.week, MIN_WEEK);
        assert_eq!(progress.day_of_week, 0);
        assert_eq!(progress.progress_percent, 0.0);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("2026-13-40").is_err());
        assert!(matches!(
            parse_date("tomorrow"),
            Err(WeekError::InvalidDate { .. })
        ));
    }
}
