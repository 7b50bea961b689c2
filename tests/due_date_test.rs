use chrono::{Duration, NaiveDate};
use mama_weeks::core::due_date::parse_date;
use mama_weeks::{PregnancyProgress, Trimester, WeekDataResolver};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn test_progress_feeds_resolver() {
    // 還有 90 天：已過 190 天 = 第 27 週第 1 天
    let due = today() + Duration::days(90);
    let progress = PregnancyProgress::from_due_date(due, today());

    assert_eq!(progress.week, 27);
    assert_eq!(progress.day_of_week, 1);
    assert_eq!(progress.days_remaining, 90);
    assert_eq!(progress.progress_percent, 67.9);
    assert_eq!(progress.phase.trimester, Trimester::Second);

    let data = WeekDataResolver::builtin().resolve(progress.week as f64);
    assert_eq!(data.comparison_object, "Ear of corn");
}

#[test]
fn test_due_today_is_week_40() {
    let progress = PregnancyProgress::from_due_date(today(), today());
    assert_eq!(progress.week, 40);
    assert_eq!(progress.days_remaining, 0);
    assert_eq!(progress.progress_percent, 100.0);
}

#[test]
fn test_parse_date_trims_whitespace() {
    assert_eq!(parse_date(" 2026-10-19 ").unwrap(), today());
}
