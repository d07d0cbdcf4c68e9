use crate::common::{adapter, ymd};
use chrono::{Datelike, Weekday};
use datetime_selector::picker::QuickRange;
use datetime_selector::utils::datetime::ChronoAdapter;

#[test]
fn test_presets_resolve_relative_to_today() {
    let dates = adapter(ymd(2024, 3, 15));

    assert_eq!(QuickRange::Today.resolve(&*dates), (ymd(2024, 3, 15), ymd(2024, 3, 15)));
    assert_eq!(QuickRange::Last7Days.resolve(&*dates), (ymd(2024, 3, 8), ymd(2024, 3, 15)));
    assert_eq!(QuickRange::Last30Days.resolve(&*dates), (ymd(2024, 2, 14), ymd(2024, 3, 15)));
    assert_eq!(QuickRange::ThisMonth.resolve(&*dates), (ymd(2024, 3, 1), ymd(2024, 3, 31)));
}

#[test]
fn test_this_week_spans_seven_days() {
    for day in 1..=28 {
        let dates = adapter(ymd(2024, 2, day));
        let (start, end) = QuickRange::ThisWeek.resolve(&*dates);
        assert_eq!(start.weekday(), Weekday::Sun);
        assert_eq!(end.weekday(), Weekday::Sat);
        assert_eq!((end - start).num_days(), 6);
        assert!(start <= ymd(2024, 2, day) && ymd(2024, 2, day) <= end);
    }

    let monday = ChronoAdapter::fixed(ymd(2024, 3, 17), Weekday::Mon);
    assert_eq!(QuickRange::ThisWeek.resolve(&monday), (ymd(2024, 3, 11), ymd(2024, 3, 17)));
}

#[test]
fn test_this_month_handles_leap_february() {
    let dates = adapter(ymd(2024, 2, 10));
    assert_eq!(QuickRange::ThisMonth.resolve(&*dates), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
}

#[test]
fn test_preset_keys_and_labels() {
    let keys: Vec<&str> = QuickRange::ALL.iter().map(|preset| preset.key()).collect();
    assert_eq!(keys, vec!["today", "last7days", "last30days", "thisWeek", "thisMonth"]);
    assert_eq!(QuickRange::Last7Days.label(), "Last 7 Days");
}
