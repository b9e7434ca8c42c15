use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use wagt::format::{RelativeBucket, created_at, created_at_at};
use wagt::{FormatError, Locale};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap()
}

fn ago(d: Duration) -> String {
    (now() - d).to_rfc3339()
}

fn fmt(ts: &str, locale: Locale) -> String {
    created_at_at(ts, locale, now()).unwrap()
}

#[test]
fn test_five_minutes_ago_eng() {
    assert_eq!(fmt("2024-01-10T09:55:00", Locale::Eng), "5 minutes ago");
}

#[test]
fn test_more_than_a_day_is_absolute_eng() {
    assert_eq!(fmt("2024-01-09T08:00:00", Locale::Eng), "9 January, 2024");
}

#[test]
fn test_twenty_seconds_is_just_now_tkm() {
    assert_eq!(fmt("2024-01-10T09:59:40", Locale::Tkm), "şu wagt");
}

#[test]
fn test_just_now_all_locales() {
    let t = ago(Duration::seconds(10));
    assert_eq!(fmt(&t, Locale::Tkm), "şu wagt");
    assert_eq!(fmt(&t, Locale::Rus), "прямо сейчас");
    assert_eq!(fmt(&t, Locale::Eng), "right now");
}

#[test]
fn test_same_instant_is_just_now() {
    assert_eq!(fmt(&now().to_rfc3339(), Locale::Eng), "right now");
}

#[test]
fn test_minutes_all_locales() {
    let t = ago(Duration::minutes(12));
    assert_eq!(fmt(&t, Locale::Tkm), "12 minut öň");
    assert_eq!(fmt(&t, Locale::Rus), "12 минут назад");
    assert_eq!(fmt(&t, Locale::Eng), "12 minutes ago");
}

#[test]
fn test_hours_all_locales() {
    let t = ago(Duration::hours(3));
    assert_eq!(fmt(&t, Locale::Tkm), "3 sagat öň");
    assert_eq!(fmt(&t, Locale::Rus), "3 часов назад");
    assert_eq!(fmt(&t, Locale::Eng), "3 hours ago");
}

#[test]
fn test_absolute_all_locales() {
    let t = "2023-06-15T12:00:00Z";
    assert_eq!(fmt(t, Locale::Tkm), "15 Iýun, 2023");
    assert_eq!(fmt(t, Locale::Rus), "15 Июнь, 2023");
    assert_eq!(fmt(t, Locale::Eng), "15 June, 2023");
}

#[test]
fn test_minutes_are_rounded() {
    // Half a minute rounds up
    assert_eq!(
        fmt(&ago(Duration::milliseconds(29_999)), Locale::Eng),
        "right now"
    );
    assert_eq!(fmt(&ago(Duration::seconds(30)), Locale::Eng), "1 minutes ago");
    assert_eq!(fmt(&ago(Duration::seconds(150)), Locale::Eng), "3 minutes ago");
}

#[test]
fn test_hours_are_floored() {
    let t = ago(Duration::minutes(119));
    assert_eq!(fmt(&t, Locale::Eng), "1 hours ago");
}

#[test]
fn test_boundary_59_minutes() {
    assert_eq!(fmt(&ago(Duration::minutes(59)), Locale::Eng), "59 minutes ago");
}

#[test]
fn test_boundary_rounded_60_minutes_is_hours_bucket() {
    assert_eq!(fmt(&ago(Duration::minutes(60)), Locale::Eng), "1 hours ago");
    // 59m30s rounds to 60 minutes but floors to 0 hours
    let t = ago(Duration::seconds(59 * 60 + 30));
    assert_eq!(fmt(&t, Locale::Eng), "0 hours ago");
}

#[test]
fn test_boundary_23_hours() {
    let t = ago(Duration::hours(23) + Duration::minutes(59));
    assert_eq!(fmt(&t, Locale::Eng), "23 hours ago");
}

#[test]
fn test_boundary_24_hours_is_absolute() {
    assert_eq!(fmt(&ago(Duration::hours(24)), Locale::Eng), "9 January, 2024");
}

#[test]
fn test_future_timestamp_is_absolute() {
    assert_eq!(fmt("2024-01-10T10:00:01", Locale::Eng), "10 January, 2024");
    assert_eq!(fmt("2025-03-02T08:00:00Z", Locale::Rus), "2 Март, 2025");
}

#[test]
fn test_is_deterministic_for_fixed_now() {
    let t = "2024-01-10T07:30:00";
    assert_eq!(fmt(t, Locale::Tkm), fmt(t, Locale::Tkm));
}

#[test]
fn test_calendar_fields_use_evaluation_zone() {
    // 2024-01-08T22:00Z is already the 9th at UTC+5
    let tz = FixedOffset::east_opt(5 * 3600).unwrap();
    let now = tz.with_ymd_and_hms(2024, 1, 12, 0, 0, 0).unwrap();
    let out = created_at_at("2024-01-08T22:00:00Z", Locale::Eng, now).unwrap();
    assert_eq!(out, "9 January, 2024");
}

#[test]
fn test_invalid_timestamp_is_error() {
    let err = created_at_at("not a date", Locale::Eng, now()).unwrap_err();
    assert!(matches!(err, FormatError::InvalidInput(_)));
}

#[test]
fn test_created_at_uses_local_clock() {
    let t = (chrono::Local::now() - Duration::minutes(5)).to_rfc3339();
    assert_eq!(created_at(&t, Locale::Eng).unwrap(), "5 minutes ago");
}

#[test]
fn test_classify_buckets() {
    let n = now();
    assert_eq!(
        RelativeBucket::classify(&(n + Duration::seconds(1)), &n),
        RelativeBucket::Future
    );
    assert_eq!(RelativeBucket::classify(&n, &n), RelativeBucket::JustNow);
    assert_eq!(
        RelativeBucket::classify(&(n - Duration::minutes(5)), &n),
        RelativeBucket::Minutes(5)
    );
    assert_eq!(
        RelativeBucket::classify(&(n - Duration::hours(5)), &n),
        RelativeBucket::Hours(5)
    );
    assert_eq!(
        RelativeBucket::classify(&(n - Duration::days(2)), &n),
        RelativeBucket::Absolute
    );
}
