// File: ./tests/date_format_tests.rs
use chrono_tz::Tz;
use icsprose::model::date::format_ics_date;
use icsprose::model::{DateFormatter, IcsDate};

#[test]
fn test_utc_date_time() {
    assert_eq!(
        format_ics_date("20240115T140000Z"),
        "Monday, January 15, 2024 at 02:00 PM UTC"
    );
}

#[test]
fn test_date_only_has_no_time() {
    assert_eq!(format_ics_date("20240704"), "Thursday, July 4, 2024");
}

#[test]
fn test_floating_time_defaults_to_utc() {
    assert_eq!(
        format_ics_date("20240115T093000"),
        "Monday, January 15, 2024 at 09:30 AM UTC"
    );
}

#[test]
fn test_floating_time_in_configured_zone() {
    let dates = DateFormatter::new(Tz::America__New_York);
    let value = IcsDate::parse("20240115T140000");
    assert_eq!(
        dates.format(&value),
        "Monday, January 15, 2024 at 09:00 AM EST"
    );
}

#[test]
fn test_utc_marker_ignores_configured_zone() {
    let dates = DateFormatter::new(Tz::Europe__Paris);
    let value = IcsDate::parse("20240115T140000Z");
    assert_eq!(
        dates.format(&value),
        "Monday, January 15, 2024 at 02:00 PM UTC"
    );
}

#[test]
fn test_date_only_is_not_shifted() {
    let dates = DateFormatter::new(Tz::Pacific__Auckland);
    assert_eq!(
        dates.format(&IcsDate::parse("20241231")),
        "Tuesday, December 31, 2024"
    );
}

#[test]
fn test_midnight_and_noon() {
    assert_eq!(
        format_ics_date("20240301T000000Z"),
        "Friday, March 1, 2024 at 12:00 AM UTC"
    );
    assert_eq!(
        format_ics_date("20240301T120000Z"),
        "Friday, March 1, 2024 at 12:00 PM UTC"
    );
}

#[test]
fn test_invalid_values_render_verbatim() {
    for raw in ["not-a-date", "20241345", "2024", "20240115T25", ""] {
        assert_eq!(IcsDate::parse(raw), IcsDate::Unparsed(raw.to_string()));
        assert_eq!(format_ics_date(raw), raw);
    }
}

#[test]
fn test_has_time() {
    assert!(IcsDate::parse("20240115T140000Z").has_time());
    assert!(!IcsDate::parse("20240115").has_time());
    assert!(!IcsDate::parse("garbage").has_time());
}
