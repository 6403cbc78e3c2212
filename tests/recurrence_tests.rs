// File: ./tests/recurrence_tests.rs
use icsprose::IcsError;
use icsprose::model::recurrence::{describe_rrule, format_list, ordinal};

#[test]
fn test_ordinals() {
    let cases = [
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (11, "11th"),
        (12, "12th"),
        (13, "13th"),
        (21, "21st"),
        (22, "22nd"),
        (101, "101st"),
        (111, "111th"),
        (112, "112th"),
    ];
    for (n, expected) in cases {
        assert_eq!(ordinal(n), expected, "ordinal({})", n);
    }
}

#[test]
fn test_format_list() {
    let empty: [&str; 0] = [];
    assert_eq!(format_list(&empty), "");
    assert_eq!(format_list(&["A"]), "A");
    assert_eq!(format_list(&["A", "B"]), "A and B");
    assert_eq!(format_list(&["A", "B", "C"]), "A, B, and C");
    assert_eq!(format_list(&["A", "B", "C", "D"]), "A, B, C, and D");
}

#[test]
fn test_weekly_by_day() {
    assert_eq!(
        describe_rrule("FREQ=WEEKLY;BYDAY=MO,WE,FR").unwrap(),
        "Repeats weekly on Monday, Wednesday, and Friday"
    );
}

#[test]
fn test_interval_and_count() {
    assert_eq!(
        describe_rrule("FREQ=DAILY;INTERVAL=2;COUNT=10").unwrap(),
        "Repeats daily every 2 for 10 occurrences"
    );
}

#[test]
fn test_interval_one_is_silent() {
    assert_eq!(
        describe_rrule("FREQ=MONTHLY;INTERVAL=1").unwrap(),
        "Repeats monthly"
    );
}

#[test]
fn test_until_uses_date_wording() {
    assert_eq!(
        describe_rrule("FREQ=WEEKLY;UNTIL=20240331T235959Z").unwrap(),
        "Repeats weekly until Sunday, March 31, 2024 at 11:59 PM UTC"
    );
}

#[test]
fn test_ordinal_weekday() {
    assert_eq!(
        describe_rrule("FREQ=MONTHLY;BYDAY=2TU").unwrap(),
        "Repeats monthly on the 2nd Tuesday"
    );
    assert_eq!(
        describe_rrule("FREQ=MONTHLY;BYDAY=-1FR").unwrap(),
        "Repeats monthly on the last Friday"
    );
}

#[test]
fn test_month_days_and_months() {
    assert_eq!(
        describe_rrule("FREQ=YEARLY;BYMONTH=1,7;BYMONTHDAY=1,15").unwrap(),
        "Repeats yearly in January and July on the 1st and 15th of the month"
    );
}

#[test]
fn test_parts_follow_source_order() {
    assert_eq!(
        describe_rrule("COUNT=3;FREQ=DAILY").unwrap(),
        "for 3 occurrences Repeats daily"
    );
}

#[test]
fn test_unknown_and_bare_parts_ignored() {
    assert_eq!(
        describe_rrule("FREQ=WEEKLY;WKST=MO;JUNK").unwrap(),
        "Repeats weekly"
    );
    assert_eq!(describe_rrule("").unwrap(), "");
}

#[test]
fn test_invalid_entries_are_errors() {
    for raw in [
        "FREQ=WEEKLY;BYDAY=XY",
        "FREQ=MONTHLY;BYMONTHDAY=first",
        "FREQ=YEARLY;BYMONTH=13",
    ] {
        let err = describe_rrule(raw).unwrap_err();
        assert!(
            matches!(err, IcsError::InvalidRecurrence { .. }),
            "{} -> {:?}",
            raw,
            err
        );
    }
}
