// File: ./src/model/recurrence.rs
use crate::error::{IcsError, Result};
use crate::model::date::{DateFormatter, IcsDate};
use chrono::{Month, Weekday};
use serde::Serialize;

const WEEKDAY_CODES: [(&str, Weekday); 7] = [
    ("MO", Weekday::Mon),
    ("TU", Weekday::Tue),
    ("WE", Weekday::Wed),
    ("TH", Weekday::Thu),
    ("FR", Weekday::Fri),
    ("SA", Weekday::Sat),
    ("SU", Weekday::Sun),
];

/// Largest |ordinal| RFC 5545 allows in BYDAY (week of year).
const MAX_WEEKDAY_ORDINAL: u64 = 53;
const MAX_MONTH_DAY: u64 = 31;

pub fn weekday_from_code(code: &str) -> Option<Weekday> {
    WEEKDAY_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, day)| *day)
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn ordinal_suffix(n: u64) -> &'static str {
    match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th ... 11th, 12th, 13th ... 21st.
pub fn ordinal(n: i64) -> String {
    format!("{}{}", n, ordinal_suffix(n.unsigned_abs()))
}

/// Ordinal that also covers RRULE's negative (from the end) positions.
fn signed_ordinal(n: i64) -> String {
    match n {
        -1 => "last".to_string(),
        n if n < 0 => {
            let back = n.unsigned_abs();
            format!("{}{} to last", back, ordinal_suffix(back))
        }
        n => ordinal(n),
    }
}

/// Parse a signed list position, rejecting zero and anything beyond `max`.
fn parse_position(entry: &str, raw: &str, max: u64) -> Result<i64> {
    let n = raw.trim().parse::<i64>().map_err(|_| {
        IcsError::invalid_recurrence(entry, format!("'{}' is not a number", raw))
    })?;
    if n == 0 || n.unsigned_abs() > max {
        return Err(IcsError::invalid_recurrence(
            entry,
            format!("position must be 1 to {} from either end", max),
        ));
    }
    Ok(n)
}

/// Join items as "A", "A and B" or "A, B, and C".
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|s| s.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct DaySpec {
    /// `2` in `2MO`, `-1` in `-1FR`.
    pub ordinal: Option<i64>,
    pub weekday: Weekday,
}

impl DaySpec {
    fn parse(entry: &str) -> Result<Self> {
        let entry = entry.trim();
        let split = entry.len().saturating_sub(2);
        let (prefix, code) = match (entry.get(..split), entry.get(split..)) {
            (Some(prefix), Some(code)) => (prefix, code),
            _ => return Err(IcsError::invalid_recurrence(entry, "missing weekday code")),
        };

        let weekday = weekday_from_code(code).ok_or_else(|| {
            IcsError::invalid_recurrence(entry, format!("unknown weekday code '{}'", code))
        })?;

        let ordinal = if prefix.is_empty() {
            None
        } else {
            Some(parse_position(entry, prefix, MAX_WEEKDAY_ORDINAL)?)
        };

        Ok(Self { ordinal, weekday })
    }

    fn describe(&self) -> String {
        let name = weekday_name(self.weekday);
        match self.ordinal {
            Some(n) => format!("the {} {}", signed_ordinal(n), name),
            None => name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RulePart {
    Frequency(String),
    Interval(String),
    Count(String),
    Until(IcsDate),
    ByDay(Vec<DaySpec>),
    ByMonthDay(Vec<i64>),
    ByMonth(Vec<Month>),
}

impl RulePart {
    fn parse(key: &str, value: &str) -> Result<Option<Self>> {
        let part = match key {
            "FREQ" => RulePart::Frequency(value.to_string()),
            "INTERVAL" => RulePart::Interval(value.to_string()),
            "COUNT" => RulePart::Count(value.to_string()),
            "UNTIL" => RulePart::Until(IcsDate::parse(value)),
            "BYDAY" => RulePart::ByDay(
                value
                    .split(',')
                    .map(DaySpec::parse)
                    .collect::<Result<Vec<_>>>()?,
            ),
            "BYMONTHDAY" => RulePart::ByMonthDay(
                value
                    .split(',')
                    .map(|d| parse_position(d, d, MAX_MONTH_DAY))
                    .collect::<Result<Vec<_>>>()?,
            ),
            "BYMONTH" => RulePart::ByMonth(
                value
                    .split(',')
                    .map(|m| {
                        m.trim()
                            .parse::<u8>()
                            .ok()
                            .and_then(|n| Month::try_from(n).ok())
                            .ok_or_else(|| {
                                IcsError::invalid_recurrence(m, "month must be 1 to 12")
                            })
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            _ => return Ok(None),
        };
        Ok(Some(part))
    }

    /// Phrase for this part, `None` when it adds nothing (INTERVAL=1).
    fn describe(&self, dates: &DateFormatter) -> Option<String> {
        match self {
            RulePart::Frequency(freq) => Some(format!("Repeats {}", freq.to_lowercase())),
            RulePart::Interval(n) if n == "1" => None,
            RulePart::Interval(n) => Some(format!("every {}", n)),
            RulePart::Count(n) => Some(format!("for {} occurrences", n)),
            RulePart::Until(date) => Some(format!("until {}", dates.format(date))),
            RulePart::ByDay(days) => {
                let names: Vec<String> = days.iter().map(DaySpec::describe).collect();
                Some(format!("on {}", format_list(&names)))
            }
            RulePart::ByMonthDay(days) => {
                let ordinals: Vec<String> = days.iter().map(|d| signed_ordinal(*d)).collect();
                Some(format!("on the {} of the month", format_list(&ordinals)))
            }
            RulePart::ByMonth(months) => {
                let names: Vec<&str> = months.iter().map(Month::name).collect();
                Some(format!("in {}", format_list(&names)))
            }
        }
    }
}

/// A decoded RRULE. Only the parts with a wording are kept, in source order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct RecurrenceRule {
    pub raw: String,
    pub parts: Vec<RulePart>,
}

impl RecurrenceRule {
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = Vec::new();
        for item in raw.split(';') {
            let Some((key, value)) = item.split_once('=') else {
                continue;
            };
            if let Some(part) = RulePart::parse(key, value)? {
                parts.push(part);
            }
        }
        Ok(Self {
            raw: raw.to_string(),
            parts,
        })
    }

    pub fn describe(&self, dates: &DateFormatter) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.describe(dates))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Describe a raw RRULE value, formatting UNTIL dates in UTC.
pub fn describe_rrule(raw: &str) -> Result<String> {
    Ok(RecurrenceRule::parse(raw)?.describe(&DateFormatter::default()))
}
