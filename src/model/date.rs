// File: ./src/model/date.rs
//! ICS date and date-time values.
//!
//! Values are decoded positionally (`YYYYMMDD` and `YYYYMMDDTHHMM[SS][Z]`),
//! without scanning for delimiters. Anything that does not yield a real
//! calendar date is kept as [`IcsDate::Unparsed`] and shown verbatim.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IcsDate {
    /// `VALUE=DATE` style, no time of day.
    Date(NaiveDate),
    /// Wall-clock components read from the value; `utc` is set by a trailing `Z`.
    DateTime { value: NaiveDateTime, utc: bool },
    Unparsed(String),
}

fn slice_num(raw: &str, start: usize, end: usize) -> Option<u32> {
    let part = raw.get(start..end)?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl IcsDate {
    pub fn parse(raw: &str) -> Self {
        let parsed = if raw.contains('T') {
            Self::parse_date_time(raw)
        } else {
            Self::parse_date(raw).map(IcsDate::Date)
        };

        parsed.unwrap_or_else(|| {
            log::debug!("Keeping unparseable date value verbatim: '{}'", raw);
            IcsDate::Unparsed(raw.to_string())
        })
    }

    fn parse_date(raw: &str) -> Option<NaiveDate> {
        let year = slice_num(raw, 0, 4)?;
        let month = slice_num(raw, 4, 6)?;
        let day = slice_num(raw, 6, 8)?;
        NaiveDate::from_ymd_opt(year as i32, month, day)
    }

    fn parse_date_time(raw: &str) -> Option<IcsDate> {
        let date = Self::parse_date(raw)?;
        let hour = slice_num(raw, 9, 11)?;
        let minute = slice_num(raw, 11, 13)?;
        let second = if raw.len() >= 15 {
            slice_num(raw, 13, 15)?
        } else {
            0
        };
        let time = NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(IcsDate::DateTime {
            value: date.and_time(time),
            utc: raw.ends_with('Z'),
        })
    }

    pub fn has_time(&self) -> bool {
        matches!(self, IcsDate::DateTime { .. })
    }
}

/// Renders [`IcsDate`] values as long-form English dates.
///
/// Date-times are treated as UTC instants. Values marked with `Z` are shown
/// in UTC, the rest in `local_zone` with that zone's abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    pub local_zone: Tz,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self { local_zone: Tz::UTC }
    }
}

const DATE_FORMAT: &str = "%A, %B %-d, %Y";
const DATE_TIME_FORMAT: &str = "%A, %B %-d, %Y at %I:%M %p %Z";

impl DateFormatter {
    pub fn new(local_zone: Tz) -> Self {
        Self { local_zone }
    }

    pub fn format(&self, date: &IcsDate) -> String {
        match date {
            IcsDate::Date(d) => d.format(DATE_FORMAT).to_string(),
            IcsDate::DateTime { value, utc: true } => Utc
                .from_utc_datetime(value)
                .format(DATE_TIME_FORMAT)
                .to_string(),
            IcsDate::DateTime { value, utc: false } => self
                .local_zone
                .from_utc_datetime(value)
                .format(DATE_TIME_FORMAT)
                .to_string(),
            IcsDate::Unparsed(raw) => raw.clone(),
        }
    }
}

/// Parse and format a raw ICS date with UTC as the local zone.
pub fn format_ics_date(raw: &str) -> String {
    DateFormatter::default().format(&IcsDate::parse(raw))
}
