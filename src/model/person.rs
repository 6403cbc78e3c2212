// File: ./src/model/person.rs
//! ATTENDEE / ORGANIZER decoding.
//!
//! The fragments (`CN=`, `mailto:`, `PARTSTAT=`, `ROLE=`) are searched
//! case-insensitively; the first match wins and runs up to the next `;` or `:`.

use crate::model::item::{ParticipantRole, ParticipationStatus, Person};
use once_cell::sync::Lazy;
use regex::Regex;

static CN_RE: Lazy<Regex> = Lazy::new(|| param_pattern("CN="));
static MAILTO_RE: Lazy<Regex> = Lazy::new(|| param_pattern("mailto:"));
static PARTSTAT_RE: Lazy<Regex> = Lazy::new(|| param_pattern("PARTSTAT="));
static ROLE_RE: Lazy<Regex> = Lazy::new(|| param_pattern("ROLE="));

fn param_pattern(prefix: &str) -> Regex {
    Regex::new(&format!("(?i){}([^;:]+)", regex::escape(prefix)))
        .expect("escaped literal prefix is a valid pattern")
}

/// First capture of `pattern` in `raw`, if any.
pub fn capture_param<'a>(pattern: &Regex, raw: &'a str) -> Option<&'a str> {
    pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn email_from(address: &str) -> String {
    match capture_param(&MAILTO_RE, address) {
        Some(email) => email.to_string(),
        None => match address.rfind(':') {
            Some(idx) => address[idx + 1..].to_string(),
            None => address.to_string(),
        },
    }
}

fn name_from(fields: &str) -> Option<String> {
    capture_param(&CN_RE, fields).map(|n| n.trim_matches('"').to_string())
}

/// Attendee from a content line: `CN=`, `PARTSTAT=` and `ROLE=` are looked up
/// in `fields` (parameters and value), the address only in `value`, so
/// `DELEGATED-FROM` or `SENT-BY` URIs never stand in for it.
pub fn attendee_from_parts(fields: &str, value: &str) -> Person {
    Person {
        name: name_from(fields),
        email: email_from(value),
        status: capture_param(&PARTSTAT_RE, fields).map(ParticipationStatus::from_ics),
        role: capture_param(&ROLE_RE, fields).map(ParticipantRole::from_ics),
    }
}

pub fn organizer_from_parts(fields: &str, value: &str) -> Person {
    Person {
        name: name_from(fields),
        email: email_from(value),
        status: None,
        role: None,
    }
}

/// Attendee from a single free-form string; every fragment is searched in it.
pub fn parse_attendee(raw: &str) -> Person {
    attendee_from_parts(raw, raw)
}

pub fn parse_organizer(raw: &str) -> Person {
    organizer_from_parts(raw, raw)
}
