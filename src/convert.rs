// File: ./src/convert.rs
//! Entry points used by prompt builders.
//!
//! The `convert_*` functions never fail: any pipeline error is turned into a
//! short plain-text message that can be spliced into a prompt as-is.

use crate::error::{IcsError, Result};
use crate::model::display::{FormatOptions, event_views, format_events};
use crate::model::parser;

/// Parse ICS text and render it, propagating pipeline errors.
pub fn parse_ics_for_llm(ics: &str, options: &FormatOptions) -> Result<String> {
    let events = parser::parse_events(ics)?;
    log::debug!("Extracted {} event(s) from calendar text", events.len());
    Ok(format_events(&events, options))
}

pub fn error_message(reason: &dyn std::fmt::Display) -> String {
    format!(
        "Error parsing ICS file: {}\n\nPlease check that the ICS file is valid.",
        reason
    )
}

pub fn convert_ics_with_options(ics: &str, options: &FormatOptions) -> String {
    match parse_ics_for_llm(ics, options) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Failed to convert calendar: {}", e);
            error_message(&e)
        }
    }
}

/// Convert with default options (floating times shown in UTC).
pub fn convert_ics_to_readable_text(ics: &str) -> String {
    convert_ics_with_options(ics, &FormatOptions::default())
}

/// The event list as pretty-printed JSON, or the same error text as the
/// prose output.
pub fn convert_ics_to_json(ics: &str, options: &FormatOptions) -> String {
    let events = match parser::parse_events(ics) {
        Ok(events) => events,
        Err(e) => {
            log::warn!("Failed to convert calendar: {}", e);
            return error_message(&e);
        }
    };
    serde_json::to_string_pretty(&event_views(&events, options)).unwrap_or_else(|e| {
        log::warn!("Failed to serialize events: {}", e);
        error_message(&e)
    })
}

fn decode(bytes: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(bytes)?)
}

/// Like [`convert_ics_with_options`] for undecoded input.
pub fn convert_ics_bytes(bytes: &[u8], options: &FormatOptions) -> String {
    match decode(bytes) {
        Ok(ics) => convert_ics_with_options(ics, options),
        Err(e) => utf8_failure(e),
    }
}

/// Like [`convert_ics_to_json`] for undecoded input.
pub fn convert_ics_bytes_to_json(bytes: &[u8], options: &FormatOptions) -> String {
    match decode(bytes) {
        Ok(ics) => convert_ics_to_json(ics, options),
        Err(e) => utf8_failure(e),
    }
}

fn utf8_failure(err: IcsError) -> String {
    log::warn!("Failed to convert calendar: {}", err);
    error_message(&err)
}
