// File: src/model/parser.rs
use crate::error::Result;
use crate::model::date::IcsDate;
use crate::model::item::{Event, EventStatus};
use crate::model::person::{attendee_from_parts, organizer_from_parts};
use crate::model::recurrence::RecurrenceRule;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";

/// Split raw calendar text into logical lines.
///
/// Carriage returns are dropped, then every physical line starting with a
/// space or tab is appended (minus that one character) to the line before it.
/// A continuation with nothing before it is discarded.
pub fn unfold(input: &str) -> Vec<String> {
    let cleaned = input.replace('\r', "");
    let mut lines: Vec<String> = Vec::new();

    for physical in cleaned.split('\n') {
        if let Some(continuation) = physical.strip_prefix([' ', '\t']) {
            match lines.last_mut() {
                Some(prev) => prev.push_str(continuation),
                None => log::trace!("Dropping leading continuation line: '{}'", physical),
            }
        } else {
            lines.push(physical.to_string());
        }
    }

    lines
}

/// One `NAME;PARAMS:VALUE` content line, split at the first colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyLine<'a> {
    pub name: &'a str,
    /// Everything between the name and the colon, without the leading `;`.
    pub params: &'a str,
    pub value: &'a str,
}

impl<'a> PropertyLine<'a> {
    /// `None` for lines without a colon or without a property name.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (head, value) = line.split_once(':')?;
        let (name, params) = head.split_once(';').unwrap_or((head, ""));
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name,
            params,
            value,
        })
    }

    /// Parameters and value joined back together, for the person parsers
    /// which look for `CN=`, `PARTSTAT=` and `ROLE=` on either side.
    /// The address itself is only taken from `value`.
    pub fn params_and_value(&self) -> Cow<'a, str> {
        if self.params.is_empty() {
            Cow::Borrowed(self.value)
        } else {
            Cow::Owned(format!("{}:{}", self.params, self.value))
        }
    }
}

/// Decode TEXT escapes. `\\` must go last so it cannot form new escapes.
pub fn unescape_text(value: &str) -> String {
    value
        .replace("\\n", "\n")
        .replace("\\N", "\n")
        .replace("\\,", ",")
        .replace("\\;", ";")
        .replace("\\\\", "\\")
}

type PropertyHandler = fn(&mut Event, &PropertyLine) -> Result<()>;

fn set_title(event: &mut Event, line: &PropertyLine) -> Result<()> {
    event.title = Some(line.value.to_string());
    Ok(())
}

fn set_description(event: &mut Event, line: &PropertyLine) -> Result<()> {
    event.description = Some(unescape_text(line.value));
    Ok(())
}

fn set_location(event: &mut Event, line: &PropertyLine) -> Result<()> {
    event.location = Some(line.value.to_string());
    Ok(())
}

fn set_start(event: &mut Event, line: &PropertyLine) -> Result<()> {
    event.start_date = Some(IcsDate::parse(line.value));
    Ok(())
}

fn set_end(event: &mut Event, line: &PropertyLine) -> Result<()> {
    event.end_date = Some(IcsDate::parse(line.value));
    Ok(())
}

fn set_created(event: &mut Event, line: &PropertyLine) -> Result<()> {
    event.created = Some(IcsDate::parse(line.value));
    Ok(())
}

fn set_last_modified(event: &mut Event, line: &PropertyLine) -> Result<()> {
    event.last_modified = Some(IcsDate::parse(line.value));
    Ok(())
}

fn set_recurrence(event: &mut Event, line: &PropertyLine) -> Result<()> {
    event.recurrence = Some(RecurrenceRule::parse(line.value)?);
    Ok(())
}

fn add_attendee(event: &mut Event, line: &PropertyLine) -> Result<()> {
    event
        .attendees
        .push(attendee_from_parts(&line.params_and_value(), line.value));
    Ok(())
}

fn set_organizer(event: &mut Event, line: &PropertyLine) -> Result<()> {
    event.organizer = Some(organizer_from_parts(&line.params_and_value(), line.value));
    Ok(())
}

fn set_uid(event: &mut Event, line: &PropertyLine) -> Result<()> {
    event.uid = Some(line.value.to_string());
    Ok(())
}

fn set_status(event: &mut Event, line: &PropertyLine) -> Result<()> {
    event.status = Some(line.value)
        .filter(|v| !v.is_empty())
        .map(EventStatus::from_ics);
    Ok(())
}

/// Property name -> field handler. Names are matched case-sensitively.
static HANDLERS: Lazy<HashMap<&'static str, PropertyHandler>> = Lazy::new(|| {
    let mut handlers: HashMap<&'static str, PropertyHandler> = HashMap::new();
    handlers.insert("SUMMARY", set_title);
    handlers.insert("DESCRIPTION", set_description);
    handlers.insert("LOCATION", set_location);
    handlers.insert("DTSTART", set_start);
    handlers.insert("DTEND", set_end);
    handlers.insert("CREATED", set_created);
    handlers.insert("LAST-MODIFIED", set_last_modified);
    handlers.insert("RRULE", set_recurrence);
    handlers.insert("ATTENDEE", add_attendee);
    handlers.insert("ORGANIZER", set_organizer);
    handlers.insert("UID", set_uid);
    handlers.insert("STATUS", set_status);
    handlers
});

fn apply_line(event: &mut Event, line: &str) -> Result<()> {
    let Some(property) = PropertyLine::parse(line) else {
        log::trace!("Skipping malformed property line: '{}'", line);
        return Ok(());
    };

    match HANDLERS.get(property.name) {
        Some(handler) => handler(event, &property),
        None => {
            event
                .other_properties
                .insert(property.name.to_string(), property.value.to_string());
            Ok(())
        }
    }
}

/// Collect the VEVENT blocks of a sequence of logical lines, in source order.
///
/// Lines outside `BEGIN:VEVENT` / `END:VEVENT` are ignored. An event still
/// open at the end of input (or when another `BEGIN:VEVENT` starts) is dropped.
pub fn extract_events<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Event>> {
    let (events, pending) = lines.iter().try_fold(
        (Vec::new(), None::<Event>),
        |(mut events, current), line| -> Result<(Vec<Event>, Option<Event>)> {
            let line = line.as_ref();
            let next = match (line, current) {
                (BEGIN_EVENT, previous) => {
                    if previous.is_some() {
                        log::debug!("VEVENT restarted before END:VEVENT, dropping the open one");
                    }
                    Some(Event::default())
                }
                (END_EVENT, Some(event)) => {
                    events.push(event);
                    None
                }
                (_, Some(mut event)) => {
                    apply_line(&mut event, line)?;
                    Some(event)
                }
                (_, None) => None,
            };
            Ok((events, next))
        },
    )?;

    if pending.is_some() {
        log::debug!("Input ended inside a VEVENT, dropping it");
    }

    Ok(events)
}

/// Unfold and extract in one go.
pub fn parse_events(input: &str) -> Result<Vec<Event>> {
    extract_events(&unfold(input))
}
