// File: ./src/model/display.rs
use crate::model::date::DateFormatter;
use crate::model::item::{Event, Person};
use serde::Serialize;
use std::collections::BTreeMap;

pub const NO_EVENTS_MESSAGE: &str = "No calendar events found in this ICS file.";

/// Rendering knobs shared by the text and JSON outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub dates: DateFormatter,
    /// Also show CREATED, LAST-MODIFIED and the unmapped properties.
    pub include_metadata: bool,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub trait EventDisplay {
    fn when_text(&self, dates: &DateFormatter) -> Option<String>;
    fn recurrence_text(&self, dates: &DateFormatter) -> Option<String>;
}

impl EventDisplay for Event {
    fn when_text(&self, dates: &DateFormatter) -> Option<String> {
        let start = dates.format(self.start_date.as_ref()?);
        match &self.end_date {
            Some(end) => Some(format!("{} to {}", start, dates.format(end))),
            None => Some(start),
        }
    }

    fn recurrence_text(&self, dates: &DateFormatter) -> Option<String> {
        self.recurrence
            .as_ref()
            .map(|rule| rule.describe(dates))
            .filter(|text| !text.is_empty())
    }
}

pub trait PersonDisplay {
    fn organizer_label(&self) -> String;
    fn attendee_label(&self) -> String;
}

impl PersonDisplay for Person {
    fn organizer_label(&self) -> String {
        match non_empty(&self.name) {
            Some(name) => format!("{} <{}>", name, self.email),
            None => format!("<{}>", self.email),
        }
    }

    fn attendee_label(&self) -> String {
        let mut s = non_empty(&self.name).unwrap_or_default().to_string();
        if !self.email.is_empty() {
            if s.is_empty() {
                s.push_str(&self.email);
            } else {
                s.push_str(&format!(" <{}>", self.email));
            }
        }
        if let Some(role) = &self.role {
            s.push_str(&format!(" ({})", role));
        }
        if let Some(status) = &self.status {
            s.push_str(&format!(" - {}", status));
        }
        s
    }
}

fn format_event(out: &mut String, number: usize, event: &Event, options: &FormatOptions) {
    let dates = &options.dates;

    out.push_str(&format!("## Event {}: {}\n\n", number, event.display_title()));

    if let Some(when) = event.when_text(dates) {
        out.push_str(&format!("**When**: {}\n\n", when));
    }
    if let Some(location) = non_empty(&event.location) {
        out.push_str(&format!("**Where**: {}\n\n", location));
    }
    if let Some(description) = non_empty(&event.description) {
        out.push_str(&format!("**Description**:\n{}\n\n", description));
    }
    if let Some(recurrence) = event.recurrence_text(dates) {
        out.push_str(&format!("**Recurrence**: {}\n\n", recurrence));
    }
    if let Some(status) = &event.status {
        out.push_str(&format!("**Status**: {}\n\n", status));
    }
    if let Some(organizer) = &event.organizer {
        out.push_str(&format!("**Organizer**: {}\n\n", organizer.organizer_label()));
    }
    if !event.attendees.is_empty() {
        out.push_str("**Attendees**:\n");
        for attendee in &event.attendees {
            out.push_str(&format!("- {}\n", attendee.attendee_label()));
        }
        out.push('\n');
    }
    if let Some(uid) = non_empty(&event.uid) {
        out.push_str(&format!("**UID**: {}\n\n", uid));
    }

    if options.include_metadata {
        if let Some(created) = &event.created {
            out.push_str(&format!("**Created**: {}\n\n", dates.format(created)));
        }
        if let Some(modified) = &event.last_modified {
            out.push_str(&format!("**Last Modified**: {}\n\n", dates.format(modified)));
        }
        if !event.other_properties.is_empty() {
            out.push_str("**Other Properties**:\n");
            for (key, value) in &event.other_properties {
                out.push_str(&format!("- {}: {}\n", key, value));
            }
            out.push('\n');
        }
    }
}

/// Render events as a Markdown document, or the fixed "no events" message.
pub fn format_events(events: &[Event], options: &FormatOptions) -> String {
    if events.is_empty() {
        return NO_EVENTS_MESSAGE.to_string();
    }

    let mut out = String::from("# Calendar Events\n\n");
    out.push_str(&format!(
        "Found {} event{} in the calendar file.\n\n",
        events.len(),
        if events.len() > 1 { "s" } else { "" }
    ));

    for (index, event) in events.iter().enumerate() {
        format_event(&mut out, index + 1, event, options);
        if index + 1 < events.len() {
            out.push_str("---\n\n");
        }
    }

    out
}

fn no_people(people: &&[Person]) -> bool {
    people.is_empty()
}

/// JSON-friendly rendering of an event: same wording as the text output.
#[derive(Debug, Serialize)]
pub struct EventView<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<&'a Person>,
    #[serde(skip_serializing_if = "no_people")]
    pub attendees: &'a [Person],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_properties: Option<&'a BTreeMap<String, String>>,
}

impl<'a> EventView<'a> {
    pub fn new(event: &'a Event, options: &FormatOptions) -> Self {
        let dates = &options.dates;
        let metadata = options.include_metadata;
        Self {
            title: event.display_title(),
            when: event.when_text(dates),
            location: non_empty(&event.location),
            description: non_empty(&event.description),
            recurrence: event.recurrence_text(dates),
            status: event.status.as_ref().map(ToString::to_string),
            organizer: event.organizer.as_ref(),
            attendees: &event.attendees,
            uid: non_empty(&event.uid),
            created: event
                .created
                .as_ref()
                .filter(|_| metadata)
                .map(|d| dates.format(d)),
            last_modified: event
                .last_modified
                .as_ref()
                .filter(|_| metadata)
                .map(|d| dates.format(d)),
            other_properties: Some(&event.other_properties)
                .filter(|props| metadata && !props.is_empty()),
        }
    }
}

pub fn event_views<'a>(events: &'a [Event], options: &FormatOptions) -> Vec<EventView<'a>> {
    events.iter().map(|e| EventView::new(e, options)).collect()
}
