// File: ./src/model/item.rs
use crate::model::date::IcsDate;
use crate::model::recurrence::RecurrenceRule;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use strum::EnumString;

// --- CONTROLLED VOCABULARIES ---
// Parsed from the raw ICS token, displayed as the human label.
// `Other` is not parseable by strum; `from_ics` keeps unknown tokens in it.

#[derive(Debug, Clone, Eq, PartialEq, EnumString)]
pub enum EventStatus {
    #[strum(serialize = "CONFIRMED")]
    Confirmed,
    #[strum(serialize = "TENTATIVE")]
    Tentative,
    #[strum(serialize = "CANCELLED")]
    Cancelled,
    #[strum(disabled)]
    Other(String),
}

impl EventStatus {
    pub fn from_ics(raw: &str) -> Self {
        raw.parse()
            .unwrap_or_else(|_| Self::Other(raw.to_string()))
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStatus::Confirmed => write!(f, "Confirmed"),
            EventStatus::Tentative => write!(f, "Tentative"),
            EventStatus::Cancelled => write!(f, "Cancelled"),
            EventStatus::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Attendee PARTSTAT.
#[derive(Debug, Clone, Eq, PartialEq, EnumString)]
pub enum ParticipationStatus {
    #[strum(serialize = "ACCEPTED")]
    Accepted,
    #[strum(serialize = "DECLINED")]
    Declined,
    #[strum(serialize = "TENTATIVE")]
    Tentative,
    #[strum(serialize = "NEEDS-ACTION")]
    NeedsAction,
    #[strum(serialize = "DELEGATED")]
    Delegated,
    #[strum(disabled)]
    Other(String),
}

impl ParticipationStatus {
    pub fn from_ics(raw: &str) -> Self {
        raw.parse()
            .unwrap_or_else(|_| Self::Other(raw.to_string()))
    }
}

impl fmt::Display for ParticipationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipationStatus::Accepted => write!(f, "Accepted"),
            ParticipationStatus::Declined => write!(f, "Declined"),
            ParticipationStatus::Tentative => write!(f, "Tentative"),
            ParticipationStatus::NeedsAction => write!(f, "Needs Action"),
            ParticipationStatus::Delegated => write!(f, "Delegated"),
            ParticipationStatus::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Attendee ROLE.
#[derive(Debug, Clone, Eq, PartialEq, EnumString)]
pub enum ParticipantRole {
    #[strum(serialize = "REQ-PARTICIPANT")]
    Required,
    #[strum(serialize = "OPT-PARTICIPANT")]
    Optional,
    #[strum(serialize = "NON-PARTICIPANT")]
    NonParticipant,
    #[strum(serialize = "CHAIR")]
    Chair,
    #[strum(disabled)]
    Other(String),
}

impl ParticipantRole {
    pub fn from_ics(raw: &str) -> Self {
        raw.parse()
            .unwrap_or_else(|_| Self::Other(raw.to_string()))
    }
}

impl fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantRole::Required => write!(f, "Required"),
            ParticipantRole::Optional => write!(f, "Optional"),
            ParticipantRole::NonParticipant => write!(f, "Non-Participant"),
            ParticipantRole::Chair => write!(f, "Chair"),
            ParticipantRole::Other(raw) => write!(f, "{}", raw),
        }
    }
}

macro_rules! serialize_as_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }
        )*
    };
}

serialize_as_label!(EventStatus, ParticipationStatus, ParticipantRole);

// --- PEOPLE ---

/// An ATTENDEE or ORGANIZER. `status` and `role` are only ever set for attendees.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ParticipationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ParticipantRole>,
}

// --- EVENT ---

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Event {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<IcsDate>,
    pub end_date: Option<IcsDate>,
    pub created: Option<IcsDate>,
    pub last_modified: Option<IcsDate>,
    pub recurrence: Option<RecurrenceRule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<Person>,
    pub organizer: Option<Person>,
    pub uid: Option<String>,
    pub status: Option<EventStatus>,
    /// Properties without a dedicated field, last value wins.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub other_properties: BTreeMap<String, String>,
}

impl Event {
    /// Title to show in headings; empty summaries count as missing.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled Event")
    }
}
