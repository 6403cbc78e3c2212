// File: ./src/model/mod.rs
pub mod date;
pub mod display;
pub mod item;
pub mod parser;
pub mod person;
pub mod recurrence;

pub use date::{DateFormatter, IcsDate};
pub use display::{EventDisplay, EventView, FormatOptions, PersonDisplay};
pub use item::{Event, EventStatus, ParticipantRole, ParticipationStatus, Person};
pub use recurrence::RecurrenceRule;
