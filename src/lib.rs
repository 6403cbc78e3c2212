// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod paths;

pub use convert::{
    convert_ics_bytes, convert_ics_bytes_to_json, convert_ics_to_json,
    convert_ics_to_readable_text, convert_ics_with_options, parse_ics_for_llm,
};
pub use error::{IcsError, Result};
pub use model::parser::parse_events;
