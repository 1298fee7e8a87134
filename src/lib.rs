//! Expand cron-style time specifications into the explicit values each field
//! matches, and render them as a table.
pub mod cli;
pub mod error;
pub mod expand;
pub mod field;
pub mod logging;
pub mod render;
pub mod schedule;

pub use error::{Error, Result};
pub use expand::{expand, ExpandedField};
pub use field::FieldSpec;
pub use schedule::{parse_line, parse_schedule, Schedule};
