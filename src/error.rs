//! Error taxonomy for schedule parsing.

/// Why a field's values were rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("range {start}-{end} falls outside {min}-{max}")]
    RangeOutOfBounds { start: u32, end: u32, min: u32, max: u32 },
    #[error("range start {start} must be below its end {end}")]
    RangeNotAscending { start: u32, end: u32 },
    #[error("step {step} falls outside {min}-{max}")]
    StepOutOfBounds { step: u32, min: u32, max: u32 },
    #[error("step must be positive")]
    ZeroStep,
    #[error("value {value} falls outside {min}-{max}")]
    ValueOutOfBounds { value: u32, min: u32, max: u32 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(
        "expected 5 time fields and a command, got {fields} field(s){}",
        empty_command_suffix(.empty_command)
    )]
    Arity { fields: usize, empty_command: bool },

    #[error("invalid {field} `{token}`: `{text}` is not a number")]
    MalformedNumber {
        field: &'static str,
        token: String,
        text: String,
    },

    #[error("invalid {field} `{token}`: {reason}")]
    InvalidField {
        field: &'static str,
        token: String,
        reason: InvalidReason,
    },
}

fn empty_command_suffix(empty_command: &bool) -> &'static str {
    if *empty_command { " and an empty command" } else { "" }
}

impl Error {
    /// Short stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Arity { .. } => "arity",
            Error::MalformedNumber { .. } => "malformed_number",
            Error::InvalidField { .. } => "invalid_field",
        }
    }

    /// Name of the field at fault, if the error belongs to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::Arity { .. } => None,
            Error::MalformedNumber { field, .. } | Error::InvalidField { field, .. } => Some(*field),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
