//! Field expansion: turn one raw token into the explicit values it matches.
//!
//! A token is classified into exactly one grammar, checked in this order
//! (first match wins):
//!
//! 1. range     `a-b`
//! 2. step      `*/k`
//! 3. list      `a,b,c`
//! 4. wildcard  `*`
//! 5. single    `n`
//!
//! The order matters: `1-5,7` is a (malformed) range, not a list.
pub mod list;
pub mod range;
pub mod step;

use std::fmt;

use serde::Serialize;

use crate::error::{Error, InvalidReason, Result};
use crate::field::FieldSpec;

/// The values a field matches, in the order its grammar produced them.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpandedField(Vec<u32>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Range,
    Step,
    List,
    Wildcard,
    Single,
}

impl ExpandedField {
    pub fn values(&self) -> &[u32] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn into_values(self) -> Vec<u32> {
        self.0
    }
}

impl fmt::Display for ExpandedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

impl Grammar {
    pub fn classify(token: &str) -> Self {
        if token.contains('-') {
            Grammar::Range
        } else if token.contains("*/") {
            Grammar::Step
        } else if token.contains(',') {
            Grammar::List
        } else if token == "*" {
            Grammar::Wildcard
        } else {
            Grammar::Single
        }
    }
}

pub fn expand(spec: &FieldSpec, token: &str) -> Result<ExpandedField> {
    let grammar = Grammar::classify(token);
    tracing::trace!(field = spec.name, token, ?grammar, "classified token");
    let values = match grammar {
        Grammar::Range => range::expand(spec, token)?,
        Grammar::Step => step::expand(spec, token)?,
        Grammar::List => list::expand(spec, token)?,
        Grammar::Wildcard => spec.all(),
        Grammar::Single => vec![bounded(spec, token, token)?],
    };
    debug_assert!(!values.is_empty());
    tracing::debug!(field = spec.name, token, count = values.len(), "expanded field");
    Ok(ExpandedField(values))
}

// ------------------------------- Helpers --------------------------------- //

/// Parse `text` (a piece of `token`) as a non-negative integer.
pub(crate) fn number(spec: &FieldSpec, token: &str, text: &str) -> Result<u32> {
    text.parse::<u32>().map_err(|_| Error::MalformedNumber {
        field: spec.name,
        token: token.to_string(),
        text: text.to_string(),
    })
}

/// Like [`number`], but the value must also lie within the field's bounds.
pub(crate) fn bounded(spec: &FieldSpec, token: &str, text: &str) -> Result<u32> {
    let value = number(spec, token, text)?;
    if !spec.contains(value) {
        return Err(invalid(spec, token, InvalidReason::ValueOutOfBounds {
            value,
            min: spec.min,
            max: spec.max,
        }));
    }
    Ok(value)
}

pub(crate) fn invalid(spec: &FieldSpec, token: &str, reason: InvalidReason) -> Error {
    Error::InvalidField {
        field: spec.name,
        token: token.to_string(),
        reason,
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{DAY_OF_MONTH, DAY_OF_WEEK, MINUTE, MONTH};

    fn minute(token: &str) -> Result<Vec<u32>> {
        expand(&MINUTE, token).map(ExpandedField::into_values)
    }

    #[test]
    fn precedence_is_range_step_list_wildcard_single() {
        assert_eq!(Grammar::classify("1-5"), Grammar::Range);
        assert_eq!(Grammar::classify("*/15"), Grammar::Step);
        assert_eq!(Grammar::classify("1,2"), Grammar::List);
        assert_eq!(Grammar::classify("*"), Grammar::Wildcard);
        assert_eq!(Grammar::classify("7"), Grammar::Single);
        // mixed tokens fall to the earliest grammar they mention
        assert_eq!(Grammar::classify("1-5,7"), Grammar::Range);
        assert_eq!(Grammar::classify("*/5,10"), Grammar::Step);
        assert_eq!(Grammar::classify("*/2-4"), Grammar::Range);
    }

    #[test]
    fn minute_scenarios() {
        assert_eq!(minute("5").unwrap(), vec![5]);
        assert_eq!(minute("1-5").unwrap(), vec![1, 2, 3, 4, 5]);
        assert!(matches!(minute("1-60"), Err(Error::InvalidField { .. })));
        assert_eq!(minute("*/15").unwrap(), vec![0, 15, 30, 45]);
        assert_eq!(minute("*").unwrap(), (0..=59).collect::<Vec<_>>());
        assert_eq!(minute("1,15,30").unwrap(), vec![1, 15, 30]);
    }

    #[test]
    fn single_value_bounds() {
        for spec in crate::field::FIELDS {
            for n in spec.min..=spec.max {
                let got = expand(&spec, &n.to_string()).unwrap();
                assert_eq!(got.values(), &[n]);
            }
            let over = (spec.max + 1).to_string();
            assert!(matches!(
                expand(&spec, &over),
                Err(Error::InvalidField { reason: InvalidReason::ValueOutOfBounds { .. }, .. })
            ));
        }
        assert!(matches!(
            expand(&MONTH, "0"),
            Err(Error::InvalidField { field: "month", .. })
        ));
    }

    #[test]
    fn wildcard_covers_whole_bound() {
        for spec in crate::field::FIELDS {
            let got = expand(&spec, "*").unwrap();
            assert_eq!(got.len(), (spec.max - spec.min + 1) as usize);
            assert_eq!(got.values().first(), Some(&spec.min));
            assert_eq!(got.values().last(), Some(&spec.max));
        }
    }

    #[test]
    fn malformed_numbers() {
        let err = minute("abc").unwrap_err();
        assert_eq!(err, Error::MalformedNumber {
            field: "minute",
            token: "abc".into(),
            text: "abc".into(),
        });
        assert!(matches!(minute(""), Err(Error::MalformedNumber { .. })));
        assert!(matches!(minute("99999999999"), Err(Error::MalformedNumber { .. })));
        assert!(matches!(minute("**"), Err(Error::MalformedNumber { .. })));
    }

    #[test]
    fn display_is_space_joined() {
        assert_eq!(expand(&DAY_OF_WEEK, "*").unwrap().to_string(), "0 1 2 3 4 5 6");
        assert_eq!(expand(&DAY_OF_MONTH, "7").unwrap().to_string(), "7");
    }
}
