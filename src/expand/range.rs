use crate::error::{InvalidReason, Result};
use crate::field::FieldSpec;

use super::{invalid, number};

/// `start-end`, split on the first `-`. Both ends inclusive; `start < end`.
pub fn expand(spec: &FieldSpec, token: &str) -> Result<Vec<u32>> {
    let (start, end) = token.split_once('-').unwrap_or((token, ""));
    let start = number(spec, token, start)?;
    let end = number(spec, token, end)?;
    if start < spec.min || end > spec.max {
        return Err(invalid(spec, token, InvalidReason::RangeOutOfBounds {
            start,
            end,
            min: spec.min,
            max: spec.max,
        }));
    }
    if start >= end {
        return Err(invalid(spec, token, InvalidReason::RangeNotAscending { start, end }));
    }
    Ok((start..=end).collect())
}
