use crate::error::{Error, InvalidReason, Result};
use crate::field::FieldSpec;

use super::{invalid, number};

/// `*/k`: `min, min+k, min+2k, ...` while strictly below `max`.
///
/// `k` itself must lie in `[min, max]`, and the field's `max` is never part of
/// the output even when the sequence lands on it.
pub fn expand(spec: &FieldSpec, token: &str) -> Result<Vec<u32>> {
    let (prefix, text) = token.split_once("*/").unwrap_or((token, ""));
    if !prefix.is_empty() {
        return Err(Error::MalformedNumber {
            field: spec.name,
            token: token.to_string(),
            text: token.to_string(),
        });
    }
    let step = number(spec, token, text)?;
    if !spec.contains(step) {
        return Err(invalid(spec, token, InvalidReason::StepOutOfBounds {
            step,
            min: spec.min,
            max: spec.max,
        }));
    }
    if step == 0 {
        return Err(invalid(spec, token, InvalidReason::ZeroStep));
    }
    Ok((spec.min..spec.max).step_by(step as usize).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{DAY_OF_MONTH, DAY_OF_WEEK, HOUR, MINUTE, MONTH};

    #[test]
    fn every_kth_from_min() {
        assert_eq!(expand(&MINUTE, "*/15").unwrap(), vec![0, 15, 30, 45]);
        assert_eq!(expand(&HOUR, "*/6").unwrap(), vec![0, 6, 12, 18]);
        assert_eq!(expand(&MONTH, "*/3").unwrap(), vec![1, 4, 7, 10]);
    }

    #[test]
    fn upper_bound_is_excluded() {
        // 0, 2, 4, 6 would land on max
        assert_eq!(expand(&DAY_OF_WEEK, "*/2").unwrap(), vec![0, 2, 4]);
        assert_eq!(expand(&MINUTE, "*/1").unwrap(), (0..59).collect::<Vec<_>>());
        assert_eq!(expand(&DAY_OF_MONTH, "*/31").unwrap(), vec![1]);
        assert_eq!(expand(&MINUTE, "*/59").unwrap(), vec![0]);
    }

    #[test]
    fn step_must_be_within_field_bounds() {
        assert!(matches!(
            expand(&MINUTE, "*/60"),
            Err(Error::InvalidField { reason: InvalidReason::StepOutOfBounds { .. }, .. })
        ));
        assert!(matches!(
            expand(&MONTH, "*/13"),
            Err(Error::InvalidField { reason: InvalidReason::StepOutOfBounds { .. }, .. })
        ));
        assert!(matches!(
            expand(&MONTH, "*/0"),
            Err(Error::InvalidField { reason: InvalidReason::StepOutOfBounds { .. }, .. })
        ));
        assert!(matches!(
            expand(&MINUTE, "*/0"),
            Err(Error::InvalidField { reason: InvalidReason::ZeroStep, .. })
        ));
    }

    #[test]
    fn malformed_steps() {
        for token in ["*/", "*/x", "5*/3", "*/5,10"] {
            assert!(
                matches!(expand(&MINUTE, token), Err(Error::MalformedNumber { .. })),
                "{token}"
            );
        }
    }
}
