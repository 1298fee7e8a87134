use crate::error::Result;
use crate::field::FieldSpec;

use super::bounded;

/// `a,b,c`: each member in bounds, kept in input order (no sort, no dedup).
pub fn expand(spec: &FieldSpec, token: &str) -> Result<Vec<u32>> {
    token
        .split(',')
        .map(|part| bounded(spec, token, part))
        .collect()
}
