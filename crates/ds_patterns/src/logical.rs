//! Logical combinators: AND, OR, NOT.

use std::sync::Arc;

use ds_value::Value;
use tracing::trace;

use crate::extract::{extract_sequence, Extract, MatchConfig};
use crate::{Bindings, ExtractResult, Pattern};

/// Every operand must match the same value; bindings thread left to right.
pub(crate) fn extract_all(
    operands: &[Arc<Pattern>],
    cfg: MatchConfig,
    value: &Value,
    previous: &Bindings,
) -> ExtractResult {
    extract_sequence(cfg, operands.iter().map(|p| (&**p, value)), previous)
}

/// The first operand that matches wins. Each operand starts from `previous`,
/// so a failed alternative leaves nothing behind.
pub(crate) fn extract_any(
    operands: &[Arc<Pattern>],
    cfg: MatchConfig,
    value: &Value,
    previous: &Bindings,
) -> ExtractResult {
    for (index, operand) in operands.iter().enumerate() {
        if let Some(extracted) = operand.extract_in(cfg, value, previous)? {
            trace!(index, "alternative matched");
            return Ok(Some(extracted));
        }
    }
    Ok(None)
}

/// Matches iff `inner` does not. Captures made inside are discarded.
pub(crate) fn extract_not(
    inner: &Pattern,
    cfg: MatchConfig,
    value: &Value,
    previous: &Bindings,
) -> ExtractResult {
    Ok(match inner.extract_in(cfg, value, previous)? {
        Some(_) => None,
        None => Some(previous.clone()),
    })
}
