//! The extraction protocol.
//!
//! Every pattern variant implements [`Extract`]. A composite variant calls
//! `extract_in` on its children one at a time, in pattern order, feeding each
//! child the accumulator produced by the previous one. Later children can
//! therefore check their captures against earlier ones, and which child
//! reports an error first is deterministic.

use ds_value::{Equality, Value};

use crate::{Bindings, ExtractResult, Pattern};

/// Settings that must stay fixed for a whole match attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchConfig {
    /// Used for literal patterns and for repeated-binding checks alike.
    pub equality: Equality,
}

impl MatchConfig {
    pub fn with_equality(equality: Equality) -> Self {
        MatchConfig { equality }
    }
}

/// Test a value against a pattern and extend the accumulator.
///
/// Implementations must be pure: the same `(cfg, value, previous)` always
/// gives the same result, and `previous` is never modified (it cannot be;
/// `Bindings` is persistent).
pub trait Extract {
    fn extract_in(&self, cfg: MatchConfig, value: &Value, previous: &Bindings) -> ExtractResult;
}

/// Thread `previous` through `children` left to right, pairing each child
/// with its value. Stops at the first mismatch or error.
pub(crate) fn extract_sequence<'p, 'v, I>(
    cfg: MatchConfig,
    children: I,
    previous: &Bindings,
) -> ExtractResult
where
    I: IntoIterator<Item = (&'p Pattern, &'v Value)>,
{
    let mut acc = previous.clone();
    for (child, value) in children {
        match child.extract_in(cfg, value, &acc)? {
            Some(next) => acc = next,
            None => return Ok(None),
        }
    }
    Ok(Some(acc))
}
