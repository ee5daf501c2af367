//! Fatal pattern-tree errors.
//!
//! A mismatch is not an error: extraction reports it as `Ok(None)`.
//! `IllegalPatternError` is reserved for trees that are ill-formed, and it
//! always propagates out of the whole match.

use ds_value::Name;
use thiserror::Error;

use crate::Bindings;

/// Result of running the extraction protocol on one pattern.
///
/// - `Ok(Some(bindings))`: matched; `bindings` is the previous accumulator
///   plus everything captured by this pattern and its children.
/// - `Ok(None)`: did not match. No bindings are exposed.
/// - `Err(_)`: the pattern tree itself is invalid.
pub type ExtractResult = Result<Option<Bindings>, IllegalPatternError>;

/// A defect in how a pattern tree was authored.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalPatternError {
    /// A binding pattern's own sub-tree introduced a binding with the same
    /// name on the path that matched.
    #[error("cannot create binding `{name}` of the same name as a binding in the contained pattern")]
    ShadowedBinding { name: Name },
}

impl IllegalPatternError {
    /// The binding name involved in the error.
    pub fn name(&self) -> &Name {
        match self {
            IllegalPatternError::ShadowedBinding { name } => name,
        }
    }
}
