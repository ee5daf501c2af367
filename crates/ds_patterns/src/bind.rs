//! Binding patterns: capture a value under a name.
//!
//! # Algorithm
//!
//! Given `value` and `previous`:
//!
//! 1. If `previous` already binds the name to a value that differs from
//!    `value` (under the configured `Equality`), fail. A name used twice in
//!    one tree therefore has to capture the same value both times.
//! 2. Extract the inner pattern. If it fails, fail without binding.
//! 3. If the inner pattern's result binds the name, the tree is ill-formed:
//!    a binding shadows one inside its own sub-tree. Return
//!    `IllegalPatternError::ShadowedBinding`.
//! 4. Otherwise add `name -> value` to the inner result.
//!
//! For step 3 the inner pattern runs against `previous` with the name
//! removed. A name pre-bound by an earlier sibling then cannot be mistaken
//! for a capture made inside the sub-tree, and a real capture inside the
//! sub-tree is caught whether or not an earlier sibling bound the name.

use std::fmt;
use std::sync::Arc;

use ds_value::{Name, Value};
use tracing::{debug, trace};

use crate::extract::{Extract, MatchConfig};
use crate::pattern::{detached, IntoPattern, Pattern};
use crate::{Bindings, ExtractResult, IllegalPatternError};

/// Captures the matched value under `name` once `inner` matches it.
#[derive(Clone)]
pub struct BindPattern {
    inner: Arc<Pattern>,
    name: Name,
}

impl BindPattern {
    /// `inner` may be a pattern or any shorthand value.
    pub fn new(inner: impl IntoPattern, name: impl Into<Name>) -> Self {
        BindPattern {
            inner: inner.into_shared(),
            name: name.into(),
        }
    }

    pub fn inner(&self) -> &Arc<Pattern> {
        &self.inner
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub(crate) fn detach_children(&mut self, out: &mut Vec<Arc<Pattern>>) {
        out.push(std::mem::replace(&mut self.inner, detached()));
    }
}

impl Extract for BindPattern {
    fn extract_in(&self, cfg: MatchConfig, value: &Value, previous: &Bindings) -> ExtractResult {
        let scope = match previous.get(&self.name) {
            Some(existing) if !cfg.equality.same(existing, value) => {
                trace!(
                    name = %self.name,
                    %existing,
                    %value,
                    "binding conflicts with earlier capture"
                );
                return Ok(None);
            }
            Some(_) => previous.without(&self.name),
            None => previous.clone(),
        };

        let Some(extracted) = self.inner.extract_in(cfg, value, &scope)? else {
            return Ok(None);
        };

        if extracted.has(&self.name) {
            debug!(name = %self.name, "binding shadows a binding in its own sub-pattern");
            return Err(IllegalPatternError::ShadowedBinding {
                name: self.name.clone(),
            });
        }

        Ok(Some(extracted.set(self.name.clone(), value.clone())))
    }
}

impl fmt::Debug for BindPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.inner, self.name)
    }
}
