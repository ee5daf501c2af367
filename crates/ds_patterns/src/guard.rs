//! Guard patterns: an inner pattern plus a user test.

use std::fmt;
use std::sync::Arc;

use ds_value::Value;
use tracing::trace;

use crate::extract::{Extract, MatchConfig};
use crate::pattern::{detached, IntoPattern, Pattern};
use crate::{Bindings, ExtractResult};

/// Test run after the inner pattern matched.
///
/// Receives the value and the bindings the inner pattern produced. Must be
/// pure for extraction to stay pure.
pub type GuardFn = Arc<dyn Fn(&Value, &Bindings) -> bool + Send + Sync>;

#[derive(Clone)]
pub struct GuardPattern {
    inner: Arc<Pattern>,
    test: GuardFn,
}

impl GuardPattern {
    pub fn new<F>(inner: impl IntoPattern, test: F) -> Self
    where
        F: Fn(&Value, &Bindings) -> bool + Send + Sync + 'static,
    {
        GuardPattern {
            inner: inner.into_shared(),
            test: Arc::new(test),
        }
    }

    pub fn inner(&self) -> &Arc<Pattern> {
        &self.inner
    }

    pub(crate) fn detach_children(&mut self, out: &mut Vec<Arc<Pattern>>) {
        out.push(std::mem::replace(&mut self.inner, detached()));
    }
}

impl Extract for GuardPattern {
    fn extract_in(&self, cfg: MatchConfig, value: &Value, previous: &Bindings) -> ExtractResult {
        let Some(extracted) = self.inner.extract_in(cfg, value, previous)? else {
            return Ok(None);
        };
        if (self.test)(value, &extracted) {
            Ok(Some(extracted))
        } else {
            trace!(%value, "guard rejected value");
            Ok(None)
        }
    }
}

impl fmt::Debug for GuardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} if <guard>", self.inner)
    }
}
