//! Ordered match arms: the first pattern that matches picks the handler.

use std::fmt;
use std::sync::Arc;

use ds_patterns::{Bindings, Extract, IllegalPatternError, IntoPattern, MatchConfig, Pattern, Value};
use tracing::trace;

type Handler<T> = Box<dyn Fn(&Bindings) -> T + Send + Sync>;

/// A list of `(pattern, handler)` arms tried in order.
///
/// ```text
/// let describe = MatchArms::new()
///     .arm(Pattern::array(Vec::<Pattern>::new()), |_| "empty".to_string())
///     .arm(Pattern::array_with_rest([Pattern::bind(Pattern::Wildcard, "h")], Pattern::Wildcard),
///          |b| format!("starts with {}", b.get("h").map_or(String::new(), ToString::to_string)));
/// ```
pub struct MatchArms<T> {
    arms: Vec<(Arc<Pattern>, Handler<T>)>,
    config: MatchConfig,
}

impl<T> MatchArms<T> {
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default())
    }

    pub fn with_config(config: MatchConfig) -> Self {
        MatchArms {
            arms: Vec::new(),
            config,
        }
    }

    /// Append an arm. Arms are tried in the order they were added.
    #[must_use]
    pub fn arm<F>(mut self, pattern: impl IntoPattern, handler: F) -> Self
    where
        F: Fn(&Bindings) -> T + Send + Sync + 'static,
    {
        self.arms.push((pattern.into_shared(), Box::new(handler)));
        self
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Index and bindings of the first arm whose pattern matches `value`.
    ///
    /// Each arm starts from an empty accumulator. An illegal pattern in an
    /// arm that is attempted aborts the whole evaluation; arms after the
    /// first match are never attempted.
    pub fn find(&self, value: &Value) -> Result<Option<(usize, Bindings)>, IllegalPatternError> {
        for (index, (pattern, _)) in self.arms.iter().enumerate() {
            if let Some(bindings) = pattern.extract_in(self.config, value, &Bindings::new())? {
                trace!(index, "arm matched");
                return Ok(Some((index, bindings)));
            }
        }
        Ok(None)
    }

    /// Run the handler of the first matching arm.
    pub fn eval(&self, value: &Value) -> Result<Option<T>, IllegalPatternError> {
        let Some((index, bindings)) = self.find(value)? else {
            return Ok(None);
        };
        Ok(self.arms.get(index).map(|(_, handler)| handler(&bindings)))
    }
}

impl<T> Default for MatchArms<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for MatchArms<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchArms")
            .field("patterns", &self.arms.iter().map(|(p, _)| p).collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}
