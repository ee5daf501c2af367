//! Shape patterns over lists and maps.

use std::fmt;
use std::sync::Arc;

use ds_value::Value;
use tracing::trace;

use crate::extract::{extract_sequence, Extract, MatchConfig};
use crate::pattern::{IntoPattern, Pattern};
use crate::{Bindings, ExtractResult};

/// Matches a list element by element, with an optional pattern for the tail.
#[derive(Clone)]
pub struct ArrayPattern {
    elements: Vec<Arc<Pattern>>,
    rest: Option<Arc<Pattern>>,
}

impl ArrayPattern {
    /// Exactly one item per element pattern.
    pub fn new<P: IntoPattern>(elements: impl IntoIterator<Item = P>) -> Self {
        ArrayPattern {
            elements: elements.into_iter().map(IntoPattern::into_shared).collect(),
            rest: None,
        }
    }

    /// At least one item per element pattern; the tail is matched by `rest`
    /// as a new list (possibly empty).
    pub fn with_rest<P: IntoPattern>(
        elements: impl IntoIterator<Item = P>,
        rest: impl IntoPattern,
    ) -> Self {
        ArrayPattern {
            rest: Some(rest.into_shared()),
            ..ArrayPattern::new(elements)
        }
    }

    pub fn elements(&self) -> &[Arc<Pattern>] {
        &self.elements
    }

    pub fn rest(&self) -> Option<&Arc<Pattern>> {
        self.rest.as_ref()
    }

    pub(crate) fn detach_children(&mut self, out: &mut Vec<Arc<Pattern>>) {
        out.append(&mut self.elements);
        out.extend(self.rest.take());
    }
}

impl Extract for ArrayPattern {
    fn extract_in(&self, cfg: MatchConfig, value: &Value, previous: &Bindings) -> ExtractResult {
        let Some(items) = value.as_list() else {
            trace!(got = %value.kind(), "array pattern expects a list");
            return Ok(None);
        };

        let arity = self.elements.len();
        let fits = match self.rest {
            Some(_) => items.len() >= arity,
            None => items.len() == arity,
        };
        if !fits {
            trace!(len = items.len(), arity, "array length mismatch");
            return Ok(None);
        }

        let pairs = self.elements.iter().map(|p| &**p).zip(items);
        let Some(acc) = extract_sequence(cfg, pairs, previous)? else {
            return Ok(None);
        };

        match &self.rest {
            Some(rest) => {
                let tail = Value::list(items[arity..].to_vec());
                rest.extract_in(cfg, &tail, &acc)
            }
            None => Ok(Some(acc)),
        }
    }
}

impl fmt::Debug for ArrayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        list.entries(&self.elements);
        if let Some(rest) = &self.rest {
            list.entry(&format_args!("..{rest:?}"));
        }
        list.finish()
    }
}

/// Matches a map that contains every listed key. Extra keys are ignored.
#[derive(Clone)]
pub struct ObjectPattern {
    entries: Vec<(String, Arc<Pattern>)>,
}

impl ObjectPattern {
    /// Entries are matched in the order given here.
    pub fn new<K, P>(entries: impl IntoIterator<Item = (K, P)>) -> Self
    where
        K: Into<String>,
        P: IntoPattern,
    {
        ObjectPattern {
            entries: entries
                .into_iter()
                .map(|(key, pattern)| (key.into(), pattern.into_shared()))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(String, Arc<Pattern>)] {
        &self.entries
    }

    pub(crate) fn detach_children(&mut self, out: &mut Vec<Arc<Pattern>>) {
        out.extend(self.entries.drain(..).map(|(_, pattern)| pattern));
    }
}

impl Extract for ObjectPattern {
    fn extract_in(&self, cfg: MatchConfig, value: &Value, previous: &Bindings) -> ExtractResult {
        let Some(map) = value.as_map() else {
            trace!(got = %value.kind(), "object pattern expects a map");
            return Ok(None);
        };

        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, pattern) in &self.entries {
            let Some(field) = map.get(key) else {
                trace!(key = key.as_str(), "object pattern key missing");
                return Ok(None);
            };
            pairs.push((&**pattern, field));
        }
        extract_sequence(cfg, pairs, previous)
    }
}

impl fmt::Debug for ObjectPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, p)| (k, p)))
            .finish()
    }
}

#[cfg(test)]
mod tests;
