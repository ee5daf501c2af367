//! Pattern base: the closed set of pattern variants, shorthand normalization
//! and protocol dispatch.
//!
//! # Normalization
//!
//! Anything implementing [`IntoPattern`] can stand where a pattern is
//! expected. Plain values are shorthand:
//!
//! | input                  | pattern                                 |
//! |------------------------|-----------------------------------------|
//! | scalar value           | `Literal`                               |
//! | `Value::List`          | `Array` of normalized items, exact length |
//! | `Value::Map`           | `Object` of normalized entries (sorted keys) |
//! | `Vec<T: IntoPattern>`  | `Array` of normalized items, exact length |
//! | `Pattern`, `Arc<Pattern>` | itself (an `Arc` is shared, not copied) |
//!
//! Every builder that takes child patterns goes through [`IntoPattern`], so
//! normalized and shorthand forms mix freely in one tree.

use std::fmt;
use std::sync::{Arc, OnceLock};

use ds_stack::ensure_sufficient_stack;
use ds_value::{Name, Value, ValueKind};
use tracing::trace;

use crate::bind::BindPattern;
use crate::composite::{ArrayPattern, ObjectPattern};
use crate::extract::{Extract, MatchConfig};
use crate::guard::GuardPattern;
use crate::{logical, Bindings, ExtractResult};

/// A declarative description of a shape a value may have.
///
/// Immutable once built. Child patterns are held behind `Arc` and may be
/// shared between trees and across threads.
#[derive(Clone)]
pub enum Pattern {
    /// Matches anything, binds nothing.
    Wildcard,
    /// Matches a value equal to this one under the configured `Equality`.
    Literal(Value),
    /// Matches any value of the given kind.
    Type(ValueKind),
    /// Matches a list element by element.
    Array(ArrayPattern),
    /// Matches a map that has every listed key.
    Object(ObjectPattern),
    /// Matches when every operand matches; bindings thread left to right.
    And(Vec<Arc<Pattern>>),
    /// Matches when any operand matches; the first match wins.
    Or(Vec<Arc<Pattern>>),
    /// Matches when the operand does not. Binds nothing.
    Not(Arc<Pattern>),
    /// Matches when the inner pattern matches and the test accepts.
    Guard(GuardPattern),
    /// Captures the value under a name.
    Bind(BindPattern),
}

/// Conversion into a pattern.
pub trait IntoPattern {
    fn into_pattern(self) -> Pattern;

    /// Convert into a shareable child pattern.
    fn into_shared(self) -> Arc<Pattern>
    where
        Self: Sized,
    {
        Arc::new(self.into_pattern())
    }
}

/// Normalize `input` into a pattern. Idempotent on patterns.
pub fn pattern_of(input: impl IntoPattern) -> Pattern {
    input.into_pattern()
}

// Builders

impl Pattern {
    pub fn literal(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    pub fn kind(kind: ValueKind) -> Self {
        Pattern::Type(kind)
    }

    /// A list of exactly `elements.len()` items.
    pub fn array<P: IntoPattern>(elements: impl IntoIterator<Item = P>) -> Self {
        Pattern::Array(ArrayPattern::new(elements))
    }

    /// A list of at least `elements.len()` items; the remaining items are
    /// matched against `rest` as a new list.
    pub fn array_with_rest<P: IntoPattern>(
        elements: impl IntoIterator<Item = P>,
        rest: impl IntoPattern,
    ) -> Self {
        Pattern::Array(ArrayPattern::with_rest(elements, rest))
    }

    /// A map containing each key; entries are matched in the given order.
    pub fn object<K, P>(entries: impl IntoIterator<Item = (K, P)>) -> Self
    where
        K: Into<String>,
        P: IntoPattern,
    {
        Pattern::Object(ObjectPattern::new(entries))
    }

    pub fn all<P: IntoPattern>(operands: impl IntoIterator<Item = P>) -> Self {
        Pattern::And(operands.into_iter().map(IntoPattern::into_shared).collect())
    }

    pub fn any<P: IntoPattern>(operands: impl IntoIterator<Item = P>) -> Self {
        Pattern::Or(operands.into_iter().map(IntoPattern::into_shared).collect())
    }

    pub fn not(inner: impl IntoPattern) -> Self {
        Pattern::Not(inner.into_shared())
    }

    /// `inner` must match, then `test` is called with the value and the
    /// bindings `inner` produced.
    pub fn guard<F>(inner: impl IntoPattern, test: F) -> Self
    where
        F: Fn(&Value, &Bindings) -> bool + Send + Sync + 'static,
    {
        Pattern::Guard(GuardPattern::new(inner, test))
    }

    /// Matches any value accepted by `test`.
    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Pattern::guard(Pattern::Wildcard, move |value, _| test(value))
    }

    pub fn bind(inner: impl IntoPattern, name: impl Into<Name>) -> Self {
        Pattern::Bind(BindPattern::new(inner, name))
    }

    /// Run the extraction protocol with the default configuration.
    pub fn extract(&self, value: &Value, previous: &Bindings) -> ExtractResult {
        self.extract_in(MatchConfig::default(), value, previous)
    }
}

impl Extract for Pattern {
    fn extract_in(&self, cfg: MatchConfig, value: &Value, previous: &Bindings) -> ExtractResult {
        ensure_sufficient_stack(|| match self {
            Pattern::Wildcard => Ok(Some(previous.clone())),
            Pattern::Literal(expected) => {
                if cfg.equality.same(expected, value) {
                    Ok(Some(previous.clone()))
                } else {
                    trace!(%expected, %value, "literal mismatch");
                    Ok(None)
                }
            }
            Pattern::Type(kind) => Ok(kind.admits(value.kind()).then(|| previous.clone())),
            Pattern::Array(array) => array.extract_in(cfg, value, previous),
            Pattern::Object(object) => object.extract_in(cfg, value, previous),
            Pattern::And(operands) => logical::extract_all(operands, cfg, value, previous),
            Pattern::Or(operands) => logical::extract_any(operands, cfg, value, previous),
            Pattern::Not(inner) => logical::extract_not(inner, cfg, value, previous),
            Pattern::Guard(guard) => guard.extract_in(cfg, value, previous),
            Pattern::Bind(bind) => bind.extract_in(cfg, value, previous),
        })
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Pattern::Wildcard => write!(f, "_"),
            Pattern::Literal(value) => write!(f, "{value}"),
            Pattern::Type(kind) => write!(f, "<{kind}>"),
            Pattern::Array(array) => fmt::Debug::fmt(array, f),
            Pattern::Object(object) => fmt::Debug::fmt(object, f),
            Pattern::And(operands) => f.debug_tuple("And").field(operands).finish(),
            Pattern::Or(operands) => f.debug_tuple("Or").field(operands).finish(),
            Pattern::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
            Pattern::Guard(guard) => fmt::Debug::fmt(guard, f),
            Pattern::Bind(bind) => fmt::Debug::fmt(bind, f),
        })
    }
}

// Teardown
//
// Derived drop glue would recurse once per nesting level through the
// `Arc<Pattern>` chain. Children are instead moved onto a work list and
// released one at a time, so dropping never goes deeper than one node.

/// Shared childless stand-in left behind when a child is moved out.
pub(crate) fn detached() -> Arc<Pattern> {
    static DETACHED: OnceLock<Arc<Pattern>> = OnceLock::new();
    Arc::clone(DETACHED.get_or_init(|| Arc::new(Pattern::Wildcard)))
}

impl Pattern {
    /// Move every direct child onto `out`, leaving `self` childless.
    fn detach_children(&mut self, out: &mut Vec<Arc<Pattern>>) {
        match self {
            Pattern::Wildcard | Pattern::Literal(_) | Pattern::Type(_) => {}
            Pattern::Array(array) => array.detach_children(out),
            Pattern::Object(object) => object.detach_children(out),
            Pattern::And(operands) | Pattern::Or(operands) => out.append(operands),
            Pattern::Not(inner) => out.push(std::mem::replace(inner, detached())),
            Pattern::Guard(guard) => guard.detach_children(out),
            Pattern::Bind(bind) => bind.detach_children(out),
        }
    }
}

impl Drop for Pattern {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(child) = pending.pop() {
            // Children still shared with another tree are left to their
            // other owners.
            if let Some(mut pattern) = Arc::into_inner(child) {
                pattern.detach_children(&mut pending);
            }
        }
    }
}

// Normalization

impl IntoPattern for Pattern {
    fn into_pattern(self) -> Pattern {
        self
    }
}

impl IntoPattern for Arc<Pattern> {
    fn into_pattern(self) -> Pattern {
        Arc::unwrap_or_clone(self)
    }

    fn into_shared(self) -> Arc<Pattern> {
        self
    }
}

impl IntoPattern for &Arc<Pattern> {
    fn into_pattern(self) -> Pattern {
        Pattern::clone(self)
    }

    fn into_shared(self) -> Arc<Pattern> {
        Arc::clone(self)
    }
}

impl IntoPattern for Value {
    fn into_pattern(self) -> Pattern {
        if let Some(items) = self.as_list() {
            return Pattern::array(items.iter().cloned());
        }
        if let Some(entries) = self.sorted_entries() {
            return Pattern::object(entries.into_iter().map(|(k, v)| (k, v.clone())));
        }
        Pattern::Literal(self)
    }
}

impl<T: IntoPattern> IntoPattern for Vec<T> {
    fn into_pattern(self) -> Pattern {
        Pattern::array(self)
    }
}

macro_rules! literal_shorthand {
    ($($ty:ty),*) => {
        $(
            impl IntoPattern for $ty {
                fn into_pattern(self) -> Pattern {
                    Pattern::Literal(Value::from(self))
                }
            }
        )*
    };
}

literal_shorthand!(bool, i64, f64, &str, String);

impl IntoPattern for BindPattern {
    fn into_pattern(self) -> Pattern {
        Pattern::Bind(self)
    }
}

impl IntoPattern for GuardPattern {
    fn into_pattern(self) -> Pattern {
        Pattern::Guard(self)
    }
}

impl IntoPattern for ArrayPattern {
    fn into_pattern(self) -> Pattern {
        Pattern::Array(self)
    }
}

impl IntoPattern for ObjectPattern {
    fn into_pattern(self) -> Pattern {
        Pattern::Object(self)
    }
}
