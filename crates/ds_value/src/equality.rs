//! Equality policy shared by literal patterns and repeated bindings.

use crate::value::{Heap, Value};

/// How two values are compared when the engine asks "is this the same value?".
///
/// The engine applies one policy per match attempt to both literal patterns
/// and repeated-binding checks, so the two can never disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Equality {
    /// Deep comparison: lists and maps are equal when their contents are.
    #[default]
    Structural,
    /// Primitives and strings compare by value; lists and maps only compare
    /// equal when they are the same allocation.
    Identity,
}

impl Equality {
    /// Compare two values under this policy.
    ///
    /// A scalar `NaN` is never equal to anything, itself included. Under
    /// `Identity` a list or map equals itself whatever it holds, so a shared
    /// `[NaN]` is the same under `Identity` but not under `Structural`.
    pub fn same(self, a: &Value, b: &Value) -> bool {
        match self {
            Equality::Structural => a == b,
            Equality::Identity => match (a, b) {
                (Value::List(x), Value::List(y)) => Heap::ptr_eq(x, y),
                (Value::Map(x), Value::Map(y)) => Heap::ptr_eq(x, y),
                _ => a == b,
            },
        }
    }
}
