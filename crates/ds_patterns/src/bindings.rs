//! The bindings accumulator.
//!
//! `Bindings` is a persistent map from `Name` to `Value` built on
//! `im::HashMap`. Every update returns a new map that shares structure with
//! the old one; the old one stays valid. This is what lets a failed branch
//! of a match simply drop its accumulator without undoing anything.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use ds_value::{Name, Value};
use rustc_hash::FxBuildHasher;

/// Immutable mapping from binding name to captured value.
#[derive(Clone, Default, PartialEq)]
pub struct Bindings {
    map: im::HashMap<Name, Value, FxBuildHasher>,
}

impl Bindings {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of `self` with `name` bound to `value`.
    ///
    /// `self` is untouched. O(log n) via structural sharing.
    #[must_use]
    pub fn set(&self, name: impl Into<Name>, value: Value) -> Self {
        Bindings {
            map: self.map.update(name.into(), value),
        }
    }

    /// Return a copy of `self` without `name`.
    #[must_use]
    pub(crate) fn without<Q>(&self, name: &Q) -> Self
    where
        Name: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Bindings {
            map: self.map.without(name),
        }
    }

    pub fn has<Q>(&self, name: &Q) -> bool
    where
        Name: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(name)
    }

    pub fn get<Q>(&self, name: &Q) -> Option<&Value>
    where
        Name: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.map.iter()
    }

    /// Bound names, sorted.
    pub fn names(&self) -> Vec<Name> {
        let mut names: Vec<_> = self.map.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// All bindings as `(name, value)` pairs sorted by name.
    pub fn into_sorted_vec(self) -> Vec<(Name, Value)> {
        let mut pairs: Vec<_> = self.map.into_iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        pairs
    }
}

/// Folds the pairs through `set` in iteration order; later pairs replace
/// earlier ones with the same name.
impl<N: Into<Name>> FromIterator<(N, Value)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Bindings::new(), |acc, (name, value)| acc.set(name, value))
    }
}

impl fmt::Debug for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<_> = self.map.iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        f.debug_map()
            .entries(pairs.into_iter().map(|(k, v)| (k.as_str(), v)))
            .finish()
    }
}
