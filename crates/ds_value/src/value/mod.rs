//! Runtime values matched by patterns.
//!
//! # Heap Enforcement
//!
//! Compound payloads (strings, lists, maps) live behind `Heap<T>`, whose
//! constructor is private to this module. Build them through the factory
//! methods:
//!
//! ```text
//! let s = Value::string("hello");                       // OK
//! let list = Value::list(vec![Value::int(1)]);          // OK
//! let s = Value::Str(Heap::new(...));                   // ERROR: Heap::new is pub(super)
//! ```

mod heap;

use std::fmt;

use rustc_hash::FxHashMap;

pub use heap::Heap;

/// Runtime value under test.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    /// Absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),

    // Heap Types
    /// String value.
    Str(Heap<String>),
    /// Ordered sequence of values.
    List(Heap<Vec<Value>>),
    /// Map from string keys to values.
    Map(Heap<FxHashMap<String, Value>>),
}

/// Coarse classification of a `Value`, used by type-test patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    /// Either `Int` or `Float`.
    Number,
    Str,
    List,
    Map,
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    ///
    /// ```text
    /// let nums = Value::list(vec![Value::int(1), Value::int(2)]);
    /// ```
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a map value from key/value pairs.
    ///
    /// Later duplicates of a key replace earlier ones.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let entries: FxHashMap<String, Value> =
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::Map(Heap::new(entries))
    }
}

// Accessors

impl Value {
    /// The kind of this value. Never returns `ValueKind::Number`.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&FxHashMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key if this is a map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|entries| entries.get(key))
    }

    /// Map entries sorted by key, or `None` if this is not a map.
    pub fn sorted_entries(&self) -> Option<Vec<(&str, &Value)>> {
        let entries = self.as_map()?;
        let mut sorted: Vec<_> = entries.iter().map(|(k, v)| (k.as_str(), v)).collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        Some(sorted)
    }
}

impl ValueKind {
    /// Whether a value of kind `actual` satisfies a test for `self`.
    pub fn admits(self, actual: ValueKind) -> bool {
        match self {
            ValueKind::Number => matches!(actual, ValueKind::Int | ValueKind::Float),
            expected => expected == actual,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Number => "number",
            ValueKind::Str => "string",
            ValueKind::List => "list",
            ValueKind::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write!(f, "{:?}", s.as_str()),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(_) => {
                write!(f, "{{")?;
                let entries = self.sorted_entries().unwrap_or_default();
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}
