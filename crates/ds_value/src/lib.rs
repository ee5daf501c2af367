//! Destructure Values - runtime data the pattern engine matches against.
//!
//! This crate provides:
//! - `Value`, the dynamically typed runtime value
//! - `Heap<T>`, the shared allocation behind compound values
//! - `Name`, the identifier a binding is captured under
//! - `Equality`, the policy deciding when two values count as the same
//!
//! # Thread Safety
//!
//! Every type here is immutable after construction and uses `Arc` for
//! sharing, so values can be matched from many threads at once.

mod equality;
mod name;
mod value;

pub use equality::Equality;
pub use name::Name;
pub use value::{Heap, Value, ValueKind};
