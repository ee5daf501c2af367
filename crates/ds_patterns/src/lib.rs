//! Destructure Patterns - structural pattern matching with named bindings.
//!
//! This crate provides:
//! - `Bindings`, the persistent accumulator of captured values
//! - The extraction protocol (`Extract`, `MatchConfig`, `ExtractResult`)
//! - `Pattern`, the closed set of pattern variants, and `pattern_of`
//!   shorthand normalization
//! - `BindPattern`, which captures values and keeps repeated names consistent
//! - `IllegalPatternError` for ill-formed pattern trees
//!
//! # Architecture
//!
//! A match starts with an empty `Bindings` at the root pattern. Each variant
//! extracts its children in pattern order, threading the accumulator, and
//! returns either a mismatch (`Ok(None)`), the extended accumulator
//! (`Ok(Some(..))`), or a fatal `IllegalPatternError`. Nothing is ever
//! mutated, so pattern trees can be shared across threads and a failed
//! branch never leaks bindings into its siblings.

mod bind;
mod bindings;
mod composite;
mod errors;
mod extract;
mod guard;
mod logical;
mod pattern;

pub use bind::BindPattern;
pub use bindings::Bindings;
pub use composite::{ArrayPattern, ObjectPattern};
pub use errors::{ExtractResult, IllegalPatternError};
pub use extract::{Extract, MatchConfig};
pub use guard::{GuardFn, GuardPattern};
pub use pattern::{pattern_of, IntoPattern, Pattern};

pub use ds_value::{Equality, Name, Value, ValueKind};

#[cfg(test)]
mod test_helpers;
