//! Destructure - structural pattern matching for dynamic values.
//!
//! Build a [`Pattern`] tree, then test values against it:
//!
//! ```text
//! let pair = Pattern::array([Pattern::bind(Pattern::Wildcard, "a"), 2_i64]);
//! let bindings = match_value(&value, &pair)?;   // Ok(Some({a: ..})) or Ok(None)
//! ```
//!
//! A name used more than once in one tree must capture the same value at
//! every use. Binding a name inside a pattern that is itself bound under the
//! same name is a defect in the tree and surfaces as `IllegalPatternError`,
//! never as a plain mismatch.
//!
//! # Tracing
//!
//! The engine logs through `tracing`. Call [`init_tracing`] and run with
//! `RUST_LOG=ds_patterns=trace` to see every match decision.

mod arms;

use std::sync::Once;

use tracing::{debug, trace};

pub use arms::MatchArms;
pub use ds_patterns::{
    pattern_of, ArrayPattern, BindPattern, Bindings, Equality, Extract, ExtractResult, GuardFn,
    GuardPattern, IllegalPatternError, IntoPattern, MatchConfig, Name, ObjectPattern, Pattern,
    Value, ValueKind,
};

/// Match `value` against `pattern` from an empty accumulator.
pub fn match_value(value: &Value, pattern: &Pattern) -> ExtractResult {
    match_value_with(MatchConfig::default(), value, pattern)
}

/// Match `value` against `pattern` from an empty accumulator using `cfg`.
#[tracing::instrument(level = "trace", skip_all, fields(equality = ?cfg.equality))]
pub fn match_value_with(cfg: MatchConfig, value: &Value, pattern: &Pattern) -> ExtractResult {
    let result = pattern.extract_in(cfg, value, &Bindings::new());
    match &result {
        Ok(Some(bindings)) => trace!(bound = bindings.len(), "matched"),
        Ok(None) => trace!("no match"),
        Err(err) => debug!(%err, "illegal pattern"),
    }
    result
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output.
///
/// Safe to call more than once. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=destructure=trace,ds_patterns=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
