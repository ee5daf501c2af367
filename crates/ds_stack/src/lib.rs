//! Stack growth for deeply nested pattern trees.
//!
//! Extraction recurses once per pattern node, so a generated or adversarial
//! tree (thousands of nested `Bind`/`Not`/`And` nodes) can exhaust the native
//! stack. Wrap each recursive step in [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn extract_in(&self, cfg: MatchConfig, value: &Value, previous: &Bindings) -> ExtractResult {
//!     ensure_sufficient_stack(|| match self { /* dispatch */ })
//! }
//! ```
//!
//! Native targets grow the stack with `stacker`; WASM calls straight through.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first moving to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
