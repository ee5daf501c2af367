//! Shared helpers for unit tests.

use crate::{Bindings, ExtractResult, Pattern};

/// Unwrap a successful match, panicking with the actual result otherwise.
pub(crate) fn matched(result: ExtractResult) -> Bindings {
    match result {
        Ok(Some(bindings)) => bindings,
        other => panic!("expected a match, got {other:?}"),
    }
}

/// Assert the result is an ordinary mismatch (not an error).
pub(crate) fn assert_mismatch(result: &ExtractResult) {
    assert!(
        matches!(result, Ok(None)),
        "expected a mismatch, got {result:?}"
    );
}

/// `_ @ name`
pub(crate) fn capture(name: &str) -> Pattern {
    Pattern::bind(Pattern::Wildcard, name)
}
