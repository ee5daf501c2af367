//! Property-based tests for the extraction engine.
//!
//! Names come from a tiny alphabet and values from a tiny range so that
//! generated cases reuse names often, with both equal and unequal values.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use destructure::{match_value, Bindings, Pattern, Value};
use proptest::prelude::*;

fn captures() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec(("[a-d]", 0_i64..3), 0..10)
}

fn capture(name: &str) -> Pattern {
    Pattern::bind(Pattern::Wildcard, name)
}

/// Apply `set` in order, failing on the first conflicting reuse.
fn sequential_sets(pairs: &[(String, i64)]) -> Option<Bindings> {
    pairs.iter().try_fold(Bindings::new(), |acc, (name, n)| {
        let value = Value::int(*n);
        match acc.get(name.as_str()) {
            Some(existing) if *existing != value => None,
            _ => Some(acc.set(name.as_str(), value)),
        }
    })
}

fn array_of_captures(pairs: &[(String, i64)]) -> (Pattern, Value) {
    let pattern = Pattern::array(pairs.iter().map(|(name, _)| capture(name)));
    let value = Value::list(pairs.iter().map(|(_, n)| Value::int(*n)).collect());
    (pattern, value)
}

proptest! {
    #[test]
    fn left_to_right_threading_equals_sequential_sets(pairs in captures()) {
        let (pattern, value) = array_of_captures(&pairs);
        prop_assert_eq!(match_value(&value, &pattern), Ok(sequential_sets(&pairs)));
    }

    #[test]
    fn object_threading_equals_sequential_sets(pairs in captures()) {
        // Keys are positional so entry order mirrors the pair order.
        let key = |i: usize| format!("k{i:02}");
        let entries = pairs.iter().enumerate();
        let pattern = Pattern::object(
            entries.clone().map(|(i, (name, _))| (key(i), capture(name))),
        );
        let value = Value::map(entries.map(|(i, (_, n))| (key(i), Value::int(*n))));
        prop_assert_eq!(match_value(&value, &pattern), Ok(sequential_sets(&pairs)));
    }

    #[test]
    fn extraction_is_pure(pairs in captures(), seed in captures()) {
        let (pattern, value) = array_of_captures(&pairs);
        let previous: Bindings = seed
            .iter()
            .map(|(name, n)| (name.as_str(), Value::int(*n)))
            .collect();
        let snapshot = previous.clone();

        let first = pattern.extract(&value, &previous);
        let second = pattern.extract(&value, &previous);

        prop_assert_eq!(first, second);
        prop_assert_eq!(previous, snapshot);
    }

    #[test]
    fn prebound_names_constrain_captures(name in "[a-d]", bound in 0_i64..3, seen in 0_i64..3) {
        let previous = Bindings::new().set(name.as_str(), Value::int(bound));
        let result = capture(&name).extract(&Value::int(seen), &previous);
        if bound == seen {
            prop_assert_eq!(result, Ok(Some(previous)));
        } else {
            prop_assert_eq!(result, Ok(None));
        }
    }

    #[test]
    fn nested_bind_chain_equals_sequential_sets(
        names in prop::collection::hash_set("[a-z]{1,3}", 0..12),
        n in 0_i64..3,
        seed in captures(),
    ) {
        // Distinct names, so no level of the chain shadows another.
        let names: Vec<String> = names.into_iter().collect();
        let previous: Bindings = seed
            .iter()
            .map(|(name, v)| (name.as_str(), Value::int(*v)))
            .collect();
        let pattern = names
            .iter()
            .fold(Pattern::Wildcard, |inner, name| Pattern::bind(inner, name.as_str()));

        let value = Value::int(n);
        let expected = names.iter().try_fold(previous.clone(), |acc, name| {
            match acc.get(name.as_str()) {
                Some(existing) if *existing != value => None,
                _ => Some(acc.set(name.as_str(), value.clone())),
            }
        });
        prop_assert_eq!(pattern.extract(&value, &previous), Ok(expected));
    }

    #[test]
    fn failed_alternatives_leave_no_trace(pairs in captures(), n in 0_i64..3) {
        // The first alternative binds every name and then fails on a
        // sentinel; the second binds nothing.
        let mut failing: Vec<Pattern> = pairs.iter().map(|(name, _)| capture(name)).collect();
        failing.push(Pattern::literal(-1_i64));
        let pattern = Pattern::any([
            Pattern::array(failing),
            Pattern::array_with_rest(Vec::<Pattern>::new(), Pattern::Wildcard),
        ]);
        let mut items: Vec<Value> = pairs.iter().map(|(_, v)| Value::int(*v)).collect();
        items.push(Value::int(n));

        let result = match_value(&Value::list(items), &pattern);
        prop_assert_eq!(result, Ok(Some(Bindings::new())));
    }
}
