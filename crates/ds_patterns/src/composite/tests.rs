use super::*;
use crate::test_helpers::{assert_mismatch, capture, matched};
use crate::IllegalPatternError;
use pretty_assertions::assert_eq;

fn ints(ns: &[i64]) -> Value {
    Value::list(ns.iter().copied().map(Value::int).collect())
}

#[test]
fn test_array_exact_length() {
    let pattern = Pattern::array([capture("a"), capture("b")]);
    let b = matched(pattern.extract(&ints(&[1, 2]), &Bindings::new()));
    assert_eq!(b.get("a"), Some(&Value::int(1)));
    assert_eq!(b.get("b"), Some(&Value::int(2)));

    assert_mismatch(&pattern.extract(&ints(&[1]), &Bindings::new()));
    assert_mismatch(&pattern.extract(&ints(&[1, 2, 3]), &Bindings::new()));
}

#[test]
fn test_array_rejects_non_list() {
    let pattern = Pattern::array(Vec::<Pattern>::new());
    assert_mismatch(&pattern.extract(&Value::string("[]"), &Bindings::new()));
    matched(pattern.extract(&ints(&[]), &Bindings::new()));
}

#[test]
fn test_array_rest_captures_tail() {
    let pattern = Pattern::array_with_rest([capture("head")], capture("tail"));
    let b = matched(pattern.extract(&ints(&[1, 2, 3]), &Bindings::new()));
    assert_eq!(b.get("head"), Some(&Value::int(1)));
    assert_eq!(b.get("tail"), Some(&ints(&[2, 3])));
}

#[test]
fn test_array_rest_may_be_empty() {
    let pattern = Pattern::array_with_rest([capture("head")], capture("tail"));
    let b = matched(pattern.extract(&ints(&[1]), &Bindings::new()));
    assert_eq!(b.get("tail"), Some(&ints(&[])));
    assert_mismatch(&pattern.extract(&ints(&[]), &Bindings::new()));
}

#[test]
fn test_array_rest_sees_element_bindings() {
    // The rest must repeat the head: [x, ..[x]]
    let pattern = Pattern::array_with_rest([capture("x")], Pattern::array([capture("x")]));
    matched(pattern.extract(&ints(&[4, 4]), &Bindings::new()));
    assert_mismatch(&pattern.extract(&ints(&[4, 5]), &Bindings::new()));
}

#[test]
fn test_array_accessors() {
    let array = ArrayPattern::with_rest([1_i64, 2], Pattern::Wildcard);
    assert_eq!(array.elements().len(), 2);
    assert!(array.rest().is_some());
    assert!(ArrayPattern::new([1_i64]).rest().is_none());
}

#[test]
fn test_array_stops_at_first_mismatch_before_error() {
    // The second element would be ill-formed, but the first already fails.
    let shadowing = Pattern::bind(capture("x"), "x");
    let pattern = Pattern::array([Pattern::literal(0_i64), shadowing]);
    assert_mismatch(&pattern.extract(&ints(&[1, 2]), &Bindings::new()));
}

#[test]
fn test_array_propagates_error_after_success() {
    let pattern = Pattern::array([capture("a"), Pattern::bind(capture("x"), "x")]);
    assert_eq!(
        pattern.extract(&ints(&[1, 2]), &Bindings::new()),
        Err(IllegalPatternError::ShadowedBinding {
            name: ds_value::Name::new("x")
        })
    );
}

#[test]
fn test_object_matches_listed_keys() {
    let pattern = Pattern::object([("name", capture("n")), ("age", capture("a"))]);
    let value = Value::map([
        ("name", Value::string("ada")),
        ("age", Value::int(36)),
        ("extra", Value::Null),
    ]);
    let b = matched(pattern.extract(&value, &Bindings::new()));
    assert_eq!(b.get("n"), Some(&Value::string("ada")));
    assert_eq!(b.get("a"), Some(&Value::int(36)));
    assert!(!b.has("extra"));
}

#[test]
fn test_object_missing_key_fails() {
    let pattern = Pattern::object([("name", Pattern::Wildcard)]);
    let other = Value::map([("other", Value::Null)]);
    assert_mismatch(&pattern.extract(&other, &Bindings::new()));
    assert_mismatch(&pattern.extract(&Value::list(vec![]), &Bindings::new()));
}

#[test]
fn test_object_entries_thread_in_declaration_order() {
    let pattern = Pattern::object([("left", capture("x")), ("right", capture("x"))]);
    let equal = Value::map([("left", Value::int(1)), ("right", Value::int(1))]);
    let unequal = Value::map([("left", Value::int(1)), ("right", Value::int(2))]);
    matched(pattern.extract(&equal, &Bindings::new()));
    assert_mismatch(&pattern.extract(&unequal, &Bindings::new()));
}

#[test]
fn test_object_accessors_and_debug() {
    let object = ObjectPattern::new([("k", 1_i64)]);
    assert_eq!(object.entries().len(), 1);
    assert_eq!(format!("{object:?}"), "{\"k\": 1}");
    assert_eq!(
        format!("{:?}", ArrayPattern::with_rest([capture("h")], Pattern::Wildcard)),
        "[_ @ h, .._]"
    );
}
