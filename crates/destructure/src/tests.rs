use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_match_value_starts_empty() {
    let pattern = Pattern::bind(Pattern::Wildcard, "x");
    let result = match_value(&Value::int(5), &pattern);
    assert_eq!(result, Ok(Some(Bindings::new().set("x", Value::int(5)))));
}

#[test]
fn test_match_value_with_identity() {
    let list = Value::list(vec![Value::int(1)]);
    let pattern = Pattern::literal(list.clone());
    let identity = MatchConfig::with_equality(Equality::Identity);

    assert!(matches!(match_value_with(identity, &list, &pattern), Ok(Some(_))));
    assert_eq!(
        match_value_with(identity, &Value::list(vec![Value::int(1)]), &pattern),
        Ok(None)
    );
}

#[test]
fn test_match_value_surfaces_illegal_pattern() {
    let pattern = Pattern::bind(Pattern::bind(Pattern::Wildcard, "x"), "x");
    let err = match_value(&Value::Null, &pattern);
    assert!(matches!(err, Err(IllegalPatternError::ShadowedBinding { .. })));
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
