use super::*;
use std::collections::HashSet;

#[test]
fn test_name_equality_by_content() {
    let a = Name::new("x");
    let b = Name::from(String::from("x"));
    assert_eq!(a, b);
    assert_ne!(a, Name::new("y"));
}

#[test]
fn test_name_hash_matches_str() {
    let mut names = HashSet::new();
    names.insert(Name::new("first"));
    assert!(names.contains("first"));
    assert!(!names.contains("second"));
}

#[test]
fn test_name_display_and_debug() {
    let name = Name::new("head");
    assert_eq!(name.to_string(), "head");
    assert_eq!(format!("{name:?}"), "Name(\"head\")");
}

#[test]
fn test_name_ordering() {
    let mut names = vec![Name::new("b"), Name::new("a"), Name::new("c")];
    names.sort();
    let spelled: Vec<_> = names.iter().map(Name::as_str).collect();
    assert_eq!(spelled, ["a", "b", "c"]);
}
