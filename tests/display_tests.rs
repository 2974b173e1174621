//! Integration tests for Display and Debug implementations.

use mathset::MathSet;
use rstest::rstest;
use std::collections::{BTreeSet, LinkedList};

#[rstest]
fn test_empty_set_display() {
    let set: MathSet<i32, Vec<i32>> = MathSet::new();
    assert_eq!(format!("{set}"), "[]");
}

#[rstest]
fn test_single_element_display() {
    let set: MathSet<i32, LinkedList<i32>> = MathSet::from([42]);
    assert_eq!(format!("{set}"), "[42]");
}

#[rstest]
fn test_display_follows_iteration_order() {
    let set: MathSet<i32, Vec<i32>> = MathSet::from([3, 1, 2]);
    assert_eq!(format!("{set}"), "[3, 1, 2]");
}

#[rstest]
fn test_display_of_tree_backed_set_is_sorted() {
    let set: MathSet<i32, BTreeSet<i32>> = MathSet::from([3, 1, 2]);
    assert_eq!(set.to_string(), "[1, 2, 3]");
}

#[rstest]
fn test_display_strings() {
    let set: MathSet<String, Vec<String>> =
        MathSet::from_slice(&["alpha".to_string(), "beta".to_string()]);
    assert_eq!(set.to_string(), "[alpha, beta]");
}

#[rstest]
fn test_debug_quotes_strings() {
    let set: MathSet<&str, Vec<&str>> = MathSet::from(["a", "b"]);
    assert_eq!(format!("{set:?}"), r#"["a", "b"]"#);
}
