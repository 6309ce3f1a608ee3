//! Assertion entry points for test code
//!
//! The `assert_*` functions panic on failure so they can be used directly in
//! `#[test]` functions. The `try_assert_*` variants return an
//! [`AssertionError`] instead, for embedding in other test frameworks.
//!
//! A malformed alternate path is a bug in the test itself and is reported as
//! [`AssertionError::Setup`] (or a panic starting with `Invalid alternate
//! path`) before any value is compared.

use crate::compare::{equal, matches, MatchMode, MatchOptions};
use crate::errors::AssertionError;
use crate::node::Node;

/// Strict deep equality. `null` only matches `null`.
pub fn try_assert_equal(expected: &Node, actual: &Node) -> Result<(), AssertionError> {
    let result = equal(expected, actual);
    if result.passed() {
        Ok(())
    } else {
        Err(AssertionError::Mismatch(result))
    }
}

/// Flexible match comparing values exactly, except at and below
/// `type_match_paths`, where only types are compared.
pub fn try_assert_exact_match(
    expected: &Node,
    actual: &Node,
    type_match_paths: &[&str],
) -> Result<(), AssertionError> {
    try_assert_flexible(expected, actual, MatchMode::ExactValue, type_match_paths)
}

/// Flexible match comparing only types, except at and below
/// `exact_match_paths`, where values must be identical.
pub fn try_assert_type_match(
    expected: &Node,
    actual: &Node,
    exact_match_paths: &[&str],
) -> Result<(), AssertionError> {
    try_assert_flexible(expected, actual, MatchMode::TypeOnly, exact_match_paths)
}

fn try_assert_flexible(
    expected: &Node,
    actual: &Node,
    mode: MatchMode,
    alternate_paths: &[&str],
) -> Result<(), AssertionError> {
    let options = MatchOptions::default()
        .with_mode(mode)
        .with_paths(alternate_paths);
    let result = matches(expected, actual, &options)?;
    if result.passed() {
        Ok(())
    } else {
        Err(AssertionError::Mismatch(result))
    }
}

/// Panicking form of [`try_assert_equal`]
///
/// ```
/// # use jsonmatch_core::{assert_equal, Node};
/// # use serde_json::json;
/// assert_equal(&Node::from(json!({"a": [1]})), &Node::from(json!({"a": [1]})));
/// ```
#[track_caller]
pub fn assert_equal(expected: &Node, actual: &Node) {
    if let Err(err) = try_assert_equal(expected, actual) {
        panic!("{err}");
    }
}

/// Panicking form of [`try_assert_exact_match`]
///
/// ```
/// # use jsonmatch_core::{assert_exact_match, Node};
/// # use serde_json::json;
/// let expected = Node::from(json!([1, 2]));
/// let actual = Node::from(json!(["a", "b", 1, 2]));
/// assert_exact_match(&expected, &actual, &["[*0]", "[*1]"]);
/// ```
#[track_caller]
pub fn assert_exact_match(expected: &Node, actual: &Node, type_match_paths: &[&str]) {
    if let Err(err) = try_assert_exact_match(expected, actual, type_match_paths) {
        panic!("{err}");
    }
}

/// Panicking form of [`try_assert_type_match`]
#[track_caller]
pub fn assert_type_match(expected: &Node, actual: &Node, exact_match_paths: &[&str]) {
    if let Err(err) = try_assert_type_match(expected, actual, exact_match_paths) {
        panic!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MatchError;
    use serde_json::json;

    #[test]
    fn test_setup_error_is_distinct() {
        let err = try_assert_exact_match(&Node::from(json!([1])), &Node::from(json!([1])), &["[0"])
            .unwrap_err();
        assert!(err.is_setup());
        assert!(err.comparison().is_none());
        assert!(matches!(
            err,
            AssertionError::Setup(MatchError::MalformedPath { .. })
        ));
    }

    #[test]
    fn test_setup_error_reported_even_when_values_match() {
        let doc = Node::from(json!({"a": 1}));
        assert!(try_assert_type_match(&doc, &doc, &["[*0]", "[0*]"])
            .unwrap_err()
            .is_setup());
    }

    #[test]
    fn test_mismatch_carries_result() {
        let err = try_assert_equal(&Node::from(json!(1)), &Node::from(json!(2))).unwrap_err();
        assert!(!err.is_setup());
        assert_eq!(err.comparison().map(|r| r.mismatches().len()), Some(1));
    }

    #[test]
    #[should_panic(expected = "Invalid alternate path")]
    fn test_assert_panics_on_setup_error() {
        assert_exact_match(&Node::from(json!({})), &Node::from(json!({})), &["a]"]);
    }

    #[test]
    #[should_panic(expected = "Key path: key1.key2")]
    fn test_assert_panics_with_key_path() {
        assert_exact_match(
            &Node::from(json!({"key1": {"key2": "a"}})),
            &Node::from(json!({"key1": {"key2": "b"}})),
            &[],
        );
    }
}
