//! Keys containing `.`, `[`, `]` and `\` addressed through escaped paths

mod common;

use common::{failing_paths, node};
use jsonmatch_core::path::escape_key;
use jsonmatch_core::{assert_exact_match, try_assert_exact_match, try_assert_type_match};
use serde_json::json;

#[test]
fn test_escaped_dots_address_literal_key() {
    let expected = node(json!({"k.1.2.3": "a", "k": {"1": "a"}}));
    let actual = node(json!({"k.1.2.3": "b", "k": {"1": "a"}}));

    assert_exact_match(&expected, &actual, &[r"k\.1\.2\.3"]);
    // unescaped, the path walks k -> 1 -> 2 -> 3 and misses the literal key
    assert_eq!(
        failing_paths(try_assert_exact_match(&expected, &actual, &["k.1.2.3"])),
        vec![r"k\.1\.2\.3"]
    );
}

#[test]
fn test_escaped_brackets_address_literal_key() {
    let expected = node(json!({"key[0]": 1, "key": [1]}));
    let actual = node(json!({"key[0]": 2, "key": [1]}));

    assert_exact_match(&expected, &actual, &[r"key\[0\]"]);
    assert!(try_assert_exact_match(&expected, &actual, &["key[0]"]).is_err());
}

#[test]
fn test_escape_key_round_trips_through_lookup() {
    for key in ["k.1.2.3", "a[0]", "]x[", r"back\slash", r"mix.[\]", "", "."] {
        let expected = node(json!({ key: "expected" }));
        let actual = node(json!({ key: "actual" }));
        let path = escape_key(key);

        assert!(
            try_assert_exact_match(&expected, &actual, &[path.as_str()]).is_ok(),
            "type path {path:?} should address {key:?}"
        );
        assert!(
            try_assert_type_match(&expected, &actual, &[path.as_str()]).is_err(),
            "exact path {path:?} should address {key:?}"
        );
    }
}

#[test]
fn test_empty_key_and_trailing_dot() {
    let expected = node(json!({"": {"": 1}, "a": {"": 2}}));
    let actual = node(json!({"": {"": 5}, "a": {"": 6}}));

    assert_eq!(
        failing_paths(try_assert_exact_match(&expected, &actual, &[])),
        vec!["\"\".\"\"", "a.\"\""]
    );
    assert_exact_match(&expected, &actual, &[".", "a."]);
    assert_exact_match(&expected, &actual, &["", "a"]);
}

#[test]
fn test_malformed_paths_are_setup_errors() {
    let doc = node(json!({"a": [1]}));
    for path in ["a[0", "a]", "a[x]", "a[0]b", "a[[0]]", "a[-1]", "a[99999999999999999999999999]"] {
        let err = try_assert_exact_match(&doc, &doc, &[path]).unwrap_err();
        assert!(err.is_setup(), "{path} should be rejected");
    }
}
