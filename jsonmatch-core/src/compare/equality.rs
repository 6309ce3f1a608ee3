//! Strict deep equality: no alternate paths, no wildcards, null only equals null

use crate::compare::comparator::Comparator;
use crate::diagnostics::{KeyPath, Mismatch, MismatchKind};
use crate::node::Node;

impl Comparator {
    /// Compare for exact equality, recording every mismatch
    ///
    /// Containers must have the same number of members; unlike the flexible
    /// comparison, a null expected value is an assertion that actual is null.
    pub fn compare_equal(&mut self, expected: &Node, actual: &Node, key_path: &KeyPath) -> bool {
        match (expected, actual) {
            (Node::Null, Node::Null) => true,
            (Node::Null, _) => self.fail(true, || {
                Mismatch::new(key_path, MismatchKind::ExpectedNull, expected, actual)
            }),
            (_, Node::Null) => self.fail(true, || {
                Mismatch::new(key_path, MismatchKind::ActualNull, expected, actual)
            }),
            (Node::Bool(e), Node::Bool(a)) => self.equal_scalar(e == a, expected, actual, key_path),
            (Node::Integer(e), Node::Integer(a)) => {
                self.equal_scalar(e == a, expected, actual, key_path)
            }
            (Node::Double(e), Node::Double(a)) => {
                self.equal_scalar(e == a, expected, actual, key_path)
            }
            (Node::String(e), Node::String(a)) => {
                self.equal_scalar(e == a, expected, actual, key_path)
            }
            (Node::Object(e), Node::Object(a)) => {
                if e.len() != a.len() {
                    return self.count_mismatch(e.len(), a.len(), expected, actual, key_path);
                }
                let mut passed = true;
                for (key, expected_value) in e {
                    let child_path = key_path.child_key(key);
                    passed = match a.get(key) {
                        Some(actual_value) => {
                            self.compare_equal(expected_value, actual_value, &child_path)
                        }
                        None => self.fail(true, || Mismatch {
                            key_path: child_path.clone(),
                            kind: MismatchKind::MissingKey,
                            expected: Some(expected_value.clone()),
                            actual: None,
                        }),
                    } && passed;
                }
                passed
            }
            (Node::Array(e), Node::Array(a)) => {
                if e.len() != a.len() {
                    return self.count_mismatch(e.len(), a.len(), expected, actual, key_path);
                }
                let mut passed = true;
                for (index, (expected_item, actual_item)) in e.iter().zip(a).enumerate() {
                    let child_path = key_path.child_index(index);
                    passed = self.compare_equal(expected_item, actual_item, &child_path) && passed;
                }
                passed
            }
            _ => self.fail(true, || Mismatch::type_mismatch(key_path, expected, actual)),
        }
    }

    fn equal_scalar(
        &mut self,
        values_equal: bool,
        expected: &Node,
        actual: &Node,
        key_path: &KeyPath,
    ) -> bool {
        values_equal
            || self.fail(true, || {
                Mismatch::new(key_path, MismatchKind::ValueMismatch, expected, actual)
            })
    }

    fn count_mismatch(
        &mut self,
        expected_len: usize,
        actual_len: usize,
        expected: &Node,
        actual: &Node,
        key_path: &KeyPath,
    ) -> bool {
        self.fail(true, || {
            Mismatch::new(
                key_path,
                MismatchKind::CountMismatch {
                    expected: expected_len,
                    actual: actual_len,
                },
                expected,
                actual,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(expected: serde_json::Value, actual: serde_json::Value) -> (bool, Vec<Mismatch>) {
        let mut comparator = Comparator::new();
        let passed = comparator.compare_equal(
            &Node::from(expected),
            &Node::from(actual),
            &KeyPath::root(),
        );
        let result = comparator.finish(passed);
        (result.passed, result.mismatches)
    }

    #[test]
    fn test_identical_documents() {
        let doc = json!({"a": [1, 2.5, "x", true, null], "b": {"c": {}}});
        assert!(check(doc.clone(), doc).0);
    }

    #[test]
    fn test_null_only_equals_null() {
        assert!(check(json!(null), json!(null)).0);
        let (passed, mismatches) = check(json!(null), json!(1));
        assert!(!passed);
        assert_eq!(mismatches[0].kind, MismatchKind::ExpectedNull);
        assert!(!check(json!({"a": null}), json!({"a": 0})).0);
    }

    #[test]
    fn test_extra_actual_members_fail() {
        let (passed, mismatches) = check(json!({"a": 1}), json!({"a": 1, "b": 2}));
        assert!(!passed);
        assert_eq!(
            mismatches[0].kind,
            MismatchKind::CountMismatch {
                expected: 1,
                actual: 2
            }
        );
        assert!(!check(json!([1]), json!([1, 2])).0);
    }

    #[test]
    fn test_missing_key_with_equal_counts() {
        let (passed, mismatches) = check(json!({"a": 1}), json!({"b": 1}));
        assert!(!passed);
        assert_eq!(mismatches[0].kind, MismatchKind::MissingKey);
    }

    #[test]
    fn test_collects_all_mismatches() {
        let (passed, mismatches) = check(json!([1, {"k": "v"}, 3.0]), json!([2, {"k": "w"}, 3]));
        assert!(!passed);
        let paths: Vec<String> = mismatches.iter().map(|m| m.key_path.to_string()).collect();
        assert_eq!(paths, vec!["[0]", "[1].k", "[2]"]);
        assert!(matches!(
            mismatches[2].kind,
            MismatchKind::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_array_order_matters() {
        assert!(!check(json!([1, 2]), json!([2, 1])).0);
    }
}
