//! Recursive flexible comparison of expected against actual

use indexmap::IndexMap;
use tracing::debug;

use crate::compare::options::MatchMode;
use crate::diagnostics::{ComparisonResult, KeyPath, Mismatch, MismatchKind};
use crate::node::Node;
use crate::path::{PathNode, PathTree};

/// Walks expected and actual together and collects mismatches
///
/// Every comparison method takes a `strict` flag. Strict comparisons record
/// each mismatch; non-strict ones only answer yes or no and may stop early.
/// Wildcard probing in arrays runs non-strict so rejected candidates leave no
/// trace in the report.
#[derive(Debug, Default)]
pub struct Comparator {
    mismatches: Vec<Mismatch>,
}

impl Comparator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flexible comparison of one expected/actual pair
    ///
    /// A null expected value asserts nothing and always matches. Below a
    /// terminal of `tree` the mode is inverted.
    pub fn compare(
        &mut self,
        expected: &Node,
        actual: &Node,
        tree: Option<&PathTree>,
        mode: MatchMode,
        key_path: &KeyPath,
        strict: bool,
    ) -> bool {
        if expected.is_null() {
            return true;
        }
        if actual.is_null() {
            return self.fail(strict, || {
                Mismatch::new(key_path, MismatchKind::ActualNull, expected, actual)
            });
        }

        match (expected, actual) {
            (Node::Object(e), Node::Object(a)) => {
                self.compare_objects(e, a, tree, mode, key_path, strict)
            }
            (Node::Array(e), Node::Array(a)) => {
                self.compare_arrays(e, a, tree, mode, key_path, strict)
            }
            (Node::Bool(e), Node::Bool(a)) => {
                self.compare_scalar(e == a, expected, actual, mode, key_path, strict)
            }
            (Node::Integer(e), Node::Integer(a)) => {
                self.compare_scalar(e == a, expected, actual, mode, key_path, strict)
            }
            (Node::Double(e), Node::Double(a)) => {
                self.compare_scalar(e == a, expected, actual, mode, key_path, strict)
            }
            (Node::String(e), Node::String(a)) => {
                self.compare_scalar(e == a, expected, actual, mode, key_path, strict)
            }
            _ => self.fail(strict, || Mismatch::type_mismatch(key_path, expected, actual)),
        }
    }

    fn compare_scalar(
        &mut self,
        values_equal: bool,
        expected: &Node,
        actual: &Node,
        mode: MatchMode,
        key_path: &KeyPath,
        strict: bool,
    ) -> bool {
        match mode {
            MatchMode::TypeOnly => true,
            MatchMode::ExactValue if values_equal => true,
            MatchMode::ExactValue => self.fail(strict, || {
                Mismatch::new(key_path, MismatchKind::ValueMismatch, expected, actual)
            }),
        }
    }

    fn compare_objects(
        &mut self,
        expected: &IndexMap<String, Node>,
        actual: &IndexMap<String, Node>,
        tree: Option<&PathTree>,
        mode: MatchMode,
        key_path: &KeyPath,
        strict: bool,
    ) -> bool {
        if expected.len() > actual.len() {
            return self.fail(strict, || Mismatch {
                key_path: key_path.clone(),
                kind: MismatchKind::SizeViolation {
                    expected: expected.len(),
                    actual: actual.len(),
                },
                expected: Some(Node::Object(expected.clone())),
                actual: Some(Node::Object(actual.clone())),
            });
        }

        let mut passed = true;
        for (key, expected_value) in expected {
            // null asserts nothing, not even presence
            if expected_value.is_null() {
                continue;
            }

            let child_path = key_path.child_key(key);
            let Some(actual_value) = actual.get(key) else {
                passed = self.fail(strict, || Mismatch {
                    key_path: child_path.clone(),
                    kind: MismatchKind::MissingKey,
                    expected: Some(expected_value.clone()),
                    actual: None,
                });
                if strict {
                    continue;
                }
                return false;
            };

            let (child_mode, subtree) = descend(tree.and_then(|t| t.get_key(key)), mode);
            passed = self.compare(
                expected_value,
                actual_value,
                subtree,
                child_mode,
                &child_path,
                strict,
            ) && passed;

            if !passed && !strict {
                return false;
            }
        }
        passed
    }

    /// Record a mismatch when strict. Always returns `false`.
    pub(crate) fn fail(&mut self, strict: bool, mismatch: impl FnOnce() -> Mismatch) -> bool {
        if strict {
            let mismatch = mismatch();
            debug!(key_path = %mismatch.key_path, kind = ?mismatch.kind, "Mismatch recorded");
            self.mismatches.push(mismatch);
        }
        false
    }

    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    pub fn finish(self, passed: bool) -> ComparisonResult {
        ComparisonResult {
            passed: passed && self.mismatches.is_empty(),
            mismatches: self.mismatches,
        }
    }
}

/// Mode and subtree for the value stored under `node`
///
/// A terminal flips the mode and ends path lookups for everything below it.
pub(crate) fn descend(node: Option<&PathNode>, mode: MatchMode) -> (MatchMode, Option<&PathTree>) {
    match node {
        Some(PathNode::Terminal(_)) => (mode.invert(), None),
        Some(PathNode::Branch(tree)) => (mode, Some(tree)),
        None => (mode, None),
    }
}
