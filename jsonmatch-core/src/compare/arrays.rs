//! Array reconciliation: ordinal matches first, then wildcard matches against
//! the actual elements nobody has claimed yet.

use tracing::trace;

use crate::compare::comparator::{descend, Comparator};
use crate::compare::options::MatchMode;
use crate::diagnostics::{KeyPath, Mismatch, MismatchKind};
use crate::node::Node;
use crate::path::{PathNode, PathTree};

/// Which expected indexes are compared by position and which by wildcard
#[derive(Debug, Default, PartialEq)]
struct ArrayPlan<'t> {
    ordinal: Vec<(usize, Option<&'t PathNode>)>,
    wildcard: Vec<(usize, Option<&'t PathNode>)>,
}

impl<'t> ArrayPlan<'t> {
    fn new(expected_len: usize, tree: Option<&'t PathTree>) -> Self {
        let Some(tree) = tree else {
            return Self {
                ordinal: (0..expected_len).map(|i| (i, None)).collect(),
                wildcard: Vec::new(),
            };
        };

        // `[*]` turns every element into a wildcard match
        if let Some(any) = tree.any_index() {
            return Self {
                ordinal: Vec::new(),
                wildcard: (0..expected_len).map(|i| (i, Some(any))).collect(),
            };
        }

        let mut wildcard: Vec<(usize, Option<&PathNode>)> = tree
            .wildcard_claims()
            .filter(|(index, _)| *index < expected_len)
            .map(|(index, node)| (index, Some(node)))
            .collect();
        wildcard.sort_unstable_by_key(|(index, _)| *index);

        let ordinal = (0..expected_len)
            .filter(|i| wildcard.binary_search_by_key(i, |(index, _)| *index).is_err())
            .map(|i| (i, tree.get_index(i)))
            .collect();

        Self { ordinal, wildcard }
    }
}

impl Comparator {
    /// Compare two arrays element by element
    ///
    /// Plain and fixed-index elements are compared with the actual element at
    /// the same position, which is then spent whether it matched or not.
    /// Wildcard elements are then matched, in ascending expected index, with
    /// the first unspent actual element that satisfies them. The first
    /// wildcard element without a candidate fails the array and ends the
    /// wildcard pass.
    pub fn compare_arrays(
        &mut self,
        expected: &[Node],
        actual: &[Node],
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
                expected: Some(Node::Array(expected.to_vec())),
                actual: Some(Node::Array(actual.to_vec())),
            });
        }

        let plan = ArrayPlan::new(expected.len(), tree);
        let mut unclaimed: Vec<Option<&Node>> = actual.iter().map(Some).collect();
        let mut passed = true;

        for &(index, node) in &plan.ordinal {
            let (child_mode, subtree) = descend(node, mode);
            unclaimed[index] = None;
            passed = self.compare(
                &expected[index],
                &actual[index],
                subtree,
                child_mode,
                &key_path.child_index(index),
                strict,
            ) && passed;

            if !passed && !strict {
                return false;
            }
        }

        for &(index, node) in &plan.wildcard {
            let (child_mode, subtree) = descend(node, mode);
            let child_path = key_path.child_index(index);

            let mut claimed = None;
            for (actual_index, slot) in unclaimed.iter().enumerate() {
                let Some(candidate) = slot else {
                    continue;
                };
                if self.compare(
                    &expected[index],
                    candidate,
                    subtree,
                    child_mode,
                    &child_path,
                    false,
                ) {
                    claimed = Some(actual_index);
                    break;
                }
            }

            match claimed {
                Some(actual_index) => {
                    trace!(
                        key_path = %child_path,
                        actual_index,
                        "Wildcard element claimed actual element"
                    );
                    unclaimed[actual_index] = None;
                }
                None => {
                    trace!(key_path = %child_path, "Wildcard element has no candidate");
                    passed = self.fail(strict, || Mismatch {
                        key_path: child_path.clone(),
                        kind: MismatchKind::WildcardUnsatisfied,
                        expected: Some(expected[index].clone()),
                        actual: Some(Node::Array(
                            unclaimed.iter().flatten().map(|n| (*n).clone()).collect(),
                        )),
                    });
                    break;
                }
            }
        }

        passed
    }
}
