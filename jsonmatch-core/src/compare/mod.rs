//! Structural comparison of expected against actual documents
//!
//! Two families of comparison are offered:
//! - [`matches`]: flexible matching. Expected describes a subset of actual,
//!   `null` in expected asserts nothing, scalars compare by value or by type
//!   depending on [`MatchMode`], and alternate paths flip the mode or enable
//!   any-order array matching at chosen locations.
//! - [`equal`]: strict deep equality.

pub mod arrays;
pub mod comparator;
pub mod equality;
pub mod options;

pub use comparator::Comparator;
pub use options::{MatchMode, MatchOptions};

use tracing::debug;

use crate::diagnostics::{ComparisonResult, KeyPath};
use crate::node::Node;
use crate::path::PathTree;
use crate::MatchResult;

/// Flexible comparison of `expected` against `actual`
///
/// Alternate paths are parsed, and their array indexes checked against
/// `expected`, before anything is compared. A bad path is always reported as
/// an error rather than as a mismatch.
///
/// # Example
/// ```
/// use jsonmatch_core::{matches, MatchOptions, Node};
/// use serde_json::json;
///
/// let expected = Node::from(json!({"key1": {"key2": "a"}}));
/// let actual = Node::from(json!({"key1": {"key2": "b", "key3": 3}}));
///
/// assert!(!matches(&expected, &actual, &MatchOptions::exact()).unwrap().passed());
/// let options = MatchOptions::exact().with_paths(["key1"]);
/// assert!(matches(&expected, &actual, &options).unwrap().passed());
/// ```
pub fn matches(
    expected: &Node,
    actual: &Node,
    options: &MatchOptions,
) -> MatchResult<ComparisonResult> {
    let tree = PathTree::build(&options.alternate_paths)?;
    if let Some(tree) = &tree {
        tree.check_bounds(expected)?;
    }

    let mut comparator = Comparator::new();
    let passed = comparator.compare(
        expected,
        actual,
        tree.as_ref(),
        options.mode,
        &KeyPath::root(),
        true,
    );
    let result = comparator.finish(passed);

    debug!(
        mode = %options.mode,
        paths = options.alternate_paths.len(),
        passed = result.passed,
        mismatches = result.mismatches.len(),
        "Flexible comparison finished"
    );
    Ok(result)
}

/// Strict deep equality of `expected` and `actual`
pub fn equal(expected: &Node, actual: &Node) -> ComparisonResult {
    let mut comparator = Comparator::new();
    let passed = comparator.compare_equal(expected, actual, &KeyPath::root());
    let result = comparator.finish(passed);

    debug!(
        passed = result.passed,
        mismatches = result.mismatches.len(),
        "Equality comparison finished"
    );
    result
}
