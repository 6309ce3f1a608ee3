//! jsonmatch - Flexible JSON assertions for tests
//!
//! This crate provides the public API of the jsonmatch engine.
//!
//! # Example
//!
//! ```
//! use jsonmatch::{assert_exact_match, assert_type_match, Node};
//! use serde_json::json;
//!
//! let expected = Node::from(json!({"id": 7, "tags": ["b", "a"], "created": "2024"}));
//! let actual = Node::from(json!({"id": 7, "tags": ["a", "b"], "created": "2025", "extra": 1}));
//!
//! // values must match except for the timestamp and the tag list
//! assert_exact_match(&expected, &actual, &["created", "tags"]);
//! // types must match, `id` must be 7 and the tags may come in any order
//! assert_type_match(&expected, &actual, &["id", "tags[*]"]);
//! ```

// Re-export assertion entry points
pub use jsonmatch_core::{
    assert_equal, assert_exact_match, assert_type_match, try_assert_equal,
    try_assert_exact_match, try_assert_type_match,
};

// Re-export lower level comparison
pub use jsonmatch_core::{equal, matches, MatchMode, MatchOptions};

// Re-export core types that callers may need
pub use jsonmatch_core::errors::{AssertionError, MatchError};
pub use jsonmatch_core::node::{Node, NodeKind};
pub use jsonmatch_core::path::escape_key;
pub use jsonmatch_core::{ComparisonResult, KeyPath, MatchResult, Mismatch, MismatchKind};
