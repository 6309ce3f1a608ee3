//! Flexible structural matching of JSON documents
//!
//! Compares an *expected* document against an *actual* one, either for
//! strict equality or flexibly: expected may describe only part of actual,
//! scalar values may be compared by value or by type, and alternate paths
//! switch the mode or allow any-order array matching at chosen locations.

pub mod asserts;
pub mod compare;
pub mod diagnostics;
pub mod errors;
pub mod node;
pub mod path;

pub use asserts::*;
pub use compare::{equal, matches, MatchMode, MatchOptions};
pub use diagnostics::{ComparisonResult, KeyPath, Mismatch, MismatchKind};
pub use errors::*;
pub use node::{Node, NodeKind};

pub type MatchResult<T> = Result<T, MatchError>;
