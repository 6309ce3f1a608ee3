//! Alternate paths
//!
//! An alternate path names a location in the expected document where the
//! default match mode flips. Paths use dotted keys with bracketed array
//! accesses (`key1[0].key2`, `list[*1]`, `list[*]`), with `\.`, `\[` and `\]`
//! escaping literal characters in keys.

pub mod parser;
pub mod tree;
pub mod types;

pub use parser::{escape_key, parse_path};
pub use tree::{PathNode, PathTree};
pub use types::*;
