//! Lookup tree built from a set of alternate paths

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::errors::MatchError;
use crate::node::Node;
use crate::path::parser::parse_path;
use crate::path::types::{ParsedPath, PathSegment, WildcardKind};
use crate::MatchResult;

/// A node below some segment of a [`PathTree`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathNode {
    /// An alternate path ends here: the match mode flips for this value and
    /// everything below it. Holds the original path string.
    Terminal(String),
    /// Alternate paths continue below this segment
    Branch(PathTree),
}

impl PathNode {
    fn check_bounds(&self, expected: &Node) -> MatchResult<()> {
        match self {
            PathNode::Terminal(_) => Ok(()),
            PathNode::Branch(tree) => tree.check_bounds(expected),
        }
    }

    /// Smallest raw path ending at or below this node
    fn first_path(&self) -> Option<&str> {
        match self {
            PathNode::Terminal(raw) => Some(raw.as_str()),
            PathNode::Branch(tree) => tree
                .children
                .values()
                .filter_map(PathNode::first_path)
                .min(),
        }
    }
}

/// Alternate paths merged into a tree keyed by segment
///
/// When one path is a prefix of another, the shorter path wins and the longer
/// one is dropped, since the mode has already flipped at the shorter one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTree {
    children: HashMap<PathSegment, PathNode>,
}

impl PathTree {
    /// Parse and merge every path. Returns `None` when no paths were given.
    ///
    /// # Examples
    /// ```
    /// # use jsonmatch_core::path::{PathTree, PathNode, PathSegment};
    /// let tree = PathTree::build(["key1.key2", "key1.key3"]).unwrap().unwrap();
    /// let Some(PathNode::Branch(key1)) = tree.get(&PathSegment::Key("key1".into())) else {
    ///     panic!("key1 should be a branch");
    /// };
    /// assert_eq!(key1.len(), 2);
    /// assert!(PathTree::build(Vec::<String>::new()).unwrap().is_none());
    /// ```
    pub fn build<I, S>(paths: I) -> MatchResult<Option<PathTree>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = PathTree::default();
        let mut count = 0usize;

        for path in paths {
            let parsed = parse_path(path.as_ref())?;
            tree.insert(&parsed)?;
            count += 1;
        }

        if count == 0 {
            return Ok(None);
        }

        debug!(paths = count, top_level = tree.len(), "Built alternate path tree");
        Ok(Some(tree))
    }

    /// Merge one parsed path into the tree
    pub fn insert(&mut self, path: &ParsedPath) -> MatchResult<()> {
        let Some((last, parents)) = path.segments.split_last() else {
            return Ok(());
        };

        let mut current = self;
        for segment in parents {
            current.check_duplicate_claim(segment, &path.raw)?;
            let node = current
                .children
                .entry(segment.clone())
                .or_insert_with(|| PathNode::Branch(PathTree::default()));

            match node {
                PathNode::Terminal(existing) => {
                    warn!(
                        path = %path.raw,
                        covered_by = %existing,
                        "Alternate path is covered by a shorter path"
                    );
                    return Ok(());
                }
                PathNode::Branch(child) => current = child,
            }
        }

        current.check_duplicate_claim(last, &path.raw)?;
        match current.children.get(last) {
            Some(PathNode::Terminal(existing)) => {
                debug!(path = %path.raw, existing = %existing, "Alternate path already present");
                return Ok(());
            }
            Some(PathNode::Branch(_)) => {
                warn!(path = %path.raw, "Alternate path replaces longer paths below it");
            }
            None => {}
        }
        current
            .children
            .insert(last.clone(), PathNode::Terminal(path.raw.clone()));
        Ok(())
    }

    /// Check every `[N]`, `[*N]` and `[N*]` against the expected array it
    /// addresses.
    ///
    /// Paths through keys the expected document does not have, or through
    /// values of another shape, address nothing and are accepted.
    ///
    /// # Examples
    /// ```
    /// # use jsonmatch_core::{path::PathTree, MatchError, Node};
    /// # use serde_json::json;
    /// let expected = Node::from(json!({"a": [1, 2]}));
    /// let tree = PathTree::build(["a[*1]"]).unwrap().unwrap();
    /// assert!(tree.check_bounds(&expected).is_ok());
    ///
    /// let tree = PathTree::build(["a[2]"]).unwrap().unwrap();
    /// assert!(matches!(
    ///     tree.check_bounds(&expected),
    ///     Err(MatchError::IndexOutOfRange { index: 2, len: 2, .. })
    /// ));
    /// ```
    pub fn check_bounds(&self, expected: &Node) -> MatchResult<()> {
        for (segment, node) in &self.children {
            match (segment, expected) {
                (PathSegment::Key(key), _) => {
                    if let Some(member) = expected.get(key) {
                        node.check_bounds(member)?;
                    }
                }
                (PathSegment::AnyIndex, Node::Array(items)) => {
                    for item in items {
                        node.check_bounds(item)?;
                    }
                }
                (_, Node::Array(items)) => {
                    let Some(index) = segment.index() else {
                        continue;
                    };
                    let Some(item) = items.get(index) else {
                        return Err(MatchError::IndexOutOfRange {
                            path: node.first_path().unwrap_or_default().to_string(),
                            index,
                            len: items.len(),
                        });
                    };
                    node.check_bounds(item)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn get(&self, segment: &PathSegment) -> Option<&PathNode> {
        self.children.get(segment)
    }

    /// Node stored under an object key
    pub fn get_key(&self, key: &str) -> Option<&PathNode> {
        if self.is_empty() {
            return None;
        }
        self.children.get(&PathSegment::Key(key.to_string()))
    }

    /// Node stored under the fixed index `[index]`
    pub fn get_index(&self, index: usize) -> Option<&PathNode> {
        self.children.get(&PathSegment::Index(index))
    }

    /// Node stored under the general wildcard `[*]`
    pub fn any_index(&self) -> Option<&PathNode> {
        self.children.get(&PathSegment::AnyIndex)
    }

    /// Every `[*N]` / `[N*]` claim at this level, in no particular order
    pub fn wildcard_claims(&self) -> impl Iterator<Item = (usize, &PathNode)> {
        self.children
            .iter()
            .filter(|(segment, _)| segment.wildcard_kind() == Some(WildcardKind::Specific))
            .filter_map(|(segment, node)| Some((segment.index()?, node)))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// `[*0]` and `[0*]` side by side claim the same expected element twice.
    fn check_duplicate_claim(&self, segment: &PathSegment, raw: &str) -> MatchResult<()> {
        if let PathSegment::Wildcard { index, star_first } = segment {
            let twin = PathSegment::Wildcard {
                index: *index,
                star_first: !star_first,
            };
            if self.children.contains_key(&twin) {
                return Err(MatchError::DuplicateIndex {
                    path: raw.to_string(),
                    index: *index,
                });
            }
        }
        Ok(())
    }
}
