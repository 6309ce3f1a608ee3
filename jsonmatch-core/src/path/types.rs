//! Core types for alternate-path handling

use std::fmt;

/// Wildcard flavour of an array access segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardKind {
    /// Fixed position, e.g. `[3]`
    None,
    /// Any-order match for one expected index, e.g. `[*3]` or `[3*]`
    Specific,
    /// Any-order match for every expected index, `[*]`
    General,
}

/// One parsed component of an alternate path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member name, unescaped
    Key(String),
    /// Fixed array index, `[N]`
    Index(usize),
    /// Wildcard for a single expected index. `star_first` records whether the
    /// path was written `[*N]` (true) or `[N*]` (false).
    Wildcard { index: usize, star_first: bool },
    /// General wildcard, `[*]`
    AnyIndex,
}

impl PathSegment {
    pub fn wildcard_kind(&self) -> Option<WildcardKind> {
        match self {
            PathSegment::Key(_) => None,
            PathSegment::Index(_) => Some(WildcardKind::None),
            PathSegment::Wildcard { .. } => Some(WildcardKind::Specific),
            PathSegment::AnyIndex => Some(WildcardKind::General),
        }
    }

    /// Array position this segment refers to, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            PathSegment::Index(index) | PathSegment::Wildcard { index, .. } => Some(*index),
            PathSegment::Key(_) | PathSegment::AnyIndex => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "[{index}]"),
            PathSegment::Wildcard {
                index,
                star_first: true,
            } => write!(f, "[*{index}]"),
            PathSegment::Wildcard {
                index,
                star_first: false,
            } => write!(f, "[{index}*]"),
            PathSegment::AnyIndex => f.write_str("[*]"),
        }
    }
}

/// Alternate path with its parsed segments
#[derive(Debug, Clone)]
pub struct ParsedPath {
    /// Original path string
    pub raw: String,
    /// Parsed segments
    pub segments: Vec<PathSegment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_tokens() {
        assert_eq!(PathSegment::Index(28).to_string(), "[28]");
        assert_eq!(
            PathSegment::Wildcard {
                index: 0,
                star_first: true
            }
            .to_string(),
            "[*0]"
        );
        assert_eq!(
            PathSegment::Wildcard {
                index: 0,
                star_first: false
            }
            .to_string(),
            "[0*]"
        );
        assert_eq!(PathSegment::AnyIndex.to_string(), "[*]");
        assert_eq!(PathSegment::Key("a.b".to_string()).to_string(), "a.b");
    }

    #[test]
    fn test_wildcard_kind() {
        assert_eq!(PathSegment::Key("k".into()).wildcard_kind(), None);
        assert_eq!(
            PathSegment::Index(1).wildcard_kind(),
            Some(WildcardKind::None)
        );
        assert_eq!(
            PathSegment::Wildcard {
                index: 1,
                star_first: false
            }
            .wildcard_kind(),
            Some(WildcardKind::Specific)
        );
        assert_eq!(
            PathSegment::AnyIndex.wildcard_kind(),
            Some(WildcardKind::General)
        );
    }

    #[test]
    fn test_segment_index() {
        assert_eq!(PathSegment::Index(4).index(), Some(4));
        assert_eq!(
            PathSegment::Wildcard {
                index: 2,
                star_first: true
            }
            .index(),
            Some(2)
        );
        assert_eq!(PathSegment::AnyIndex.index(), None);
    }
}
