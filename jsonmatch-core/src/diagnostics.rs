//! Key paths and mismatch reports

use std::fmt;

use serde::{Serialize, Serializer};

use crate::node::{Node, NodeKind};

/// One step from the root of the expected document to a compared value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPathSegment {
    Key(String),
    Index(usize),
}

/// Location of a compared value, rendered like `key1[0].key\.2`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPath(Vec<KeyPathSegment>);

impl KeyPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(KeyPathSegment::Key(key.to_string()));
        Self(segments)
    }

    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(KeyPathSegment::Index(index));
        Self(segments)
    }

    pub fn segments(&self) -> &[KeyPathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<KeyPathSegment>> for KeyPath {
    fn from(segments: Vec<KeyPathSegment>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_key_path(&self.0))
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Render a key path for humans
///
/// Keys are joined with `.`, dots inside a key are escaped as `\.` and an
/// empty key is shown as `""`. Indexes are appended as `[N]`.
///
/// # Examples
/// ```
/// # use jsonmatch_core::diagnostics::{format_key_path, KeyPathSegment};
/// let path = [
///     KeyPathSegment::Key("k.1".to_string()),
///     KeyPathSegment::Index(2),
///     KeyPathSegment::Key(String::new()),
/// ];
/// assert_eq!(format_key_path(&path), r#"k\.1[2]."""#);
/// ```
pub fn format_key_path(segments: &[KeyPathSegment]) -> String {
    let mut rendered = String::new();
    for segment in segments {
        match segment {
            KeyPathSegment::Key(key) => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                if key.is_empty() {
                    rendered.push_str("\"\"");
                } else {
                    rendered.push_str(&key.replace('.', "\\."));
                }
            }
            KeyPathSegment::Index(index) => {
                rendered.push_str(&format!("[{index}]"));
            }
        }
    }
    rendered
}

/// Why a value failed to match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// Same type, different literal value
    ValueMismatch,
    /// Different kinds of value, e.g. string vs integer
    TypeMismatch { expected: NodeKindName, actual: NodeKindName },
    /// Expected a value but actual is null
    ActualNull,
    /// Expected null but actual has a value (strict equality only)
    ExpectedNull,
    /// Expected key absent from actual
    MissingKey,
    /// Expected container is larger than the actual one
    SizeViolation { expected: usize, actual: usize },
    /// Container sizes differ (strict equality only)
    CountMismatch { expected: usize, actual: usize },
    /// No unclaimed actual element satisfies a wildcard-matched expected element
    WildcardUnsatisfied,
}

/// Serializable wrapper for [`NodeKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeKindName(pub NodeKind);

impl Serialize for NodeKindName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchKind::ValueMismatch => f.write_str("Expected and actual values do not match."),
            MismatchKind::TypeMismatch { expected, actual } => write!(
                f,
                "Expected and actual types do not match: expected {}, found {}.",
                expected.0, actual.0
            ),
            MismatchKind::ActualNull => {
                f.write_str("Expected a non-null value but actual is null.")
            }
            MismatchKind::ExpectedNull => f.write_str("Expected null but actual is not null."),
            MismatchKind::MissingKey => f.write_str("Actual has no value for this key."),
            MismatchKind::SizeViolation { expected, actual } => write!(
                f,
                "Expected has more elements ({expected}) than actual ({actual}); actual cannot satisfy expected."
            ),
            MismatchKind::CountMismatch { expected, actual } => write!(
                f,
                "Expected and actual element counts differ: {expected} vs {actual}."
            ),
            MismatchKind::WildcardUnsatisfied => f.write_str(
                "No remaining actual element satisfies this wildcard-matched expected element.",
            ),
        }
    }
}

/// A single recorded mismatch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    pub key_path: KeyPath,
    pub kind: MismatchKind,
    pub expected: Option<Node>,
    pub actual: Option<Node>,
}

impl Mismatch {
    pub fn new(key_path: &KeyPath, kind: MismatchKind, expected: &Node, actual: &Node) -> Self {
        Self {
            key_path: key_path.clone(),
            kind,
            expected: Some(expected.clone()),
            actual: Some(actual.clone()),
        }
    }

    pub fn type_mismatch(key_path: &KeyPath, expected: &Node, actual: &Node) -> Self {
        Self::new(
            key_path,
            MismatchKind::TypeMismatch {
                expected: NodeKindName(expected.kind()),
                actual: NodeKindName(actual.kind()),
            },
            expected,
            actual,
        )
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        if let Some(expected) = &self.expected {
            writeln!(f, "  Expected: {expected}")?;
        }
        if let Some(actual) = &self.actual {
            writeln!(f, "  Actual: {actual}")?;
        }
        write!(f, "  Key path: {}", self.key_path)
    }
}

/// Outcome of one top-level comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub passed: bool,
    pub mismatches: Vec<Mismatch>,
}

impl ComparisonResult {
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            return f.write_str("Expected and actual match.");
        }
        write!(f, "{} mismatch(es) found", self.mismatches.len())?;
        for mismatch in &self.mismatches {
            write!(f, "\n\n{mismatch}")?;
        }
        Ok(())
    }
}
