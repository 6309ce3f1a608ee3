use thiserror::Error;

use crate::diagnostics::ComparisonResult;

/// Errors raised while preparing a comparison.
///
/// These are test-author bugs (a bad alternate path, unparseable JSON) and are
/// always reported separately from value mismatches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Malformed path `{path}`: {reason}")]
    MalformedPath { path: String, reason: String },

    #[error("Index {index} in path `{path}` is out of range (expected array length {len})")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },

    #[error("Duplicate wildcard index {index} in path `{path}`")]
    DuplicateIndex { path: String, index: usize },

    #[error("JSON error: {0}")]
    Json(String),
}

impl MatchError {
    pub(crate) fn malformed(path: &str, reason: impl Into<String>) -> Self {
        MatchError::MalformedPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::Json(err.to_string())
    }
}

/// Failure of one of the non-panicking assertion entry points.
#[derive(Error, Debug, Clone)]
pub enum AssertionError {
    #[error("Invalid alternate path: {0}")]
    Setup(#[from] MatchError),

    #[error("{0}")]
    Mismatch(ComparisonResult),
}

impl AssertionError {
    pub fn is_setup(&self) -> bool {
        matches!(self, AssertionError::Setup(_))
    }

    pub fn comparison(&self) -> Option<&ComparisonResult> {
        match self {
            AssertionError::Mismatch(result) => Some(result),
            AssertionError::Setup(_) => None,
        }
    }
}
