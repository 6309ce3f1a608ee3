use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How scalar values are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Same type and same literal value
    #[default]
    #[serde(alias = "exact")]
    #[strum(to_string = "exact_value", serialize = "exact")]
    ExactValue,
    /// Same type only
    #[serde(alias = "type")]
    #[strum(to_string = "type_only", serialize = "type")]
    TypeOnly,
}

impl MatchMode {
    pub fn invert(self) -> Self {
        match self {
            MatchMode::ExactValue => MatchMode::TypeOnly,
            MatchMode::TypeOnly => MatchMode::ExactValue,
        }
    }
}

/// Settings for a flexible comparison
///
/// `alternate_paths` name locations in the expected document where `mode`
/// flips for that value and everything below it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    pub mode: MatchMode,
    pub alternate_paths: Vec<String>,
}

impl MatchOptions {
    pub fn exact() -> Self {
        Self::default()
    }

    pub fn type_only() -> Self {
        Self {
            mode: MatchMode::TypeOnly,
            alternate_paths: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.alternate_paths
            .extend(paths.into_iter().map(|p| p.as_ref().to_string()));
        self
    }
}
