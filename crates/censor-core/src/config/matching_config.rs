use serde::{Deserialize, Serialize};

/// How entity surface forms are located in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Whole-word, case-insensitive, literal match of the surface form.
    #[default]
    Strict,
    /// Case-insensitive match of the surface form's alphanumeric tokens,
    /// allowing any run of punctuation or whitespace between them.
    Flexible,
}

/// Matcher configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub mode: MatchMode,
}
