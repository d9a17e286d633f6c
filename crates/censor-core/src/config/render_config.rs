use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Controls how censored entity mentions are labelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fall back to the built-in label table (PERSON → name, ...).
    pub use_default_labels: bool,
    /// Exact category → label overrides. Checked before anything else.
    pub label_overrides: HashMap<String, String>,
}

impl RenderConfig {
    /// Resolve the tag label for a category. Always lowercase.
    pub fn label_for(&self, category: &str) -> String {
        constants::label_for(category, &self.label_overrides, self.use_default_labels)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            use_default_labels: defaults::DEFAULT_USE_DEFAULT_LABELS,
            label_overrides: HashMap::new(),
        }
    }
}
