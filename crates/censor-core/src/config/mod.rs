pub mod defaults;
mod detector_config;
mod matching_config;
mod observability_config;
mod render_config;

pub use detector_config::DetectorConfig;
pub use matching_config::{MatchMode, MatchingConfig};
pub use observability_config::ObservabilityConfig;
pub use render_config::RenderConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{CensorResult, ConfigError};

/// Top-level configuration. Every section falls back to its defaults when
/// omitted, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CensorConfig {
    pub matching: MatchingConfig,
    pub detector: DetectorConfig,
    pub render: RenderConfig,
    pub observability: ObservabilityConfig,
}

impl CensorConfig {
    /// Parse and validate a TOML config document.
    pub fn from_toml(source: &str) -> CensorResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> CensorResult<String> {
        toml::to_string(self).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn validate(&self) -> CensorResult<()> {
        let threshold = self.detector.confidence_threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(invalid(
                "detector.confidence_threshold",
                format!("must be within [0, 1], got {threshold}"),
            ));
        }
        if self.detector.timeout_ms == 0 {
            return Err(invalid("detector.timeout_ms", "must be greater than zero".into()));
        }
        if self.detector.max_backoff_ms < self.detector.initial_backoff_ms {
            return Err(invalid(
                "detector.max_backoff_ms",
                format!(
                    "{} is below initial_backoff_ms {}",
                    self.detector.max_backoff_ms, self.detector.initial_backoff_ms
                ),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: String) -> crate::errors::CensorError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason,
    }
    .into()
}
