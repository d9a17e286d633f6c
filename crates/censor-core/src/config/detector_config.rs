use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Entity detector boundary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Detection endpoint URL. Empty means no remote detector is configured.
    pub endpoint: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum number of retry attempts after the first request.
    pub max_retries: u32,
    /// Initial backoff in milliseconds (doubles each retry).
    pub initial_backoff_ms: u64,
    /// Upper bound on backoff in milliseconds.
    pub max_backoff_ms: u64,
    /// Entities must score strictly above this to reach the matcher.
    pub confidence_threshold: f64,
}

impl DetectorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }

    pub fn has_endpoint(&self) -> bool {
        !self.endpoint.trim().is_empty()
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_DETECTOR_ENDPOINT.to_string(),
            timeout_ms: defaults::DEFAULT_DETECTOR_TIMEOUT_MS,
            max_retries: defaults::DEFAULT_DETECTOR_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_DETECTOR_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_DETECTOR_MAX_BACKOFF_MS,
            confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}
