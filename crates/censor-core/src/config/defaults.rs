// Single source of truth for all default values.

// --- Detector ---
pub const DEFAULT_DETECTOR_ENDPOINT: &str = "";
pub const DEFAULT_DETECTOR_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_DETECTOR_MAX_RETRIES: u32 = 3;
pub const DEFAULT_DETECTOR_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_DETECTOR_MAX_BACKOFF_MS: u64 = 30_000;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

// --- Render ---
pub const DEFAULT_USE_DEFAULT_LABELS: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
