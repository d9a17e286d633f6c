//! Installs the global subscriber, so it lives in its own test binary.

use censor_core::config::ObservabilityConfig;
use censor_observability::{init_from_config, LOG_ENV_VAR};
use tracing::Level;

#[test]
fn config_level_drives_global_filter() {
    if std::env::var_os(LOG_ENV_VAR).is_some() {
        return;
    }
    init_from_config(&ObservabilityConfig {
        log_level: "debug".to_string(),
        json: false,
    });
    assert!(tracing::enabled!(Level::DEBUG));
    assert!(!tracing::enabled!(Level::TRACE));
}
