//! # censor-observability
//!
//! Subscriber setup driven by `CENSOR_LOG` or the `[observability]` config
//! section, plus structured events for detection and censor-state changes.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, LOG_ENV_VAR};
