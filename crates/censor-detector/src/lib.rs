//! # censor-detector
//!
//! Everything on the far side of the detection call. A detector returns raw
//! JSON; this crate turns it into `Entity` values the matcher can consume.
//!
//! - `parse`: tolerant decoding of `{ "entities": [...] }`
//! - `static_detector`: fixed-payload detector (demo output, tests)
//! - `http`: blocking HTTP detector with retry and backoff (feature `http`)

pub mod http;
pub mod parse;
pub mod static_detector;

pub use http::HttpDetector;
pub use parse::{filter_by_confidence, parse_detection};
pub use static_detector::StaticDetector;

use censor_core::traits::IDetector;
use censor_core::{CensorResult, Entity};

/// Call `detector`, parse its response, and keep entities scoring strictly
/// above `threshold`.
pub fn detect_entities(
    detector: &dyn IDetector,
    text: &str,
    threshold: f64,
) -> CensorResult<Vec<Entity>> {
    let raw = detector.detect(text)?;
    let parsed = parse_detection(&raw)?;
    let parsed_count = parsed.len();
    let kept = filter_by_confidence(parsed, threshold);
    tracing::debug!(
        parsed = parsed_count,
        kept = kept.len(),
        threshold = threshold,
        "detector entities filtered"
    );
    Ok(kept)
}
