use crate::errors::CensorResult;

/// External entity detector.
///
/// Returns the raw JSON payload shaped as
/// `{ "entities": [{ "entity_group", "word", "score" }, ...] }`.
/// Parsing and confidence filtering happen on the caller's side.
pub trait IDetector: Send + Sync {
    fn detect(&self, text: &str) -> CensorResult<String>;
}
