//! Decode detector responses.
//!
//! Invalid JSON is a detector failure. Anything short of that degrades to
//! fewer entities: a missing or non-array `entities` field is an empty list,
//! and entries missing `entity_group`/`word` or carrying a non-numeric
//! `score` are dropped one by one.

use censor_core::errors::{CensorResult, DetectorError};
use censor_core::{DetectedEntity, Entity};
use serde_json::Value;

pub fn parse_detection(json: &str) -> CensorResult<Vec<Entity>> {
    let value: Value = serde_json::from_str(json).map_err(|e| DetectorError::MalformedResponse {
        reason: e.to_string(),
    })?;

    let Some(items) = value.get("entities").and_then(Value::as_array) else {
        tracing::debug!("detector response has no entities array; treating as empty");
        return Ok(Vec::new());
    };

    let entities = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            match serde_json::from_value::<DetectedEntity>(item.clone()) {
                Ok(detected) => Some(Entity::from(detected)),
                Err(e) => {
                    tracing::debug!(index, error = %e, "skipping malformed detector entity");
                    None
                }
            }
        })
        .collect();

    Ok(entities)
}

/// Keep entities whose confidence is strictly above `threshold`.
pub fn filter_by_confidence(entities: Vec<Entity>, threshold: f64) -> Vec<Entity> {
    entities
        .into_iter()
        .filter(|e| e.confidence > threshold)
        .collect()
}
