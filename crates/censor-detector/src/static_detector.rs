use censor_core::traits::IDetector;
use censor_core::{CensorResult, DetectedEntity, DetectionResult, Entity};

/// Response used when no detection model is wired in yet.
const DEMO_RESPONSE: &str = r#"{"entities":[{"entity_group":"NAME","word":"mike","score":0.87544074058532715},{"entity_group":"ADDRESS","word":"block 110","score":0.9386700391769409}]}"#;

/// A detector that ignores its input and answers with a fixed payload.
#[derive(Debug, Clone)]
pub struct StaticDetector {
    payload: String,
}

impl StaticDetector {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Serialize `entities` into the detector wire format.
    pub fn from_entities(entities: &[Entity]) -> CensorResult<Self> {
        let result = DetectionResult {
            entities: entities.iter().map(DetectedEntity::from).collect(),
        };
        Ok(Self::new(serde_json::to_string(&result)?))
    }

    /// The stock demo answer: NAME "mike" and ADDRESS "block 110".
    pub fn demo() -> Self {
        Self::new(DEMO_RESPONSE)
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl IDetector for StaticDetector {
    fn detect(&self, _text: &str) -> CensorResult<String> {
        Ok(self.payload.clone())
    }
}
