use serde::{Deserialize, Serialize};

/// A personal-information mention reported by the detector.
///
/// `surface_form` may be empty or whitespace-only; the matcher skips those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub category: String,
    pub surface_form: String,
    /// Detector score in [0, 1].
    pub confidence: f64,
}

impl Entity {
    pub fn new(
        category: impl Into<String>,
        surface_form: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            category: category.into(),
            surface_form: surface_form.into(),
            confidence,
        }
    }

    /// Whether the surface form has anything to match.
    pub fn is_matchable(&self) -> bool {
        !self.surface_form.trim().is_empty()
    }
}

/// Wire shape of one detector entity: `{ entity_group, word, score }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedEntity {
    pub entity_group: String,
    pub word: String,
    pub score: f64,
}

impl From<DetectedEntity> for Entity {
    fn from(d: DetectedEntity) -> Self {
        Self {
            category: d.entity_group,
            surface_form: d.word,
            confidence: d.score,
        }
    }
}

impl From<&Entity> for DetectedEntity {
    fn from(e: &Entity) -> Self {
        Self {
            entity_group: e.category.clone(),
            word: e.surface_form.clone(),
            score: e.confidence,
        }
    }
}

/// Wire shape of a detector response: `{ "entities": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    #[serde(default)]
    pub entities: Vec<DetectedEntity>,
}

impl DetectionResult {
    pub fn into_entities(self) -> Vec<Entity> {
        self.entities.into_iter().map(Entity::from).collect()
    }
}
