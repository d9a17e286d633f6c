mod censor_state;
mod entity;
mod segment;
mod text_match;

pub use censor_state::CensorState;
pub use entity::{DetectedEntity, DetectionResult, Entity};
pub use segment::Segment;
pub use text_match::TextMatch;
