//! # censor-text
//!
//! The redaction pipeline proper:
//! text + entities → matcher → overlap resolution → segments → censor state → rendered text.
//! Every stage is a pure function over immutable input.

pub mod engine;
pub mod matcher;
pub mod overlap;
pub mod renderer;
pub mod segmentation;
pub mod segmenter;
pub mod state;

pub use engine::CensorEngine;
pub use matcher::find_matches;
pub use overlap::resolve_overlaps;
pub use renderer::{render, render_with_labels};
pub use segmentation::Segmentation;
pub use segmenter::build_segments;
pub use state::{censor_all, toggle, uncensor_all};
