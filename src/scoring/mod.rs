//! Composite scorers: Trend Score, Timing Score, and the momentum scorer.

pub mod momentum;
pub mod timing;
pub mod trend;

use serde::{Deserialize, Serialize};

/// One weighted sub-component of a composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentScore {
    pub score: i32,
    pub max: i32,
    /// The underlying indicator value the points were awarded for.
    pub value: f64,
    pub detail: String,
}

impl ComponentScore {
    pub fn new(score: i32, max: i32, value: f64, detail: impl Into<String>) -> Self {
        Self {
            score: score.min(max),
            max,
            value,
            detail: detail.into(),
        }
    }

    pub fn unavailable(max: i32) -> Self {
        Self {
            score: 0,
            max,
            value: 0.0,
            detail: "insufficient data".to_string(),
        }
    }
}
