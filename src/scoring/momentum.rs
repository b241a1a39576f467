//! Momentum/exhaustion scorer (1-10) with selectable interpretation.
//!
//! The score measures how long and how far a trend has run. The classic
//! reading treats 9-10 as the strongest buy; the revised reading treats 9-10
//! as exhausted (the move already happened) and puts the ideal entry at 5-7.

use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::config::{EngineConfig, MomentumConfig, MomentumStrategy};
use crate::models::bar::{closes, Bar};
use crate::models::indicators::TrackerPoint;

/// Bars measured by the acceleration qualifier.
const ACCEL_LOOKBACK: usize = 5;

/// How a momentum score should be acted on under the selected strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumInterpretation {
    pub zone: String,
    pub action: String,
    pub description: String,
    pub entry_allowed: bool,
    /// Subtracted from the entry quality score.
    pub entry_penalty: i32,
}

/// Short- vs. medium-term rate-of-change comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccelerationDirection {
    Accelerating,
    Increasing,
    Steady,
    Decreasing,
    Decelerating,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumAcceleration {
    pub value: f64,
    pub direction: AccelerationDirection,
}

/// Complete momentum analysis for one bar series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumReading {
    pub score: i32,
    pub interpretation: MomentumInterpretation,
    pub acceleration: MomentumAcceleration,
    pub is_ideal_entry: bool,
    pub is_exhausted: bool,
    pub entry_allowed: bool,
}

/// Momentum score 1-10.
///
/// With a tracker series available the score keys on consecutive days in
/// trend plus the gap magnitude; without one it falls back to rate-of-change
/// and up/down-day consistency over the lookback. Too little history reads as
/// a neutral 5.
pub fn momentum_score(
    bars: &[Bar],
    tracker: Option<&[TrackerPoint]>,
    cfg: &MomentumConfig,
) -> i32 {
    if bars.len() < cfg.lookback {
        return 5;
    }

    let close_values = closes(bars);
    let score = match tracker {
        Some(points) if points.len() == bars.len() => {
            tracker_path(&close_values, points)
        }
        _ => fallback_path(&close_values, cfg),
    };

    score.clamp(1, 10)
}

fn tracker_path(close_values: &[f64], points: &[TrackerPoint]) -> i32 {
    let last = close_values.len() - 1;
    let price = close_values[last];
    let stop = points[last].stop;
    let is_bullish = price > stop;

    let mut days_in_trend = 1usize;
    let floor = close_values.len().saturating_sub(50);
    for i in (floor + 1..=last.saturating_sub(1)).rev() {
        if (close_values[i] > points[i].stop) == is_bullish {
            days_in_trend += 1;
        } else {
            break;
        }
    }

    let gap_pct = if stop != 0.0 {
        ((price - stop) / stop).abs() * 100.0
    } else {
        0.0
    };

    if is_bullish {
        if days_in_trend >= 20 && gap_pct > 10.0 {
            10
        } else if days_in_trend >= 15 && gap_pct > 7.0 {
            9
        } else if days_in_trend >= 10 && gap_pct > 5.0 {
            8
        } else if days_in_trend >= 7 && gap_pct > 3.0 {
            7
        } else if days_in_trend >= 5 {
            6
        } else if days_in_trend >= 3 {
            5
        } else {
            4
        }
    } else if days_in_trend >= 15 && gap_pct > 10.0 {
        1
    } else if days_in_trend >= 10 && gap_pct > 7.0 {
        2
    } else if days_in_trend >= 7 && gap_pct > 5.0 {
        3
    } else if days_in_trend >= 5 {
        4
    } else {
        5
    }
}

fn fallback_path(close_values: &[f64], cfg: &MomentumConfig) -> i32 {
    let lookback = cfg.lookback.min(close_values.len() - 1);
    let changes: Vec<f64> = (close_values.len() - lookback..close_values.len())
        .map(|i| close_values[i] - close_values[i - 1])
        .collect();
    let up_days = changes.iter().filter(|c| **c > 0.0).count();
    let down_days = changes.iter().filter(|c| **c < 0.0).count();

    let roc = math::rate_of_change(close_values, lookback).unwrap_or(0.0);
    let start = close_values[close_values.len() - lookback];
    let end = close_values[close_values.len() - 1];

    if end > start {
        let consistency = up_days as f64 / lookback as f64;
        if roc > 15.0 && consistency > 0.7 {
            10
        } else if roc > 10.0 && consistency > 0.6 {
            9
        } else if roc > 7.0 && consistency > 0.5 {
            8
        } else if roc > 5.0 && consistency > 0.5 {
            7
        } else if roc > 3.0 {
            6
        } else if roc > 0.0 {
            5
        } else {
            4
        }
    } else {
        let consistency = down_days as f64 / lookback as f64;
        if roc < -15.0 && consistency > 0.7 {
            1
        } else if roc < -10.0 && consistency > 0.6 {
            2
        } else if roc < -5.0 && consistency > 0.5 {
            3
        } else if roc < 0.0 {
            4
        } else {
            5
        }
    }
}

/// Interpret a score under the selected strategy.
pub fn interpret(
    score: i32,
    strategy: MomentumStrategy,
    cfg: &MomentumConfig,
) -> MomentumInterpretation {
    match strategy {
        MomentumStrategy::Classic => interpret_classic(score),
        MomentumStrategy::Revised => interpret_revised(score, cfg),
    }
}

/// Classic reading: higher is simply stronger.
fn interpret_classic(score: i32) -> MomentumInterpretation {
    let (zone, action, description) = if score >= 9 {
        ("STRONG_BUY", "Buy aggressively", "Very strong momentum")
    } else if score >= 7 {
        ("BUY", "Buy", "Strong momentum")
    } else if score >= 5 {
        ("NEUTRAL", "Hold", "Neutral momentum")
    } else if score >= 3 {
        ("WEAK", "Caution", "Weak momentum")
    } else {
        ("SELL", "Sell/Avoid", "Very weak momentum")
    };

    MomentumInterpretation {
        zone: zone.to_string(),
        action: action.to_string(),
        description: description.to_string(),
        entry_allowed: true,
        entry_penalty: 0,
    }
}

/// Revised reading: the score times the entry, it does not rank strength.
fn interpret_revised(score: i32, cfg: &MomentumConfig) -> MomentumInterpretation {
    let (zone, action, description, entry_allowed, entry_penalty) = if score >= cfg.exhausted_min {
        (
            "HOLD_ONLY",
            "HOLD existing, NO new entries",
            "Exhausted - trend extended, high risk for new entries",
            false,
            -20,
        )
    } else if score >= cfg.strong_min {
        (
            "STRONG",
            "Enter with caution",
            "Strong trend - good for holding, late for entries",
            true,
            -10,
        )
    } else if score >= cfg.ideal_min {
        (
            "IDEAL_ENTRY",
            "IDEAL entry zone",
            "Accelerating - best time to enter",
            true,
            0,
        )
    } else if score >= cfg.weak_max {
        (
            "BUILDING",
            "Watch closely",
            "Momentum building - wait for confirmation",
            true,
            -5,
        )
    } else {
        (
            "WEAK",
            "Avoid or watch for bounce",
            "Weak/negative momentum - capitulation zone",
            false,
            -25,
        )
    };

    MomentumInterpretation {
        zone: zone.to_string(),
        action: action.to_string(),
        description: description.to_string(),
        entry_allowed,
        entry_penalty,
    }
}

/// Acceleration qualifier: distinguishes "7 and rising" from "7 and fading".
pub fn acceleration(bars: &[Bar]) -> MomentumAcceleration {
    if bars.len() < ACCEL_LOOKBACK + 5 {
        return MomentumAcceleration {
            value: 0.0,
            direction: AccelerationDirection::Steady,
        };
    }

    let close_values = closes(bars);
    let n = close_values.len();
    let roc_short = if close_values[n - 3] != 0.0 {
        (close_values[n - 1] / close_values[n - 3] - 1.0) * 100.0
    } else {
        0.0
    };
    let roc_medium = if close_values[n - ACCEL_LOOKBACK] != 0.0 {
        (close_values[n - 3] / close_values[n - ACCEL_LOOKBACK] - 1.0) * 100.0
    } else {
        0.0
    };

    let value = roc_short - roc_medium;
    let direction = if value > 2.0 {
        AccelerationDirection::Accelerating
    } else if value > 0.5 {
        AccelerationDirection::Increasing
    } else if value > -0.5 {
        AccelerationDirection::Steady
    } else if value > -2.0 {
        AccelerationDirection::Decreasing
    } else {
        AccelerationDirection::Decelerating
    };

    MomentumAcceleration { value, direction }
}

/// Full momentum analysis under the configured strategy.
pub fn analyze(
    bars: &[Bar],
    tracker: Option<&[TrackerPoint]>,
    cfg: &EngineConfig,
) -> MomentumReading {
    let score = momentum_score(bars, tracker, &cfg.momentum);
    let interpretation = interpret(score, cfg.strategy, &cfg.momentum);
    let entry_allowed = interpretation.entry_allowed;

    MomentumReading {
        score,
        interpretation,
        acceleration: acceleration(bars),
        is_ideal_entry: score >= cfg.momentum.ideal_min && score <= cfg.momentum.ideal_max,
        is_exhausted: score >= cfg.momentum.exhausted_min,
        entry_allowed,
    }
}
