//! Timing Score: "is now a good moment to enter" (0-100).
//!
//! Mean-reversion components: range oscillator position, band position, RSI
//! position, and the tracker-gap risk. The Trend Score picks what to trade;
//! this score picks when.

use serde::{Deserialize, Serialize};

use crate::config::{EngineConfig, GapConfig};
use crate::indicators::momentum::rsi::rsi;
use crate::indicators::momentum::williams::williams_r;
use crate::indicators::volatility::bollinger::bands;
use crate::models::bar::{closes, Bar};
use crate::scoring::ComponentScore;

/// Bars required for a meaningful Timing Score.
pub const MIN_BARS: usize = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingScore {
    pub score: i32,
    pub insufficient: bool,
    pub is_ideal: bool,
    pub is_overbought: bool,
    pub is_oversold: bool,
    /// False only when the gap component hits its hard ceiling.
    pub entry_allowed: bool,
    pub williams: ComponentScore,
    pub bollinger: ComponentScore,
    pub rsi_position: ComponentScore,
    pub gap: ComponentScore,
}

impl TimingScore {
    fn neutral(cfg: &EngineConfig) -> Self {
        let w = &cfg.timing_score.weights;
        Self {
            score: 50,
            insufficient: true,
            is_ideal: false,
            is_overbought: false,
            is_oversold: false,
            entry_allowed: true,
            williams: ComponentScore::unavailable(w.williams),
            bollinger: ComponentScore::unavailable(w.bollinger),
            rsi_position: ComponentScore::unavailable(w.rsi_position),
            gap: ComponentScore::unavailable(w.gap),
        }
    }
}

/// Compute the Timing Score. The tracker gap is an input because the price
/// tracker owns it.
pub fn timing_score(bars: &[Bar], gap_percent: f64, cfg: &EngineConfig) -> TimingScore {
    if bars.len() < MIN_BARS {
        return TimingScore::neutral(cfg);
    }

    let w = &cfg.timing_score.weights;
    let williams = williams_score(bars, cfg, w.williams);
    let bollinger = bollinger_score(bars, cfg, w.bollinger);
    let rsi_pos = rsi_position_score(bars, cfg, w.rsi_position);
    let (gap, entry_allowed) = gap_score(gap_percent, &cfg.gap, w.gap);

    let score = williams.score + bollinger.score + rsi_pos.score + gap.score;
    let t = &cfg.timing_score;

    TimingScore {
        score,
        insufficient: false,
        is_ideal: score >= t.ideal_min && score <= t.ideal_max,
        is_overbought: score >= t.overbought,
        is_oversold: score < t.oversold,
        entry_allowed,
        williams,
        bollinger,
        rsi_position: rsi_pos,
        gap,
    }
}

/// Range-oscillator position: best mid-range, worst at the extremes.
pub fn williams_score(bars: &[Bar], cfg: &EngineConfig, max_points: i32) -> ComponentScore {
    let value = match williams_r(bars, cfg.williams.period) {
        Some(v) => v,
        None => return ComponentScore::unavailable(max_points),
    };

    let (score, zone) = if (-60.0..=-40.0).contains(&value) {
        (25, "ideal entry zone")
    } else if (-70.0..=-30.0).contains(&value) {
        (20, "good entry zone")
    } else if (-80.0..=-20.0).contains(&value) {
        (15, "acceptable")
    } else if value > cfg.williams.overbought {
        (5, "overbought")
    } else if value < cfg.williams.oversold {
        (10, "oversold")
    } else {
        (10, "neutral")
    };

    ComponentScore::new(
        score,
        max_points,
        value,
        format!("%R {:.1}: {} (+{})", value, zone, score),
    )
}

/// Band position: best near the middle band, worst pinned to either band.
pub fn bollinger_score(bars: &[Bar], cfg: &EngineConfig, max_points: i32) -> ComponentScore {
    let reading = match bands(bars, &cfg.bollinger) {
        Some(r) => r,
        None => return ComponentScore::unavailable(max_points),
    };

    if reading.upper - reading.lower == 0.0 {
        return ComponentScore::new(15, max_points, 0.5, "collapsed band");
    }

    let position = reading.position;
    let distance_from_middle = (position - 0.5).abs() * 2.0;

    let (score, zone) = if distance_from_middle <= 0.2 {
        (25, "near middle band")
    } else if distance_from_middle <= 0.4 {
        (20, "good position")
    } else if distance_from_middle <= 0.6 {
        (15, "acceptable")
    } else if position > 0.8 {
        (5, "near upper band")
    } else if position < 0.2 {
        (10, "near lower band")
    } else {
        (10, "extended")
    };

    ComponentScore::new(
        score,
        max_points,
        position,
        format!("band position {:.2}: {} (+{})", position, zone, score),
    )
}

/// RSI position: ideal at 45-55, fading credit toward the extremes.
pub fn rsi_position_score(bars: &[Bar], cfg: &EngineConfig, max_points: i32) -> ComponentScore {
    let close_values = closes(bars);
    let value = match rsi(&close_values, cfg.rsi.period) {
        Some(v) => v,
        None => return ComponentScore::unavailable(max_points),
    };

    let (score, zone) = if (45.0..=55.0).contains(&value) {
        (25, "ideal zone")
    } else if (40.0..=60.0).contains(&value) {
        (20, "good zone")
    } else if (35.0..=65.0).contains(&value) {
        (15, "acceptable")
    } else if value >= cfg.rsi.overbought {
        (5, "overbought")
    } else if value <= cfg.rsi.oversold {
        (10, "oversold")
    } else {
        (12, "extended")
    };

    ComponentScore::new(
        score,
        max_points,
        value,
        format!("RSI {:.1}: {} (+{})", value, zone, score),
    )
}

/// Tracker-gap risk: full points close to the stop, zero past the hard
/// maximum. Also decides whether an entry is allowed at all.
pub fn gap_score(gap_percent: f64, gap_cfg: &GapConfig, max_points: i32) -> (ComponentScore, bool) {
    let abs_gap = gap_percent.abs();

    let (score, risk) = if abs_gap < 2.0 {
        (25, "excellent entry, minimal gap")
    } else if abs_gap < gap_cfg.excellent {
        (20, "good entry, low risk")
    } else if abs_gap < 4.0 {
        (15, "acceptable, moderate risk")
    } else if abs_gap < gap_cfg.max {
        (10, "elevated risk")
    } else {
        (0, "no entry, gap too large")
    };

    let entry_allowed = abs_gap < gap_cfg.max;
    (
        ComponentScore::new(
            score,
            max_points,
            gap_percent,
            format!("gap {:+.1}%: {} (+{})", gap_percent, risk, score),
        ),
        entry_allowed,
    )
}
