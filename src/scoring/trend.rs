//! Trend Score: "is this a good instrument to trade" (0-100).
//!
//! Four weighted components: moving-average alignment, direction strength
//! gated by the DMI state, the convergence oscillator, and the RSI zone.
//! High scores select instruments; the Timing Score decides when to enter.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::indicators::momentum::macd::macd;
use crate::indicators::momentum::rsi::rsi;
use crate::indicators::trend::ema;
use crate::models::bar::{closes, Bar};
use crate::models::indicators::{DirectionState, DirectionStrength};
use crate::scoring::ComponentScore;

/// Bars required for a meaningful Trend Score.
pub const MIN_BARS: usize = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendScore {
    pub score: i32,
    pub insufficient: bool,
    pub is_tradeable: bool,
    pub is_strong: bool,
    pub ma_alignment: ComponentScore,
    pub direction: ComponentScore,
    pub convergence: ComponentScore,
    pub rsi_zone: ComponentScore,
}

impl TrendScore {
    /// Neutral degraded score when the series is too short.
    fn neutral(cfg: &EngineConfig) -> Self {
        let w = &cfg.trend_score.weights;
        Self {
            score: 50,
            insufficient: true,
            is_tradeable: 50 >= cfg.trend_score.minimum,
            is_strong: false,
            ma_alignment: ComponentScore::unavailable(w.ma_alignment),
            direction: ComponentScore::unavailable(w.adx),
            convergence: ComponentScore::unavailable(w.macd),
            rsi_zone: ComponentScore::unavailable(w.rsi_zone),
        }
    }
}

/// Compute the Trend Score. The direction-strength meter is computed once by
/// the caller and passed in so the snapshot and the score never disagree.
pub fn trend_score(
    bars: &[Bar],
    direction: Option<&DirectionStrength>,
    cfg: &EngineConfig,
) -> TrendScore {
    if bars.len() < MIN_BARS {
        return TrendScore::neutral(cfg);
    }

    let w = &cfg.trend_score.weights;
    let ma = ma_alignment_score(bars, cfg, w.ma_alignment);
    let dir = direction_score(direction, cfg, w.adx);
    let conv = convergence_score(bars, cfg, w.macd);
    let zone = rsi_zone_score(bars, cfg, w.rsi_zone);

    let score = ma.score + dir.score + conv.score + zone.score;

    TrendScore {
        score,
        insufficient: false,
        is_tradeable: score >= cfg.trend_score.minimum,
        is_strong: score >= cfg.trend_score.strong,
        ma_alignment: ma,
        direction: dir,
        convergence: conv,
        rsi_zone: zone,
    }
}

/// Moving-average alignment ladder. Perfect bullish stack:
/// price > EMA fast > EMA medium > SMA slow.
pub fn ma_alignment_score(bars: &[Bar], cfg: &EngineConfig, max_points: i32) -> ComponentScore {
    let price = bars[bars.len() - 1].close;
    let ma_cfg = &cfg.moving_averages;

    let ema_fast = ema::ema(bars, ma_cfg.ema_fast);
    let ema_medium = ema::ema(bars, ma_cfg.ema_medium);
    let sma_slow = ema::sma(bars, ma_cfg.sma_slow);

    let (ema_fast, ema_medium, sma_slow) = match (ema_fast, ema_medium, sma_slow) {
        (Some(f), Some(m), Some(s)) => (f, m, s),
        _ => return ComponentScore::unavailable(max_points),
    };

    let mut score = 0;
    let mut links = Vec::new();
    if price > ema_fast {
        score += 8;
        links.push("P>F");
    }
    if ema_fast > ema_medium {
        score += 8;
        links.push("F>M");
    }
    if ema_medium > sma_slow {
        score += 7;
        links.push("M>S");
    }
    if price > sma_slow {
        score += 7;
        links.push("P>S");
    }

    let detail = if links.is_empty() {
        "no alignment".to_string()
    } else {
        links.join(" ")
    };
    ComponentScore::new(score, max_points, links.len() as f64, detail)
}

/// Direction strength, gated by the DMI state: full credit only when the
/// market is trending bullish, half when choppy, nothing when bearish.
pub fn direction_score(
    direction: Option<&DirectionStrength>,
    cfg: &EngineConfig,
    max_points: i32,
) -> ComponentScore {
    let dir = match direction {
        Some(d) => d,
        None => return ComponentScore::unavailable(max_points),
    };

    let band = if dir.adx > 40.0 {
        25
    } else if dir.adx > 30.0 {
        20
    } else if dir.adx > cfg.adx.strong_trend {
        15
    } else if dir.adx > cfg.adx.weak_trend {
        10
    } else {
        5
    };

    let (score, label) = match dir.state {
        DirectionState::Bullish => (band, "bullish"),
        DirectionState::Choppy => (band / 2, "choppy"),
        DirectionState::Bearish => (0, "bearish"),
    };

    ComponentScore::new(
        score,
        max_points,
        dir.adx,
        format!("ADX {:.1}, {} (+{})", dir.adx, label, score),
    )
}

/// Convergence oscillator: above its signal line, histogram positive, and
/// histogram rising each earn points.
pub fn convergence_score(bars: &[Bar], cfg: &EngineConfig, max_points: i32) -> ComponentScore {
    let close_values = closes(bars);
    let reading = match macd(&close_values, &cfg.macd) {
        Some(r) => r,
        None => return ComponentScore::unavailable(max_points),
    };

    let mut score = 0;
    let mut details = Vec::new();
    if reading.macd > reading.signal {
        score += 13;
        details.push("above signal (+13)");
    }
    if reading.histogram > 0.0 {
        score += 7;
        details.push("histogram positive (+7)");
    }
    if reading.histogram > reading.prev_histogram {
        score += 5;
        details.push("histogram rising (+5)");
    }

    let detail = if details.is_empty() {
        "below signal".to_string()
    } else {
        details.join(", ")
    };
    ComponentScore::new(score, max_points, reading.histogram, detail)
}

/// RSI zone: full credit in the bullish 50-70 band, fading credit toward the
/// extremes on either side.
pub fn rsi_zone_score(bars: &[Bar], cfg: &EngineConfig, max_points: i32) -> ComponentScore {
    let close_values = closes(bars);
    let value = match rsi(&close_values, cfg.rsi.period) {
        Some(v) => v,
        None => return ComponentScore::unavailable(max_points),
    };

    let (score, zone) = if value >= 80.0 {
        (4, "extreme overbought")
    } else if value >= cfg.rsi.overbought {
        (10, "overbought")
    } else if value >= 50.0 {
        (20, "bullish zone")
    } else if value >= 40.0 {
        (12, "neutral")
    } else if value >= cfg.rsi.oversold {
        (6, "weak")
    } else {
        (2, "oversold")
    };

    ComponentScore::new(
        score,
        max_points,
        value,
        format!("RSI {:.1}: {} (+{})", value, zone, score),
    )
}
