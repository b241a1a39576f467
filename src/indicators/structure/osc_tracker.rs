//! Stop-and-reverse tracker applied to the relative-strength oscillator.
//!
//! This is the primary directional signal: the oscillator usually turns one
//! to three bars before price does, so its tracker flips ahead of the price
//! tracker. The price tracker stays in the loop purely as a risk filter.

use crate::config::{RsiConfig, TrackerConfig};
use crate::indicators::momentum::rsi::rsi_series;
use crate::indicators::structure::tracker::track_series;
use crate::models::bar::{closes, Bar};
use crate::models::indicators::{
    DivergenceKind, OscillatorTracker, RsiDivergence, TrendDirection,
};

/// Bars required before the oscillator tracker is meaningful.
pub const MIN_BARS: usize = 20;

const DIVERGENCE_LOOKBACK: usize = 10;

/// Oscillator-tracker summary for the last bar.
pub fn analyze(
    bars: &[Bar],
    rsi_cfg: &RsiConfig,
    tracker_cfg: &TrackerConfig,
) -> Option<OscillatorTracker> {
    if bars.len() < MIN_BARS {
        return None;
    }

    let close_values = closes(bars);
    let rsi_values = rsi_series(&close_values, rsi_cfg.period)?;
    let points = track_series(&rsi_values, tracker_cfg);
    if points.is_empty() {
        return None;
    }

    let last = points.len() - 1;
    let trend = if points[last].trend == 1 {
        TrendDirection::Bullish
    } else {
        TrendDirection::Bearish
    };

    let mut days_since_flip = 1usize;
    for i in (0..last).rev() {
        if points[i].trend == points[last].trend {
            days_since_flip += 1;
        } else {
            break;
        }
    }

    Some(OscillatorTracker {
        rsi: rsi_values[last],
        stop: points[last].stop,
        trend,
        days_since_flip,
        divergence: detect_divergence(bars, rsi_cfg, DIVERGENCE_LOOKBACK),
    })
}

/// Divergence between price and the oscillator over a short lookback.
///
/// Bullish: price sits at/near its recent low while the oscillator holds
/// clearly above its own low. Bearish is the mirror case.
pub fn detect_divergence(
    bars: &[Bar],
    rsi_cfg: &RsiConfig,
    lookback: usize,
) -> Option<RsiDivergence> {
    if bars.len() < lookback + 5 {
        return None;
    }

    let close_values = closes(bars);
    let rsi_values = rsi_series(&close_values, rsi_cfg.period)?;
    if rsi_values.len() < lookback {
        return None;
    }

    let recent_price = &close_values[close_values.len() - lookback..];
    let recent_rsi = &rsi_values[rsi_values.len() - lookback..];
    let current_price = *close_values.last()?;
    let current_rsi = *rsi_values.last()?;

    let price_min = recent_price.iter().cloned().fold(f64::INFINITY, f64::min);
    let price_max = recent_price
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    let rsi_min = recent_rsi.iter().cloned().fold(f64::INFINITY, f64::min);
    let rsi_max = recent_rsi.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if current_price <= price_min * 1.02 && current_rsi > rsi_min + 5.0 {
        return Some(RsiDivergence {
            kind: DivergenceKind::Bullish,
            description: "Price at low but oscillator shows strength".to_string(),
        });
    }

    if current_price >= price_max * 0.98 && current_rsi < rsi_max - 5.0 {
        return Some(RsiDivergence {
            kind: DivergenceKind::Bearish,
            description: "Price at high but oscillator shows weakness".to_string(),
        });
    }

    None
}
