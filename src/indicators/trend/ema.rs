//! Moving averages over closes.

use crate::common::math;
use crate::models::bar::Bar;

/// Latest EMA of closes.
pub fn ema(bars: &[Bar], period: usize) -> Option<f64> {
    if bars.len() < period {
        return None;
    }
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::ema(&closes, period)
}

/// Latest SMA of closes.
pub fn sma(bars: &[Bar], period: usize) -> Option<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::sma(&closes, period)
}
