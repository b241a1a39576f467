//! Banded-volatility oscillator (Bollinger style).

use crate::common::math;
use crate::config::BollingerConfig;
use crate::models::bar::Bar;
use crate::models::indicators::BollingerReading;

/// Rolling mean ± k standard deviations, plus where the close sits inside the
/// band (0 = lower, 1 = upper). A collapsed band reads as the midpoint.
pub fn bands(bars: &[Bar], cfg: &BollingerConfig) -> Option<BollingerReading> {
    if bars.len() < cfg.period {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let middle = math::sma(&closes, cfg.period)?;
    let std = math::std_dev(&closes, cfg.period)?;

    let upper = middle + cfg.std_dev * std;
    let lower = middle - cfg.std_dev * std;
    let close = closes[closes.len() - 1];

    let width = upper - lower;
    let position = if width == 0.0 {
        0.5
    } else {
        (close - lower) / width
    };

    Some(BollingerReading {
        upper,
        middle,
        lower,
        position,
    })
}
