//! Volatility range meter (smoothed true range + extension reading).

use crate::common::math;
use crate::config::AtrConfig;
use crate::indicators::trend::ema;
use crate::models::bar::Bar;
use crate::models::indicators::{VolatilityBand, VolatilityReading};

/// EMA-smoothed average true range over the full series.
pub fn atr(bars: &[Bar], period: usize) -> Option<f64> {
    if bars.len() < period + 1 {
        return None;
    }

    let mut tr = Vec::with_capacity(bars.len() - 1);
    for i in 1..bars.len() {
        tr.push(math::true_range(
            bars[i].high,
            bars[i].low,
            bars[i - 1].close,
        ));
    }
    math::ema_series(&tr, period).last().copied()
}

/// Volatility meter reading: how far price sits from its short EMA, as a
/// percent of price, banded by the configured thresholds.
///
/// Too little history, or a dead-flat ATR, reads as a neutral 0.0 rather than
/// failing.
pub fn volatility(bars: &[Bar], cfg: &AtrConfig) -> VolatilityReading {
    if bars.len() < cfg.period.max(cfg.ema_period) + 5 {
        return VolatilityReading::insufficient();
    }

    let price = bars[bars.len() - 1].close;
    let short_ema = match ema::ema(bars, cfg.ema_period) {
        Some(v) => v,
        None => return VolatilityReading::insufficient(),
    };
    let atr_value = match atr(bars, cfg.period) {
        Some(v) => v,
        None => return VolatilityReading::insufficient(),
    };

    let percent = if atr_value == 0.0 || price == 0.0 {
        0.0
    } else {
        (price - short_ema) / price * 100.0
    };

    VolatilityReading {
        atr: atr_value,
        percent,
        band: classify(percent, cfg),
        insufficient: false,
    }
}

/// Five-band classification of the percent reading.
pub fn classify(percent: f64, cfg: &AtrConfig) -> VolatilityBand {
    if percent >= cfg.extreme_overbought {
        VolatilityBand::ExtremeOverbought
    } else if percent >= cfg.overbought {
        VolatilityBand::Overbought
    } else if percent <= cfg.extreme_oversold {
        VolatilityBand::ExtremeOversold
    } else if percent <= cfg.oversold {
        VolatilityBand::Oversold
    } else {
        VolatilityBand::Neutral
    }
}
