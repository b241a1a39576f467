//! Convergence oscillator (MACD-style).

use crate::common::math;
use crate::config::MacdConfig;
use crate::models::indicators::MacdReading;

/// MACD line, signal line, and histogram for the last bar.
///
/// MACD = EMA(fast) - EMA(slow), signal = EMA(signal) of the MACD series,
/// histogram = MACD - signal. The prior histogram value rides along so the
/// trend scorer can see whether the histogram is rising.
pub fn macd(closes: &[f64], cfg: &MacdConfig) -> Option<MacdReading> {
    if closes.len() < cfg.slow + cfg.signal {
        return None;
    }

    let fast = math::ema_series(closes, cfg.fast);
    let slow = math::ema_series(closes, cfg.slow);
    let macd_line: Vec<f64> = fast
        .iter()
        .zip(slow.iter())
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = math::ema_series(&macd_line, cfg.signal);

    let last = macd_line.len() - 1;
    let histogram = macd_line[last] - signal_line[last];
    let prev_histogram = if last >= 1 {
        macd_line[last - 1] - signal_line[last - 1]
    } else {
        0.0
    };

    Some(MacdReading {
        macd: macd_line[last],
        signal: signal_line[last],
        histogram,
        prev_histogram,
    })
}
