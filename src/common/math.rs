//! Shared numeric primitives used by the indicator library.

/// Simple moving average over the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let sum: f64 = values[values.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Exponential moving average series (span smoothing, seeded with the first value).
///
/// alpha = 2 / (period + 1), ema[0] = values[0]
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if values.is_empty() || period == 0 {
        return Vec::new();
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = values[0];
    out.push(prev);
    for &value in &values[1..] {
        prev = alpha * value + (1.0 - alpha) * prev;
        out.push(prev);
    }
    out
}

/// Last value of the EMA series, requiring at least `period` samples.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if values.len() < period {
        return None;
    }
    ema_series(values, period).last().copied()
}

/// Sample standard deviation over the last `period` values.
pub fn std_dev(values: &[f64], period: usize) -> Option<f64> {
    if period < 2 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / (period - 1) as f64;
    Some(variance.sqrt())
}

/// True range of a single bar given the previous close.
///
/// TR = max(high - low, |high - prev_close|, |low - prev_close|)
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// Percent rate of change between the last value and the `offset`-th value from
/// the end (offset 1 is the last value itself).
pub fn rate_of_change(values: &[f64], offset: usize) -> Option<f64> {
    if offset == 0 || values.len() < offset {
        return None;
    }
    let start = values[values.len() - offset];
    if start == 0.0 {
        return Some(0.0);
    }
    Some((values[values.len() - 1] / start - 1.0) * 100.0)
}
