//! Range oscillator (Williams %R style).

use crate::models::bar::Bar;

/// %R over the last `period` bars: -100 at the lowest low, 0 at the highest
/// high. A zero-range window reads as the midpoint.
pub fn williams_r(bars: &[Bar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period {
        return None;
    }

    let window = &bars[bars.len() - period..];
    let highest = window.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let lowest = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let close = bars[bars.len() - 1].close;

    let range = highest - lowest;
    if range == 0.0 {
        return Some(-50.0);
    }
    Some(-100.0 * (highest - close) / range)
}
