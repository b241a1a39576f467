//! Generic stop-and-reverse trend tracker.
//!
//! One engine, two modes: over price bars (high/low drive the clamp and the
//! reversal test) or over any scalar series (the series itself drives both).
//! The price instantiation is the risk filter; the oscillator instantiation
//! (see `osc_tracker`) is the primary signal.
//!
//! State is recomputed from the start of the series on every call; nothing is
//! carried between invocations.

use crate::config::TrackerConfig;
use crate::models::bar::Bar;
use crate::models::indicators::{CrossDirection, PriceTracker, TrackerPoint, TrendDirection};

/// Bars required before the price-mode summary is meaningful.
pub const MIN_BARS: usize = 10;

/// Recent-cross window: flips older than this are no longer "recent".
const CROSS_WINDOW: usize = 5;

/// Initial stop offset for scalar mode, in series units.
const SERIES_SEED_OFFSET: f64 = 5.0;

/// Signed percent distance between a value and its stop.
pub fn gap_percent(price: f64, stop: f64) -> f64 {
    if stop == 0.0 {
        return 0.0;
    }
    (price - stop) / stop * 100.0
}

fn direction_at(price: f64, stop: f64) -> TrendDirection {
    if price > stop {
        TrendDirection::Bullish
    } else {
        TrendDirection::Bearish
    }
}

/// Run the tracker over price bars.
///
/// The first bar seeds an uptrend with stop = low, extreme = high. Per bar the
/// candidate stop ratchets toward the extreme by the acceleration factor, is
/// clamped to the prior one-to-two bars' lows (uptrend) or highs (downtrend),
/// and a cross by the bar's low/high flips the trend: the stop jumps to the
/// old extreme and the acceleration factor resets.
pub fn track_price(bars: &[Bar], cfg: &TrackerConfig) -> Vec<TrackerPoint> {
    if bars.is_empty() {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(bars.len());
    let mut extreme = bars[0].high;
    let mut af = cfg.af_step;
    points.push(TrackerPoint {
        stop: bars[0].low,
        trend: 1,
    });

    for i in 1..bars.len() {
        let prev = points[i - 1];

        if prev.trend == 1 {
            let mut candidate = prev.stop + af * (extreme - prev.stop);
            candidate = candidate.min(bars[i - 1].low);
            if i >= 2 {
                candidate = candidate.min(bars[i - 2].low);
            }

            if bars[i].low < candidate {
                points.push(TrackerPoint {
                    stop: extreme,
                    trend: -1,
                });
                extreme = bars[i].low;
                af = cfg.af_step;
            } else {
                points.push(TrackerPoint {
                    stop: candidate,
                    trend: 1,
                });
                if bars[i].high > extreme {
                    extreme = bars[i].high;
                    af = (af + cfg.af_step).min(cfg.af_max);
                }
            }
        } else {
            let mut candidate = prev.stop + af * (extreme - prev.stop);
            candidate = candidate.max(bars[i - 1].high);
            if i >= 2 {
                candidate = candidate.max(bars[i - 2].high);
            }

            if bars[i].high > candidate {
                points.push(TrackerPoint {
                    stop: extreme,
                    trend: 1,
                });
                extreme = bars[i].high;
                af = cfg.af_step;
            } else {
                points.push(TrackerPoint {
                    stop: candidate,
                    trend: -1,
                });
                if bars[i].low < extreme {
                    extreme = bars[i].low;
                    af = (af + cfg.af_step).min(cfg.af_max);
                }
            }
        }
    }

    points
}

/// Run the tracker over a scalar series (oscillator mode).
///
/// Direction is seeded from the first two values; the initial stop sits a
/// fixed offset below (uptrend) or above (downtrend) the first value. Clamp
/// and reversal both test the series itself.
pub fn track_series(values: &[f64], cfg: &TrackerConfig) -> Vec<TrackerPoint> {
    if values.len() < 2 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(values.len());
    let mut extreme = values[0];
    let mut af = cfg.af_step;
    if values[1] > values[0] {
        points.push(TrackerPoint {
            stop: values[0] - SERIES_SEED_OFFSET,
            trend: 1,
        });
    } else {
        points.push(TrackerPoint {
            stop: values[0] + SERIES_SEED_OFFSET,
            trend: -1,
        });
    }

    for i in 1..values.len() {
        let prev = points[i - 1];

        if prev.trend == 1 {
            let mut candidate = prev.stop + af * (extreme - prev.stop);
            candidate = candidate.min(values[i - 1]);
            if i >= 2 {
                candidate = candidate.min(values[i - 2]);
            }

            if values[i] < candidate {
                points.push(TrackerPoint {
                    stop: extreme,
                    trend: -1,
                });
                extreme = values[i];
                af = cfg.af_step;
            } else {
                points.push(TrackerPoint {
                    stop: candidate,
                    trend: 1,
                });
                if values[i] > extreme {
                    extreme = values[i];
                    af = (af + cfg.af_step).min(cfg.af_max);
                }
            }
        } else {
            let mut candidate = prev.stop + af * (extreme - prev.stop);
            candidate = candidate.max(values[i - 1]);
            if i >= 2 {
                candidate = candidate.max(values[i - 2]);
            }

            if values[i] > candidate {
                points.push(TrackerPoint {
                    stop: extreme,
                    trend: 1,
                });
                extreme = values[i];
                af = cfg.af_step;
            } else {
                points.push(TrackerPoint {
                    stop: candidate,
                    trend: -1,
                });
                if values[i] < extreme {
                    extreme = values[i];
                    af = (af + cfg.af_step).min(cfg.af_max);
                }
            }
        }
    }

    points
}

/// Price-mode summary: current stop, gap, trend, plus the recent-cross and
/// gap-slope context the zone classifier depends on.
pub fn analyze_price(bars: &[Bar], cfg: &TrackerConfig) -> Option<PriceTracker> {
    if bars.len() < MIN_BARS {
        return None;
    }

    let points = track_price(bars, cfg);
    let last = bars.len() - 1;
    let stop = points[last].stop;
    let price = bars[last].close;
    let gap = gap_percent(price, stop);
    let trend = direction_at(price, stop);

    // Consecutive bars on the current side of the stop.
    let mut days_in_trend = 1usize;
    for i in (0..last).rev() {
        if direction_at(bars[i].close, points[i].stop) == trend {
            days_in_trend += 1;
        } else {
            break;
        }
    }

    // A flip within the window tells us which way price crossed. A down-cross
    // is a breakdown, not consolidation.
    let mut cross_direction = None;
    let mut is_broken = false;
    if days_in_trend <= CROSS_WINDOW && bars.len() > days_in_trend {
        let cross_idx = bars.len() - days_in_trend - 1;
        let prev_trend = direction_at(bars[cross_idx].close, points[cross_idx].stop);
        match (trend, prev_trend) {
            (TrendDirection::Bullish, TrendDirection::Bearish) => {
                cross_direction = Some(CrossDirection::Up);
            }
            (TrendDirection::Bearish, TrendDirection::Bullish) => {
                cross_direction = Some(CrossDirection::Down);
                is_broken = true;
            }
            _ => {}
        }
    }

    // Gap slope only uses bars since the cross: day 1 has no slope, later days
    // look back min(3, days_in_trend - 1) bars.
    let mut gap_slope = 0.0;
    if days_in_trend >= 2 && bars.len() >= 2 {
        let lookback = 3.min(days_in_trend - 1);
        if lookback >= 1 && bars.len() > lookback {
            let idx = bars.len() - (lookback + 1);
            let gap_then = gap_percent(bars[idx].close, points[idx].stop);
            gap_slope = gap - gap_then;
        }
    }

    Some(PriceTracker {
        stop,
        price,
        gap_percent: gap,
        trend,
        days_in_trend,
        gap_slope,
        cross_direction,
        is_broken,
    })
}
