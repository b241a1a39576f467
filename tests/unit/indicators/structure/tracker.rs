//! Unit tests for the stop-and-reverse tracker

use chrono::{Duration, TimeZone, Utc};
use zonetrix::config::TrackerConfig;
use zonetrix::indicators::structure::tracker::{
    analyze_price, gap_percent, track_price, track_series,
};
use zonetrix::models::indicators::{CrossDirection, TrendDirection};
use zonetrix::models::Bar;

fn bar(base: f64, i: usize) -> Bar {
    let start = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
    Bar::new(
        base,
        base + 0.4,
        base - 0.2,
        base + 0.2,
        1_000_000.0,
        start + Duration::days(i as i64),
    )
}

fn uptrend(count: usize) -> Vec<Bar> {
    (0..count).map(|i| bar(100.0 + i as f64 * 0.3, i)).collect()
}

#[test]
fn test_gap_percent() {
    assert!((gap_percent(105.0, 100.0) - 5.0).abs() < 1e-9);
    assert!((gap_percent(95.0, 100.0) + 5.0).abs() < 1e-9);
    assert_eq!(gap_percent(100.0, 0.0), 0.0);
}

#[test]
fn test_steady_uptrend_never_flips() {
    let bars = uptrend(60);
    let points = track_price(&bars, &TrackerConfig::default());
    assert_eq!(points.len(), 60);
    assert!(points.iter().all(|p| p.trend == 1));
}

#[test]
fn test_stop_ratchets_up_in_uptrend() {
    let bars = uptrend(60);
    let points = track_price(&bars, &TrackerConfig::default());
    for i in 1..points.len() {
        assert!(
            points[i].stop >= points[i - 1].stop,
            "stop fell at bar {}: {} < {}",
            i,
            points[i].stop,
            points[i - 1].stop
        );
    }
}

#[test]
fn test_acceleration_closes_the_gap() {
    // With the factor ratcheting to its cap, the stop trails a long steady
    // trend closely.
    let bars = uptrend(80);
    let last = bars.last().unwrap().close;
    let points = track_price(&bars, &TrackerConfig::default());
    let gap = gap_percent(last, points.last().unwrap().stop);
    assert!(gap > 0.0);
    assert!(gap < 2.0, "gap {gap} should be tight after a long trend");
}

#[test]
fn test_flip_moves_stop_to_old_extreme() {
    let mut bars = uptrend(30);
    let peak_high = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    // One crash bar far below the trailing stop.
    let crash_base = 60.0;
    bars.push(bar(crash_base, 30));

    let points = track_price(&bars, &TrackerConfig::default());
    let flipped = points.last().unwrap();
    assert_eq!(flipped.trend, -1);
    assert!((flipped.stop - peak_high).abs() < 1e-9);
}

#[test]
fn test_flip_only_on_stop_cross() {
    // A pullback that stays above the stop must not flip the trend.
    let mut bars = uptrend(40);
    let last_close = bars.last().unwrap().close;
    // Shallow dip: well above the stop, which trails ~1 point behind.
    bars.push(bar(last_close - 0.4, 40));
    let points = track_price(&bars, &TrackerConfig::default());
    assert_eq!(points.last().unwrap().trend, 1);
}

#[test]
fn test_series_mode_seeds_direction_from_first_pair() {
    let rising = [50.0, 51.0, 52.0, 53.0, 54.0];
    let points = track_series(&rising, &TrackerConfig::default());
    assert_eq!(points[0].trend, 1);
    assert_eq!(points[0].stop, 45.0);
    assert!(points.iter().all(|p| p.trend == 1));

    let falling = [50.0, 49.0, 48.0, 47.0];
    let points = track_series(&falling, &TrackerConfig::default());
    assert_eq!(points[0].trend, -1);
    assert_eq!(points[0].stop, 55.0);
}

#[test]
fn test_series_mode_flips_on_reversal() {
    // Fall, then a sharp recovery through the trailing stop.
    let values = [60.0, 55.0, 50.0, 45.0, 40.0, 35.0, 30.0, 55.0];
    let points = track_series(&values, &TrackerConfig::default());
    assert_eq!(points[points.len() - 2].trend, -1);
    assert_eq!(points.last().unwrap().trend, 1);
}

#[test]
fn test_series_mode_too_short() {
    assert!(track_series(&[50.0], &TrackerConfig::default()).is_empty());
    assert!(track_series(&[], &TrackerConfig::default()).is_empty());
}

#[test]
fn test_analyze_requires_min_bars() {
    let bars = uptrend(9);
    assert!(analyze_price(&bars, &TrackerConfig::default()).is_none());
}

#[test]
fn test_analyze_steady_uptrend() {
    let bars = uptrend(60);
    let summary = analyze_price(&bars, &TrackerConfig::default()).unwrap();
    assert_eq!(summary.trend, TrendDirection::Bullish);
    assert_eq!(summary.days_in_trend, 60);
    assert!(summary.cross_direction.is_none());
    assert!(!summary.is_broken);
    assert!(summary.gap_percent > 0.0);
}

#[test]
fn test_analyze_detects_breakdown() {
    let mut bars = uptrend(40);
    for i in 0..3 {
        bars.push(bar(60.0 - i as f64, 40 + i));
    }
    let summary = analyze_price(&bars, &TrackerConfig::default()).unwrap();
    assert_eq!(summary.trend, TrendDirection::Bearish);
    assert!(summary.days_in_trend <= 5);
    assert_eq!(summary.cross_direction, Some(CrossDirection::Down));
    assert!(summary.is_broken);
    assert!(summary.gap_percent < 0.0);
}

#[test]
fn test_gap_slope_settles_in_long_trend() {
    let bars = uptrend(60);
    let summary = analyze_price(&bars, &TrackerConfig::default()).unwrap();
    // Long steady trend: the three-bar slope settles near zero.
    assert!(summary.gap_slope.abs() < 5.0);
}
