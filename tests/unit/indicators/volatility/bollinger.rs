//! Unit tests for the banded-volatility oscillator

use chrono::{Duration, TimeZone, Utc};
use zonetrix::config::BollingerConfig;
use zonetrix::indicators::volatility::bollinger::bands;
use zonetrix::models::Bar;

fn bar(close: f64, i: usize) -> Bar {
    let start = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
    Bar::new(
        close,
        close + 0.2,
        close - 0.2,
        close,
        1_000_000.0,
        start + Duration::days(i as i64),
    )
}

#[test]
fn test_insufficient_data() {
    let bars: Vec<Bar> = (0..19).map(|i| bar(100.0, i)).collect();
    assert!(bands(&bars, &BollingerConfig::default()).is_none());
}

#[test]
fn test_constant_series_collapses_to_midpoint() {
    let bars: Vec<Bar> = (0..30).map(|i| bar(100.0, i)).collect();
    let reading = bands(&bars, &BollingerConfig::default()).unwrap();
    assert_eq!(reading.upper, reading.lower);
    assert_eq!(reading.position, 0.5);
    assert_eq!(reading.middle, 100.0);
}

#[test]
fn test_band_ordering() {
    let bars: Vec<Bar> = (0..40)
        .map(|i| bar(100.0 + ((i % 5) as f64 - 2.0), i))
        .collect();
    let reading = bands(&bars, &BollingerConfig::default()).unwrap();
    assert!(reading.upper > reading.middle);
    assert!(reading.middle > reading.lower);
}

#[test]
fn test_rising_close_sits_high_in_band() {
    let bars: Vec<Bar> = (0..40).map(|i| bar(100.0 + i as f64, i)).collect();
    let reading = bands(&bars, &BollingerConfig::default()).unwrap();
    assert!(reading.position > 0.5);
}

#[test]
fn test_falling_close_sits_low_in_band() {
    let bars: Vec<Bar> = (0..40).map(|i| bar(150.0 - i as f64, i)).collect();
    let reading = bands(&bars, &BollingerConfig::default()).unwrap();
    assert!(reading.position < 0.5);
}
