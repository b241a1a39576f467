//! Unit tests for the range oscillator

use chrono::{Duration, TimeZone, Utc};
use zonetrix::indicators::momentum::williams::williams_r;
use zonetrix::models::Bar;

fn bar(high: f64, low: f64, close: f64, i: usize) -> Bar {
    let start = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
    Bar::new(
        close,
        high,
        low,
        close,
        1_000_000.0,
        start + Duration::days(i as i64),
    )
}

#[test]
fn test_insufficient_data() {
    let bars: Vec<Bar> = (0..10).map(|i| bar(110.0, 90.0, 100.0, i)).collect();
    assert!(williams_r(&bars, 14).is_none());
}

#[test]
fn test_close_at_high_reads_zero() {
    let mut bars: Vec<Bar> = (0..14).map(|i| bar(110.0, 90.0, 100.0, i)).collect();
    bars.push(bar(110.0, 90.0, 110.0, 14));
    let value = williams_r(&bars, 14).unwrap();
    assert!(value.abs() < 1e-9);
}

#[test]
fn test_close_at_low_reads_minus_100() {
    let mut bars: Vec<Bar> = (0..14).map(|i| bar(110.0, 90.0, 100.0, i)).collect();
    bars.push(bar(110.0, 90.0, 90.0, 14));
    let value = williams_r(&bars, 14).unwrap();
    assert!((value + 100.0).abs() < 1e-9);
}

#[test]
fn test_close_mid_range_reads_minus_50() {
    let bars: Vec<Bar> = (0..20).map(|i| bar(110.0, 90.0, 100.0, i)).collect();
    let value = williams_r(&bars, 14).unwrap();
    assert!((value + 50.0).abs() < 1e-9);
}

#[test]
fn test_zero_range_falls_back_to_midpoint() {
    let bars: Vec<Bar> = (0..20).map(|i| bar(100.0, 100.0, 100.0, i)).collect();
    let value = williams_r(&bars, 14).unwrap();
    assert!((value + 50.0).abs() < 1e-9);
}
