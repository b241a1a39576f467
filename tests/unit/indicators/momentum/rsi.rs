//! Unit tests for the relative-strength oscillator

use zonetrix::indicators::momentum::rsi::{rsi, rsi_series};

fn rising(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}

fn falling(count: usize) -> Vec<f64> {
    (0..count).map(|i| 200.0 - i as f64).collect()
}

#[test]
fn test_insufficient_data() {
    assert!(rsi_series(&rising(14), 14).is_none());
    assert!(rsi(&[], 14).is_none());
}

#[test]
fn test_series_length() {
    let series = rsi_series(&rising(30), 14).unwrap();
    assert_eq!(series.len(), 30 - 14);
}

#[test]
fn test_all_gains_reads_100() {
    let value = rsi(&rising(30), 14).unwrap();
    assert!((value - 100.0).abs() < 1e-9);
}

#[test]
fn test_all_losses_reads_0() {
    let value = rsi(&falling(30), 14).unwrap();
    assert!(value.abs() < 1e-9);
}

#[test]
fn test_flat_series_reads_midpoint() {
    let closes = [100.0; 30];
    let value = rsi(&closes, 14).unwrap();
    assert!((value - 50.0).abs() < 1e-9);
}

#[test]
fn test_mixed_series_stays_in_range() {
    let closes: Vec<f64> = (0..60)
        .map(|i| 100.0 + ((i % 7) as f64 - 3.0) * 1.5)
        .collect();
    for value in rsi_series(&closes, 14).unwrap() {
        assert!((0.0..=100.0).contains(&value));
    }
}

#[test]
fn test_uptrend_reads_above_downtrend() {
    let up = rsi(&rising(40), 14).unwrap();
    let down = rsi(&falling(40), 14).unwrap();
    assert!(up > 50.0);
    assert!(down < 50.0);
}
