//! Unit tests for the Trend Score

use chrono::{Duration, TimeZone, Utc};
use zonetrix::config::EngineConfig;
use zonetrix::indicators::trend::adx::direction_strength;
use zonetrix::models::Bar;
use zonetrix::scoring::trend::{ma_alignment_score, rsi_zone_score, trend_score};

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
    (0..count).map(|i| bar(100.0 + i as f64 * 0.5, i)).collect()
}

fn downtrend(count: usize) -> Vec<Bar> {
    (0..count).map(|i| bar(150.0 - i as f64 * 0.5, i)).collect()
}

#[test]
fn test_insufficient_data_is_neutral_50() {
    let bars = uptrend(59);
    let cfg = EngineConfig::default();
    let score = trend_score(&bars, None, &cfg);
    assert!(score.insufficient);
    assert_eq!(score.score, 50);
    assert!(score.is_tradeable);
    assert!(!score.is_strong);
}

#[test]
fn test_strong_uptrend_scores_strong() {
    let bars = uptrend(80);
    let cfg = EngineConfig::default();
    let direction = direction_strength(&bars, &cfg.adx);
    let score = trend_score(&bars, direction.as_ref(), &cfg);
    assert!(!score.insufficient);
    assert!(score.score >= cfg.trend_score.strong, "score {}", score.score);
    assert!(score.is_strong);
    // Perfect bullish stack.
    assert_eq!(score.ma_alignment.score, 30);
    // Full direction credit: trending and bullish.
    assert_eq!(score.direction.score, 25);
}

#[test]
fn test_downtrend_scores_weak() {
    let bars = downtrend(80);
    let cfg = EngineConfig::default();
    let direction = direction_strength(&bars, &cfg.adx);
    let score = trend_score(&bars, direction.as_ref(), &cfg);
    assert!(score.score < cfg.trend_score.minimum, "score {}", score.score);
    assert_eq!(score.ma_alignment.score, 0);
    // Bearish direction earns nothing regardless of ADX.
    assert_eq!(score.direction.score, 0);
}

#[test]
fn test_score_within_bounds() {
    for bars in [uptrend(80), downtrend(80)] {
        let cfg = EngineConfig::default();
        let direction = direction_strength(&bars, &cfg.adx);
        let score = trend_score(&bars, direction.as_ref(), &cfg);
        assert!((0..=100).contains(&score.score));
    }
}

#[test]
fn test_ma_alignment_partial_stack() {
    // Long decline then a short pop: price above the fast EMA but the slow
    // averages still inverted.
    let mut bars = downtrend(70);
    let last = bars.last().unwrap().close;
    for i in 0..3 {
        bars.push(bar(last + 1.0 + i as f64 * 1.5, 70 + i));
    }
    let cfg = EngineConfig::default();
    let component = ma_alignment_score(&bars, &cfg, 30);
    assert!(component.score > 0);
    assert!(component.score < 30);
}

#[test]
fn test_rsi_zone_bands() {
    let cfg = EngineConfig::default();
    // A flat series pins RSI at the midpoint: bullish-zone credit starts at 50.
    let flat: Vec<Bar> = (0..70).map(|i| bar(100.0, i)).collect();
    let component = rsi_zone_score(&flat, &cfg, 20);
    assert_eq!(component.score, 20);

    // A relentless rise pins RSI at the top: extreme overbought credit only.
    let runaway = uptrend(70);
    let component = rsi_zone_score(&runaway, &cfg, 20);
    assert_eq!(component.score, 4);
}
