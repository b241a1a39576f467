//! Unit tests for the zone classifier

use zonetrix::config::{EngineConfig, MomentumStrategy};
use zonetrix::models::Zone;
use zonetrix::signals::zone::{classify, classify_classic, ZoneInputs};

fn cfg() -> EngineConfig {
    EngineConfig::default()
}

#[test]
fn test_confirmed_uptrend_with_flow_and_momentum_is_strong_buy() {
    let result = classify(
        &ZoneInputs {
            oscillator_bullish: true,
            price_bullish: true,
            gap_percent: 2.0,
            flow_bullish: Some(true),
            momentum: 7,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.zone, Zone::StrongBuy);
    assert!(result.entry_allowed);
    // 85 base plus the ideal-timing bump.
    assert_eq!(result.confidence, 90);
}

#[test]
fn test_confirmed_uptrend_without_flow_is_buy() {
    let result = classify(
        &ZoneInputs {
            oscillator_bullish: true,
            price_bullish: true,
            gap_percent: 2.0,
            flow_bullish: None,
            momentum: 6,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.zone, Zone::Buy);
    assert!(result.entry_allowed);
}

#[test]
fn test_distribution_during_uptrend_is_warning() {
    let result = classify(
        &ZoneInputs {
            oscillator_bullish: true,
            price_bullish: true,
            gap_percent: 2.0,
            flow_bullish: Some(false),
            momentum: 6,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.zone, Zone::Warning);
    assert!(!result.warnings.is_empty());
}

#[test]
fn test_gap_over_max_downgrades_to_hold_and_blocks() {
    let result = classify(
        &ZoneInputs {
            oscillator_bullish: true,
            price_bullish: true,
            gap_percent: 7.5,
            flow_bullish: Some(true),
            momentum: 7,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.zone, Zone::Hold);
    assert!(!result.entry_allowed);
}

#[test]
fn test_oscillator_leads_price_is_early_buy() {
    let result = classify(
        &ZoneInputs {
            oscillator_bullish: true,
            price_bullish: false,
            gap_percent: -2.0,
            momentum: 5,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.zone, Zone::EarlyBuy);
    assert!(result.entry_allowed);
    assert!((70..=85).contains(&result.confidence));
}

#[test]
fn test_recent_breakdown_blocks_early_buy() {
    let result = classify(
        &ZoneInputs {
            oscillator_bullish: true,
            price_bullish: false,
            gap_percent: -2.0,
            momentum: 5,
            is_broken: true,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.zone, Zone::Warning);
    assert!(!result.entry_allowed);
    assert!(result.confidence < 50);
}

#[test]
fn test_fading_momentum_is_warning_or_weak() {
    let warning = classify(
        &ZoneInputs {
            oscillator_bullish: false,
            price_bullish: true,
            gap_percent: 2.0,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(warning.zone, Zone::Warning);

    let weak = classify(
        &ZoneInputs {
            oscillator_bullish: false,
            price_bullish: true,
            gap_percent: 2.0,
            flow_bullish: Some(false),
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(weak.zone, Zone::Weak);
    assert!(weak.confidence < warning.confidence);
}

#[test]
fn test_downtrend_with_accumulation_is_oversold_watch() {
    let result = classify(
        &ZoneInputs {
            oscillator_bullish: false,
            price_bullish: false,
            gap_percent: -4.0,
            flow_bullish: Some(true),
            momentum: 4,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.zone, Zone::OversoldWatch);
}

#[test]
fn test_oversold_rsi_in_downtrend_is_oversold_watch() {
    let result = classify(
        &ZoneInputs {
            oscillator_bullish: false,
            price_bullish: false,
            gap_percent: -4.0,
            rsi: 25.0,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.zone, Zone::OversoldWatch);
}

#[test]
fn test_confirmed_downtrend_is_sell() {
    let result = classify(
        &ZoneInputs {
            oscillator_bullish: false,
            price_bullish: false,
            gap_percent: -4.0,
            flow_bullish: Some(false),
            rsi: 45.0,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.zone, Zone::Sell);
}

#[test]
fn test_exhausted_momentum_downgrades_buy_to_hold() {
    let result = classify(
        &ZoneInputs {
            oscillator_bullish: true,
            price_bullish: true,
            gap_percent: 2.0,
            flow_bullish: Some(true),
            momentum: 9,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.zone, Zone::Hold);
    assert!(!result.entry_allowed);
    assert!(result.warnings.iter().any(|w| w.contains("exhausted")));
}

#[test]
fn test_extreme_extension_downgrades_buy_to_hold() {
    let result = classify(
        &ZoneInputs {
            oscillator_bullish: true,
            price_bullish: true,
            gap_percent: 2.0,
            flow_bullish: Some(true),
            momentum: 7,
            volatility_percent: 6.0,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.zone, Zone::Hold);
}

#[test]
fn test_weak_trend_score_cuts_confidence() {
    let strong = classify(
        &ZoneInputs {
            oscillator_bullish: true,
            price_bullish: true,
            gap_percent: 2.0,
            flow_bullish: None,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    let weak = classify(
        &ZoneInputs {
            oscillator_bullish: true,
            price_bullish: true,
            gap_percent: 2.0,
            flow_bullish: None,
            trend_score: 30,
            ..ZoneInputs::default()
        },
        &cfg(),
    );
    assert!(weak.confidence < strong.confidence);
    assert!(weak.warnings.iter().any(|w| w.contains("trend score")));
}

#[test]
fn test_confidence_always_clamped() {
    let inputs = [
        ZoneInputs {
            oscillator_bullish: true,
            price_bullish: false,
            flow_bullish: Some(true),
            momentum: 3,
            trend_score: 90,
            ..ZoneInputs::default()
        },
        ZoneInputs {
            oscillator_bullish: true,
            price_bullish: false,
            is_broken: true,
            trend_score: 10,
            timing_score: 90,
            ..ZoneInputs::default()
        },
    ];
    for input in &inputs {
        let result = classify(input, &cfg());
        assert!((10..=95).contains(&result.confidence));
    }
}

#[test]
fn test_classic_band_classification() {
    assert_eq!(classify_classic(6.0, 8), Zone::StrongBuy);
    assert_eq!(classify_classic(6.0, 5), Zone::Buy);
    assert_eq!(classify_classic(1.0, 5), Zone::Buy);
    assert_eq!(classify_classic(-1.0, 5), Zone::Neutral);
    assert_eq!(classify_classic(-4.0, 5), Zone::Weak);
    assert_eq!(classify_classic(-8.0, 5), Zone::Sell);
}

#[test]
fn test_classic_strategy_still_honors_hard_blocks() {
    let mut config = cfg();
    config.strategy = MomentumStrategy::Classic;
    let result = classify(
        &ZoneInputs {
            oscillator_bullish: true,
            price_bullish: true,
            gap_percent: 6.0,
            momentum: 8,
            ..ZoneInputs::default()
        },
        &config,
    );
    assert_eq!(result.zone, Zone::StrongBuy);
    assert!(!result.entry_allowed);
}
