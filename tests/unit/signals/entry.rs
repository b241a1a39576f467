//! Unit tests for the entry quality grader

use zonetrix::config::EngineConfig;
use zonetrix::models::EntryGrade;
use zonetrix::signals::entry::{grade, EntryInputs};

fn cfg() -> EngineConfig {
    EngineConfig::default()
}

#[test]
fn test_gap_over_max_is_hard_blocked() {
    let result = grade(
        &EntryInputs {
            trend_score: 100,
            timing_score: 55,
            gap_percent: 12.0,
            oscillator_bullish: true,
            flow_bullish: Some(true),
            momentum: 6,
            price_bullish: true,
            ..EntryInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.grade, EntryGrade::X);
    assert_eq!(result.score, 0);
    assert!(result.blocked_reason.is_some());
}

#[test]
fn test_exhausted_momentum_is_hard_blocked() {
    let result = grade(
        &EntryInputs {
            trend_score: 85,
            timing_score: 50,
            gap_percent: 4.0,
            oscillator_bullish: true,
            flow_bullish: Some(true),
            momentum: 10,
            price_bullish: true,
            ..EntryInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.grade, EntryGrade::X);
    assert!(result
        .blocked_reason
        .as_deref()
        .unwrap()
        .contains("exhausted"));
}

#[test]
fn test_perfect_setup_grades_a() {
    let result = grade(
        &EntryInputs {
            trend_score: 80,
            timing_score: 55,
            gap_percent: 2.0,
            oscillator_bullish: true,
            flow_bullish: Some(true),
            momentum: 6,
            price_bullish: true,
            volatility_percent: 0.0,
        },
        &cfg(),
    );
    assert_eq!(result.grade, EntryGrade::A);
    // 25 trend + 25 timing + 15 gap + 20 confirmation + 10 momentum.
    assert_eq!(result.score, 95);
    assert!(result.is_actionable());
}

#[test]
fn test_decent_setup_grades_b() {
    let result = grade(
        &EntryInputs {
            trend_score: 65,
            timing_score: 60,
            gap_percent: 3.5,
            oscillator_bullish: true,
            flow_bullish: Some(true),
            momentum: 7,
            price_bullish: true,
            ..EntryInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.grade, EntryGrade::B);
    assert_eq!(result.score, 75);
}

#[test]
fn test_poor_setup_grades_d() {
    let result = grade(
        &EntryInputs {
            trend_score: 30,
            timing_score: 20,
            gap_percent: 4.5,
            oscillator_bullish: false,
            flow_bullish: None,
            momentum: 2,
            price_bullish: false,
            ..EntryInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.grade, EntryGrade::D);
    assert!(!result.is_actionable());
}

#[test]
fn test_extension_penalty_can_drop_a_band() {
    let base = EntryInputs {
        trend_score: 55,
        timing_score: 55,
        gap_percent: 2.5,
        oscillator_bullish: true,
        flow_bullish: None,
        momentum: 4,
        price_bullish: false,
        volatility_percent: 0.0,
    };
    let clean = grade(&base, &cfg());
    // 15 trend + 25 timing + 15 gap + 7 confirmation + 7 momentum.
    assert_eq!(clean.score, 69);
    assert_eq!(clean.grade, EntryGrade::B);

    let extended = grade(
        &EntryInputs {
            volatility_percent: 5.5,
            ..base
        },
        &cfg(),
    );
    assert_eq!(extended.score, 54);
    assert_eq!(extended.grade, EntryGrade::C);
}

#[test]
fn test_oversold_penalty_is_smaller() {
    let base = EntryInputs {
        trend_score: 55,
        timing_score: 55,
        gap_percent: 2.5,
        oscillator_bullish: true,
        flow_bullish: None,
        momentum: 4,
        price_bullish: false,
        volatility_percent: -5.5,
    };
    let result = grade(&base, &cfg());
    assert_eq!(result.score, 64);
}

#[test]
fn test_confirmation_caps_at_20() {
    let result = grade(
        &EntryInputs {
            trend_score: 80,
            timing_score: 55,
            gap_percent: 1.0,
            oscillator_bullish: true,
            flow_bullish: Some(true),
            momentum: 6,
            price_bullish: true,
            ..EntryInputs::default()
        },
        &cfg(),
    );
    assert_eq!(result.factors.confirmation, 20);
}

#[test]
fn test_score_never_exceeds_bounds() {
    let result = grade(
        &EntryInputs {
            trend_score: 100,
            timing_score: 55,
            gap_percent: 0.5,
            oscillator_bullish: true,
            flow_bullish: Some(true),
            momentum: 6,
            price_bullish: true,
            ..EntryInputs::default()
        },
        &cfg(),
    );
    assert!((0..=100).contains(&result.score));
    assert_eq!(result.grade, EntryGrade::A);
}
