//! The aggregator: one bar series in, one (snapshot, signal) pair out.
//!
//! Purely functional - identical bars and configuration always produce a
//! bit-identical result, and nothing is shared between invocations, so an
//! external orchestration layer can fan this out per instrument freely.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::indicators::structure::{osc_tracker, tracker};
use crate::indicators::trend::adx::direction_strength;
use crate::indicators::volatility::atr::volatility;
use crate::indicators::volume::obv;
use crate::models::bar::Bar;
use crate::models::indicators::{DirectionStrength, OscillatorTracker};
use crate::models::signal::CompleteSignal;
use crate::models::snapshot::IndicatorSnapshot;
use crate::scoring::momentum;
use crate::scoring::timing::timing_score;
use crate::scoring::trend::trend_score;
use crate::signals::entry::{self, EntryInputs};
use crate::signals::warnings::{self, WarningInputs};
use crate::signals::zone::{self, ZoneInputs};

/// Absolute minimum series length; below this no snapshot is produced.
pub const MIN_BARS: usize = 10;

/// Optional inputs computed by an upstream collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// Volume-flow bullishness precedent, when already known upstream.
    pub flow_bullish: Option<bool>,
    /// Recently-broken flag, when already known upstream.
    pub recently_broken: Option<bool>,
}

/// The full evaluation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub snapshot: IndicatorSnapshot,
    pub signal: CompleteSignal,
}

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate a bar series under the given configuration.
    pub fn evaluate(bars: &[Bar], cfg: &EngineConfig) -> Option<Analysis> {
        Self::evaluate_with_overrides(bars, cfg, &Overrides::default())
    }

    /// Evaluate with upstream-supplied optional inputs.
    pub fn evaluate_with_overrides(
        bars: &[Bar],
        cfg: &EngineConfig,
        overrides: &Overrides,
    ) -> Option<Analysis> {
        if bars.len() < MIN_BARS {
            return None;
        }

        let tracker_points = tracker::track_price(bars, &cfg.tracker);
        let price_tracker = tracker::analyze_price(bars, &cfg.tracker)?;

        let oscillator = osc_tracker::analyze(bars, &cfg.rsi, &cfg.tracker)
            .unwrap_or_else(OscillatorTracker::insufficient);
        let volume_flow = obv::analyze(bars, &cfg.volume_flow);
        let volatility_reading = volatility(bars, &cfg.atr);
        let direction = direction_strength(bars, &cfg.adx);

        let momentum_reading = momentum::analyze(bars, Some(tracker_points.as_slice()), cfg);
        let trend = trend_score(bars, direction.as_ref(), cfg);
        let timing = timing_score(bars, price_tracker.gap_percent, cfg);

        let flow_bullish = overrides
            .flow_bullish
            .or_else(|| volume_flow.trend.is_bullish());
        let is_broken = overrides.recently_broken.unwrap_or(price_tracker.is_broken);

        let zone_result = zone::classify(
            &ZoneInputs {
                oscillator_bullish: oscillator.trend.is_bullish(),
                price_bullish: price_tracker.trend.is_bullish(),
                gap_percent: price_tracker.gap_percent,
                flow_bullish,
                momentum: momentum_reading.score,
                rsi: oscillator.rsi,
                volatility_percent: volatility_reading.percent,
                trend_score: trend.score,
                timing_score: timing.score,
                is_broken,
            },
            cfg,
        );

        let entry_result = entry::grade(
            &EntryInputs {
                trend_score: trend.score,
                timing_score: timing.score,
                gap_percent: price_tracker.gap_percent,
                oscillator_bullish: oscillator.trend.is_bullish(),
                flow_bullish,
                momentum: momentum_reading.score,
                price_bullish: price_tracker.trend.is_bullish(),
                volatility_percent: volatility_reading.percent,
            },
            cfg,
        );

        let warning_list = warnings::check_all(
            &WarningInputs {
                gap_percent: price_tracker.gap_percent,
                oscillator_bullish: oscillator.trend.is_bullish(),
                price_bullish: price_tracker.trend.is_bullish(),
                flow_bullish,
                momentum: momentum_reading.score,
                volatility_percent: volatility_reading.percent,
                rsi: oscillator.rsi,
            },
            cfg,
        );

        let entry_allowed = zone_result.entry_allowed && !warnings::has_entry_block(&warning_list);
        let summary = warnings::short_summary(&warning_list);
        let confidence = zone_result.confidence;

        debug!(
            zone = zone_result.zone.name(),
            grade = ?entry_result.grade,
            confidence,
            entry_allowed,
            gap = price_tracker.gap_percent,
            momentum = momentum_reading.score,
            warnings = warning_list.len(),
            "evaluated series"
        );

        let snapshot = IndicatorSnapshot {
            timestamp: bars[bars.len() - 1].timestamp,
            price: price_tracker.price,
            tracker: price_tracker,
            oscillator,
            volume_flow,
            volatility: volatility_reading,
            momentum: momentum_reading,
            trend_score: trend,
            timing_score: timing,
            direction: direction.unwrap_or_else(DirectionStrength::insufficient),
        };

        let signal = CompleteSignal {
            zone: zone_result,
            entry: entry_result,
            warnings: warning_list,
            entry_allowed,
            confidence,
            summary,
        };

        Some(Analysis { snapshot, signal })
    }
}
