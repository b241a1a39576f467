//! The immutable per-evaluation result bundle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::indicators::{
    DirectionStrength, OscillatorTracker, PriceTracker, VolatilityReading, VolumeFlow,
};
use crate::scoring::momentum::MomentumReading;
use crate::scoring::timing::TimingScore;
use crate::scoring::trend::TrendScore;

/// Everything the indicator library computed for one bar series.
///
/// Produced atomically by the aggregator; fields are never filled in
/// piecemeal, so a snapshot is either absent or complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    /// Timestamp of the last bar in the series.
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub tracker: PriceTracker,
    pub oscillator: OscillatorTracker,
    pub volume_flow: VolumeFlow,
    pub volatility: VolatilityReading,
    pub momentum: MomentumReading,
    pub trend_score: TrendScore,
    pub timing_score: TimingScore,
    pub direction: DirectionStrength,
}

impl IndicatorSnapshot {
    pub fn gap_percent(&self) -> f64 {
        self.tracker.gap_percent
    }

    pub fn oscillator_bullish(&self) -> bool {
        self.oscillator.trend.is_bullish()
    }

    pub fn price_bullish(&self) -> bool {
        self.tracker.trend.is_bullish()
    }

    pub fn flow_bullish(&self) -> Option<bool> {
        self.volume_flow.trend.is_bullish()
    }
}
