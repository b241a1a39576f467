//! Typed result records for each indicator.
//!
//! Every calculator returns one of these instead of an open-ended map, so the
//! aggregation layer gets compile-time checked field access.

use serde::{Deserialize, Serialize};

/// Direction of a tracker or price trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Bullish,
    Bearish,
}

impl TrendDirection {
    pub fn is_bullish(self) -> bool {
        self == TrendDirection::Bullish
    }
}

/// Which way price crossed the tracker stop, when the cross is recent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossDirection {
    Up,
    Down,
}

/// One bar of stop-and-reverse output: the trailing stop plus trend (+1/-1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerPoint {
    pub stop: f64,
    pub trend: i8,
}

/// Price-mode tracker summary (the risk filter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTracker {
    pub stop: f64,
    pub price: f64,
    /// Signed distance of price from the stop, in percent.
    pub gap_percent: f64,
    pub trend: TrendDirection,
    /// Consecutive bars on the current side of the stop.
    pub days_in_trend: usize,
    /// Change in gap% over the last min(3, days_in_trend - 1) bars.
    pub gap_slope: f64,
    pub cross_direction: Option<CrossDirection>,
    /// Price broke DOWN through the stop within the last few bars.
    pub is_broken: bool,
}

/// Divergence flavor shared by RSI/price and flow/price checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivergenceKind {
    Bullish,
    Bearish,
}

/// Oscillator holding up (or rolling over) while price does the opposite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiDivergence {
    pub kind: DivergenceKind,
    pub description: String,
}

/// Oscillator-mode tracker summary (the primary signal).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OscillatorTracker {
    pub rsi: f64,
    pub stop: f64,
    pub trend: TrendDirection,
    pub days_since_flip: usize,
    pub divergence: Option<RsiDivergence>,
}

impl OscillatorTracker {
    /// Degraded stand-in when the series is too short for the oscillator.
    pub fn insufficient() -> Self {
        Self {
            rsi: 50.0,
            stop: 50.0,
            trend: TrendDirection::Bearish,
            days_since_flip: 0,
            divergence: None,
        }
    }
}

/// Volume-flow trend classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowTrend {
    /// Flow above its moving average and net-rising.
    Accumulation,
    /// Flow below its moving average and net-falling.
    Distribution,
    /// Anything else.
    Mixed,
}

impl FlowTrend {
    /// Tri-state bullishness: only a confirmed trend counts either way.
    pub fn is_bullish(self) -> Option<bool> {
        match self {
            FlowTrend::Accumulation => Some(true),
            FlowTrend::Distribution => Some(false),
            FlowTrend::Mixed => None,
        }
    }
}

/// Price and flow moving in opposite directions over the lookback window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowDivergence {
    pub kind: DivergenceKind,
    /// 1-5, scaled from the size of the flow move.
    pub strength: u8,
    pub price_change_pct: f64,
    pub flow_change_pct: f64,
    pub description: String,
}

/// Volume-flow tracker output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeFlow {
    pub flow: f64,
    pub flow_ma: f64,
    pub trend: FlowTrend,
    /// Flow change over the lookback window, percent of its starting level.
    pub change_pct: f64,
    pub divergence: Option<FlowDivergence>,
}

impl VolumeFlow {
    pub fn insufficient() -> Self {
        Self {
            flow: 0.0,
            flow_ma: 0.0,
            trend: FlowTrend::Mixed,
            change_pct: 0.0,
            divergence: None,
        }
    }
}

/// Five-band classification of the volatility meter reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityBand {
    ExtremeOverbought,
    Overbought,
    Neutral,
    Oversold,
    ExtremeOversold,
}

/// Volatility meter output: smoothed true range plus the percent reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolatilityReading {
    pub atr: f64,
    /// Distance of price from the short EMA, percent of price.
    pub percent: f64,
    pub band: VolatilityBand,
    pub insufficient: bool,
}

impl VolatilityReading {
    pub fn insufficient() -> Self {
        Self {
            atr: 0.0,
            percent: 0.0,
            band: VolatilityBand::Neutral,
            insufficient: true,
        }
    }
}

/// DMI-derived market state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionState {
    Bullish,
    Bearish,
    Choppy,
}

/// Direction-strength meter output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionStrength {
    pub adx: f64,
    pub plus_di: f64,
    pub minus_di: f64,
    pub state: DirectionState,
}

impl DirectionStrength {
    pub fn insufficient() -> Self {
        Self {
            adx: 0.0,
            plus_di: 0.0,
            minus_di: 0.0,
            state: DirectionState::Choppy,
        }
    }
}

/// Convergence oscillator output (last bar plus the prior histogram value).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdReading {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub prev_histogram: f64,
}

/// Banded-volatility oscillator output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerReading {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    /// 0 at the lower band, 1 at the upper band.
    pub position: f64,
}
