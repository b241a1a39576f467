//! Engine configuration.
//!
//! Every tunable threshold lives here with its stated default. The caller
//! builds one `EngineConfig` (or takes `Default`) and passes it by reference
//! into each evaluation; nothing in the engine reads process-wide state.

use serde::{Deserialize, Serialize};

/// How momentum scores and zone banding are interpreted.
///
/// `Classic` treats 9-10 momentum as the strongest buy and classifies zones
/// from the price-tracker gap alone. `Revised` (default) treats 9-10 as
/// exhausted/hold-only with the ideal entry band at 5-7, and classifies zones
/// from the full oscillator-tracker decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentumStrategy {
    Classic,
    Revised,
}

impl Default for MomentumStrategy {
    fn default() -> Self {
        MomentumStrategy::Revised
    }
}

/// Stop-and-reverse tracker acceleration parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub af_step: f64,
    pub af_max: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            af_step: 0.02,
            af_max: 0.2,
        }
    }
}

/// Price distance from the tracker stop, in percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapConfig {
    /// Below this: low risk, excellent entry.
    pub excellent: f64,
    /// Below this: elevated but acceptable risk.
    pub acceptable: f64,
    /// Above this: no new entries regardless of other signals.
    pub max: f64,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            excellent: 3.0,
            acceptable: 5.0,
            max: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiConfig {
    pub period: usize,
    pub overbought: f64,
    pub oversold: f64,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            period: 14,
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

/// Volatility meter thresholds (% distance of price from its short EMA).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtrConfig {
    pub period: usize,
    pub ema_period: usize,
    pub overbought: f64,
    pub oversold: f64,
    pub extreme_overbought: f64,
    pub extreme_oversold: f64,
}

impl Default for AtrConfig {
    fn default() -> Self {
        Self {
            period: 14,
            ema_period: 8,
            overbought: 3.0,
            oversold: -3.0,
            extreme_overbought: 5.0,
            extreme_oversold: -5.0,
        }
    }
}

/// Volume-flow trend and divergence parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeFlowConfig {
    pub ma_period: usize,
    pub lookback: usize,
    pub divergence_lookback: usize,
    /// Minimum price move (%) for a divergence to register.
    pub divergence_price_pct: f64,
    /// Minimum opposing flow move (%) for a divergence to register.
    pub divergence_flow_pct: f64,
}

impl Default for VolumeFlowConfig {
    fn default() -> Self {
        Self {
            ma_period: 20,
            lookback: 5,
            divergence_lookback: 20,
            divergence_price_pct: 3.0,
            divergence_flow_pct: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WilliamsConfig {
    pub period: usize,
    pub overbought: f64,
    pub oversold: f64,
}

impl Default for WilliamsConfig {
    fn default() -> Self {
        Self {
            period: 14,
            overbought: -20.0,
            oversold: -80.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerConfig {
    pub period: usize,
    pub std_dev: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdConfig {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingAverageConfig {
    pub ema_fast: usize,
    pub ema_medium: usize,
    pub sma_slow: usize,
}

impl Default for MovingAverageConfig {
    fn default() -> Self {
        Self {
            ema_fast: 8,
            ema_medium: 21,
            sma_slow: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdxConfig {
    pub period: usize,
    pub strong_trend: f64,
    pub weak_trend: f64,
    /// |+DI - -DI| below this reads as a choppy (tangled) market.
    pub dmi_tangle: f64,
}

impl Default for AdxConfig {
    fn default() -> Self {
        Self {
            period: 14,
            strong_trend: 25.0,
            weak_trend: 20.0,
            dmi_tangle: 5.0,
        }
    }
}

/// Momentum score interpretation thresholds (1-10 scale).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumConfig {
    /// 9-10: no new entries, hold only.
    pub exhausted_min: i32,
    /// 7-8: strong, late for entries.
    pub strong_min: i32,
    /// 5-7: best entry zone.
    pub ideal_min: i32,
    pub ideal_max: i32,
    /// 1-3: weak, avoid or watch for a bounce.
    pub weak_max: i32,
    pub lookback: usize,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            exhausted_min: 9,
            strong_min: 7,
            ideal_min: 5,
            ideal_max: 7,
            weak_max: 3,
            lookback: 10,
        }
    }
}

/// Trend Score component weights; must sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendWeights {
    pub ma_alignment: i32,
    pub adx: i32,
    pub macd: i32,
    pub rsi_zone: i32,
}

impl Default for TrendWeights {
    fn default() -> Self {
        Self {
            ma_alignment: 30,
            adx: 25,
            macd: 25,
            rsi_zone: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendScoreConfig {
    pub strong: i32,
    pub minimum: i32,
    pub weights: TrendWeights,
}

impl Default for TrendScoreConfig {
    fn default() -> Self {
        Self {
            strong: 70,
            minimum: 50,
            weights: TrendWeights::default(),
        }
    }
}

/// Timing Score component weights; must sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingWeights {
    pub williams: i32,
    pub bollinger: i32,
    pub rsi_position: i32,
    pub gap: i32,
}

impl Default for TimingWeights {
    fn default() -> Self {
        Self {
            williams: 25,
            bollinger: 25,
            rsi_position: 25,
            gap: 25,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingScoreConfig {
    pub overbought: i32,
    pub oversold: i32,
    pub ideal_min: i32,
    pub ideal_max: i32,
    pub weights: TimingWeights,
}

impl Default for TimingScoreConfig {
    fn default() -> Self {
        Self {
            overbought: 80,
            oversold: 30,
            ideal_min: 40,
            ideal_max: 70,
            weights: TimingWeights::default(),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub tracker: TrackerConfig,
    pub gap: GapConfig,
    pub rsi: RsiConfig,
    pub atr: AtrConfig,
    pub volume_flow: VolumeFlowConfig,
    pub williams: WilliamsConfig,
    pub bollinger: BollingerConfig,
    pub macd: MacdConfig,
    pub moving_averages: MovingAverageConfig,
    pub adx: AdxConfig,
    pub momentum: MomentumConfig,
    pub trend_score: TrendScoreConfig,
    pub timing_score: TimingScoreConfig,
    pub strategy: MomentumStrategy,
}

impl EngineConfig {
    /// Verify the composite score weights still sum to 100.
    pub fn verify_weights(&self) -> bool {
        let trend = &self.trend_score.weights;
        let timing = &self.timing_score.weights;
        trend.ma_alignment + trend.adx + trend.macd + trend.rsi_zone == 100
            && timing.williams + timing.bollinger + timing.rsi_position + timing.gap == 100
    }
}

/// Deployment environment, read from `ENVIRONMENT` (after loading `.env`).
pub fn get_environment() -> String {
    dotenvy::dotenv().ok();
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
