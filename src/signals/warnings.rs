//! Stateless warning rules.
//!
//! Every check is independent and several can fire on the same snapshot. Any
//! block-severity warning forces entry_allowed=false downstream regardless of
//! the zone.

use crate::config::EngineConfig;
use crate::models::signal::{Severity, Warning, WarningKind};

/// Scalar inputs for one pass over the rule set.
#[derive(Debug, Clone)]
pub struct WarningInputs {
    pub gap_percent: f64,
    pub oscillator_bullish: bool,
    pub price_bullish: bool,
    pub flow_bullish: Option<bool>,
    pub momentum: i32,
    pub volatility_percent: f64,
    pub rsi: f64,
}

impl Default for WarningInputs {
    fn default() -> Self {
        Self {
            gap_percent: 0.0,
            oscillator_bullish: false,
            price_bullish: false,
            flow_bullish: None,
            momentum: 5,
            volatility_percent: 0.0,
            rsi: 50.0,
        }
    }
}

/// Run every rule and collect the warnings that fired.
pub fn check_all(inputs: &WarningInputs, cfg: &EngineConfig) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let abs_gap = inputs.gap_percent.abs();

    // Gap: hard block past the max, heads-up within a point of it.
    if abs_gap > cfg.gap.max {
        warnings.push(Warning {
            kind: WarningKind::GapBlocked,
            message: format!("Gap exceeds {}% - no new entries", cfg.gap.max),
            detail: Some(format!("Gap: {:+.1}%", inputs.gap_percent)),
            value: Some(inputs.gap_percent),
        });
    } else if abs_gap > cfg.gap.acceptable - 1.0 {
        warnings.push(Warning {
            kind: WarningKind::GapWarning,
            message: "Gap approaching limit".to_string(),
            detail: Some(format!(
                "Gap: {:+.1}% (limit: {}%)",
                inputs.gap_percent, cfg.gap.max
            )),
            value: Some(inputs.gap_percent),
        });
    }

    if inputs.momentum >= cfg.momentum.exhausted_min {
        warnings.push(Warning {
            kind: WarningKind::MomentumExhausted,
            message: "Momentum exhausted - hold only".to_string(),
            detail: Some(format!("Momentum: {}/10", inputs.momentum)),
            value: Some(inputs.momentum as f64),
        });
    }

    // Volatility-meter extension.
    if inputs.volatility_percent >= cfg.atr.extreme_overbought {
        warnings.push(Warning {
            kind: WarningKind::ExtremeOverbought,
            message: "Extremely overbought".to_string(),
            detail: Some(format!("Extension: {:+.1}%", inputs.volatility_percent)),
            value: Some(inputs.volatility_percent),
        });
    } else if inputs.volatility_percent >= cfg.atr.overbought {
        warnings.push(Warning {
            kind: WarningKind::Overbought,
            message: "Overbought".to_string(),
            detail: Some(format!("Extension: {:+.1}%", inputs.volatility_percent)),
            value: Some(inputs.volatility_percent),
        });
    }

    if inputs.volatility_percent <= cfg.atr.extreme_oversold {
        warnings.push(Warning {
            kind: WarningKind::ExtremeOversold,
            message: "Extremely oversold - capitulation".to_string(),
            detail: Some(format!("Extension: {:.1}%", inputs.volatility_percent)),
            value: Some(inputs.volatility_percent),
        });
    } else if inputs.volatility_percent <= cfg.atr.oversold && inputs.flow_bullish == Some(true) {
        // Oversold plus accumulation reads as an opportunity, not a plain warning.
        warnings.push(Warning {
            kind: WarningKind::OversoldBounce,
            message: "Oversold with accumulation".to_string(),
            detail: Some(format!(
                "Extension: {:.1}%, volume flow bullish",
                inputs.volatility_percent
            )),
            value: Some(inputs.volatility_percent),
        });
    }

    // Oscillator range extremes.
    if inputs.rsi >= cfg.rsi.overbought {
        warnings.push(Warning {
            kind: WarningKind::RsiOverbought,
            message: "RSI overbought".to_string(),
            detail: Some(format!("RSI: {:.0}", inputs.rsi)),
            value: Some(inputs.rsi),
        });
    } else if inputs.rsi <= cfg.rsi.oversold {
        warnings.push(Warning {
            kind: WarningKind::RsiOversold,
            message: "RSI oversold".to_string(),
            detail: Some(format!("RSI: {:.0}", inputs.rsi)),
            value: Some(inputs.rsi),
        });
    }

    // Oscillator vs. price tracker disagreement.
    if inputs.oscillator_bullish && !inputs.price_bullish {
        warnings.push(Warning {
            kind: WarningKind::EarlyEntry,
            message: "Early entry - oscillator bullish, price catching up".to_string(),
            detail: Some("Momentum turned before price".to_string()),
            value: None,
        });
    } else if !inputs.oscillator_bullish && inputs.price_bullish {
        warnings.push(Warning {
            kind: WarningKind::OscillatorDivergence,
            message: "Oscillator bearish despite bullish price".to_string(),
            detail: Some("Momentum fading - watch for reversal".to_string()),
            value: None,
        });
    }

    // Volume flow vs. price tracker disagreement.
    if inputs.flow_bullish == Some(true) && !inputs.price_bullish {
        warnings.push(Warning {
            kind: WarningKind::Accumulation,
            message: "Accumulation on dip".to_string(),
            detail: Some("Volume flow rising while price falls".to_string()),
            value: None,
        });
    } else if inputs.flow_bullish == Some(false) && inputs.price_bullish {
        warnings.push(Warning {
            kind: WarningKind::Distribution,
            message: "Distribution at top".to_string(),
            detail: Some("Volume flow falling while price rises".to_string()),
            value: None,
        });
    }

    warnings
}

/// Warnings that force entry_allowed=false.
pub fn blocking(warnings: &[Warning]) -> Vec<&Warning> {
    warnings.iter().filter(|w| w.is_block()).collect()
}

/// Opportunity-severity warnings.
pub fn opportunities(warnings: &[Warning]) -> Vec<&Warning> {
    warnings.iter().filter(|w| w.is_opportunity()).collect()
}

/// True if any warning blocks entry.
pub fn has_entry_block(warnings: &[Warning]) -> bool {
    warnings.iter().any(|w| w.is_block())
}

/// Emoji-only shorthand for report columns.
pub fn short_summary(warnings: &[Warning]) -> String {
    warnings.iter().map(|w| w.kind.emoji()).collect()
}

/// Count of warnings per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarningSummary {
    pub block: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub opportunity: usize,
}

pub fn summarize(warnings: &[Warning]) -> WarningSummary {
    let mut summary = WarningSummary::default();
    for warning in warnings {
        match warning.severity() {
            Severity::Block => summary.block += 1,
            Severity::High => summary.high += 1,
            Severity::Medium => summary.medium += 1,
            Severity::Low => summary.low += 1,
            Severity::Opportunity => summary.opportunity += 1,
        }
    }
    summary
}
