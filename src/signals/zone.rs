//! Nine-way zone classifier.
//!
//! The oscillator tracker is primary, volume flow confirms or warns, the
//! price tracker filters risk, momentum and the volatility meter modify.
//! The classic strategy path keeps the old single-factor gap banding.

use crate::config::{EngineConfig, MomentumStrategy};
use crate::models::signal::{Zone, ZoneResult};

/// Everything the classifier looks at, already reduced to scalars.
#[derive(Debug, Clone)]
pub struct ZoneInputs {
    pub oscillator_bullish: bool,
    pub price_bullish: bool,
    pub gap_percent: f64,
    pub flow_bullish: Option<bool>,
    pub momentum: i32,
    pub rsi: f64,
    pub volatility_percent: f64,
    pub trend_score: i32,
    pub timing_score: i32,
    /// Price crashed down through the tracker stop within the last few bars.
    pub is_broken: bool,
}

impl Default for ZoneInputs {
    fn default() -> Self {
        Self {
            oscillator_bullish: false,
            price_bullish: false,
            gap_percent: 0.0,
            flow_bullish: None,
            momentum: 5,
            rsi: 50.0,
            volatility_percent: 0.0,
            trend_score: 50,
            timing_score: 50,
            is_broken: false,
        }
    }
}

/// Classic gap-band classification (price tracker primary).
pub fn classify_classic(gap_percent: f64, momentum: i32) -> Zone {
    if gap_percent >= 5.0 && momentum >= 7 {
        Zone::StrongBuy
    } else if gap_percent >= 0.0 {
        Zone::Buy
    } else if gap_percent >= -2.0 {
        Zone::Neutral
    } else if gap_percent >= -5.0 {
        Zone::Weak
    } else {
        Zone::Sell
    }
}

/// Classify one snapshot into a zone with confidence, reasons, and warnings.
pub fn classify(inputs: &ZoneInputs, cfg: &EngineConfig) -> ZoneResult {
    let mut reasons: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let mut confidence = 50;
    let mut entry_allowed = true;

    let abs_gap = inputs.gap_percent.abs();

    // Hard blocks apply regardless of which zone wins.
    if abs_gap > cfg.gap.max {
        entry_allowed = false;
        warnings.push(format!(
            "Gap {:+.1}% exceeds {}% max - no new entries",
            inputs.gap_percent, cfg.gap.max
        ));
    }
    if inputs.momentum >= cfg.momentum.exhausted_min {
        entry_allowed = false;
        warnings.push(format!("Momentum {} exhausted - hold only", inputs.momentum));
    }

    if cfg.strategy == MomentumStrategy::Classic {
        let zone = classify_classic(inputs.gap_percent, inputs.momentum);
        reasons.push(format!("Gap {:+.1}% band", inputs.gap_percent));
        let action = action_for(zone, entry_allowed);
        return ZoneResult {
            zone,
            confidence,
            reasons,
            warnings,
            entry_allowed,
            action,
        };
    }

    let mut zone = match (inputs.oscillator_bullish, inputs.price_bullish) {
        // Confirmed uptrend.
        (true, true) => {
            reasons.push("Oscillator tracker bullish".to_string());
            reasons.push("Price above tracker stop".to_string());

            if abs_gap > cfg.gap.max {
                reasons.push(format!("But gap {:+.1}% too large", inputs.gap_percent));
                confidence = 60;
                Zone::Hold
            } else if inputs.flow_bullish == Some(true) {
                if inputs.momentum >= cfg.momentum.strong_min && abs_gap < cfg.gap.excellent {
                    reasons.push("Volume flow confirms accumulation".to_string());
                    confidence = 85;
                    Zone::StrongBuy
                } else {
                    reasons.push("Volume flow confirms".to_string());
                    confidence = 75;
                    Zone::Buy
                }
            } else if inputs.flow_bullish == Some(false) {
                reasons.push("But volume flow shows distribution".to_string());
                warnings.push("Price/flow divergence - momentum may fade".to_string());
                confidence = 45;
                Zone::Warning
            } else {
                confidence = 65;
                Zone::Buy
            }
        }

        // Oscillator led the turn - unless price just broke down.
        (true, false) => {
            if inputs.is_broken {
                reasons.push("Price crashed through the tracker stop".to_string());
                reasons.push("Oscillator bullish but lagging the breakdown".to_string());
                confidence = 30;
                entry_allowed = false;
                warnings.push("Recent breakdown - oscillator may flip bearish".to_string());
                Zone::Warning
            } else {
                reasons.push("Oscillator flipped bullish".to_string());
                reasons.push("Price still below the stop, catching up".to_string());
                confidence = 70;
                if inputs.flow_bullish == Some(true) {
                    reasons.push("Volume flow confirms accumulation".to_string());
                    confidence = 80;
                }
                if inputs.momentum <= 4 {
                    reasons.push("Momentum building".to_string());
                    confidence += 5;
                }
                Zone::EarlyBuy
            }
        }

        // Momentum fading while price holds up.
        (false, true) => {
            reasons.push("Oscillator turned bearish".to_string());
            reasons.push("Price still above the stop, may follow".to_string());
            confidence = 55;
            warnings.push("Momentum fading - consider reducing position".to_string());
            if inputs.flow_bullish == Some(false) {
                reasons.push("Volume flow confirms distribution".to_string());
                confidence = 40;
                Zone::Weak
            } else {
                Zone::Warning
            }
        }

        // Confirmed downtrend.
        (false, false) => {
            reasons.push("Oscillator tracker bearish".to_string());
            reasons.push("Price below tracker stop".to_string());

            if inputs.flow_bullish == Some(true) {
                reasons.push("But volume flow shows accumulation".to_string());
                reasons.push("Potential bounce setup".to_string());
                confidence = 50;
                warnings.push("Watch for oscillator flip for entry".to_string());
                Zone::OversoldWatch
            } else if inputs.rsi <= cfg.rsi.oversold {
                reasons.push(format!("RSI oversold ({:.0})", inputs.rsi));
                confidence = 45;
                warnings.push("Oversold - bounce possible".to_string());
                Zone::OversoldWatch
            } else {
                if inputs.flow_bullish == Some(false) {
                    reasons.push("Volume flow confirms distribution".to_string());
                }
                confidence = 70;
                Zone::Sell
            }
        }
    };

    // Composite-score modifiers.
    if inputs.trend_score < 40 {
        confidence -= 10;
        warnings.push(format!("Weak trend score ({})", inputs.trend_score));
    } else if inputs.trend_score >= cfg.trend_score.strong {
        confidence += 5;
    }

    if inputs.timing_score < cfg.timing_score.oversold {
        warnings.push(format!("Poor timing ({}) - oversold", inputs.timing_score));
    } else if inputs.timing_score > cfg.timing_score.overbought {
        warnings.push(format!("Poor timing ({}) - overbought", inputs.timing_score));
    } else if inputs.timing_score >= cfg.timing_score.ideal_min
        && inputs.timing_score <= cfg.timing_score.ideal_max
    {
        confidence += 5;
    }

    // Volatility-meter extremes.
    if inputs.volatility_percent > cfg.atr.extreme_overbought {
        warnings.push(format!(
            "Extremely overbought ({:+.0}%)",
            inputs.volatility_percent
        ));
        if matches!(zone, Zone::StrongBuy | Zone::Buy) {
            zone = Zone::Hold;
        }
    } else if inputs.volatility_percent < cfg.atr.extreme_oversold {
        warnings.push(format!(
            "Extremely oversold ({:.0}%)",
            inputs.volatility_percent
        ));
    }

    // Exhausted momentum never leaves a buy zone standing.
    if inputs.momentum >= cfg.momentum.exhausted_min
        && matches!(zone, Zone::StrongBuy | Zone::Buy | Zone::EarlyBuy)
    {
        reasons.push("Momentum exhausted - holding pattern".to_string());
        zone = Zone::Hold;
    }

    let confidence = confidence.clamp(10, 95);
    let action = action_for(zone, entry_allowed);

    ZoneResult {
        zone,
        confidence,
        reasons,
        warnings,
        entry_allowed,
        action,
    }
}

fn action_for(zone: Zone, entry_allowed: bool) -> String {
    if !entry_allowed && matches!(zone, Zone::StrongBuy | Zone::Buy | Zone::EarlyBuy) {
        "HOLD - no new entries (gap or momentum)".to_string()
    } else {
        zone.action().to_string()
    }
}
