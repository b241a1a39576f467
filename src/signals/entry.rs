//! Entry quality grader (A/B/C/D/X).
//!
//! Independent of the zone: the zone says what the market is doing, the grade
//! says whether THIS entry is worth taking. Hard blocks short-circuit to X.

use crate::config::EngineConfig;
use crate::models::signal::{EntryFactors, EntryGrade, EntryQuality};

/// Scalar inputs for one grading pass.
#[derive(Debug, Clone)]
pub struct EntryInputs {
    pub trend_score: i32,
    pub timing_score: i32,
    pub gap_percent: f64,
    pub oscillator_bullish: bool,
    pub flow_bullish: Option<bool>,
    pub momentum: i32,
    pub price_bullish: bool,
    pub volatility_percent: f64,
}

impl Default for EntryInputs {
    fn default() -> Self {
        Self {
            trend_score: 50,
            timing_score: 50,
            gap_percent: 0.0,
            oscillator_bullish: false,
            flow_bullish: None,
            momentum: 5,
            price_bullish: false,
            volatility_percent: 0.0,
        }
    }
}

/// Grade an entry from five weighted factors plus hard blocks.
pub fn grade(inputs: &EntryInputs, cfg: &EngineConfig) -> EntryQuality {
    let mut positives: Vec<String> = Vec::new();
    let mut negatives: Vec<String> = Vec::new();
    let mut factors = EntryFactors::default();

    let abs_gap = inputs.gap_percent.abs();

    // Hard blocks come first; nothing else can rescue these.
    if abs_gap > cfg.gap.max {
        let reason = format!(
            "Gap {:+.1}% exceeds {}% maximum",
            inputs.gap_percent, cfg.gap.max
        );
        return EntryQuality {
            grade: EntryGrade::X,
            score: 0,
            factors,
            positives,
            negatives: vec![reason.clone()],
            blocked_reason: Some(reason),
        };
    }

    if inputs.momentum >= cfg.momentum.exhausted_min {
        let reason = format!(
            "Momentum {} exhausted ({}-10 = hold only)",
            inputs.momentum, cfg.momentum.exhausted_min
        );
        return EntryQuality {
            grade: EntryGrade::X,
            score: 0,
            factors,
            positives,
            negatives: vec![reason.clone()],
            blocked_reason: Some(reason),
        };
    }

    // Factor 1: trend score banding (0-25).
    if inputs.trend_score >= cfg.trend_score.strong {
        factors.trend = 25;
        positives.push(format!("Strong trend ({})", inputs.trend_score));
    } else if inputs.trend_score >= cfg.trend_score.minimum {
        factors.trend = 15;
        positives.push(format!("Moderate trend ({})", inputs.trend_score));
    } else if inputs.trend_score >= 40 {
        factors.trend = 10;
        negatives.push(format!("Weak trend ({})", inputs.trend_score));
    } else {
        factors.trend = 5;
        negatives.push(format!("Very weak trend ({})", inputs.trend_score));
    }

    // Factor 2: timing score banding (0-25).
    let t = &cfg.timing_score;
    if inputs.timing_score >= t.ideal_min && inputs.timing_score <= t.ideal_max {
        factors.timing = 25;
        positives.push(format!("Ideal timing ({})", inputs.timing_score));
    } else if (30..=80).contains(&inputs.timing_score) {
        factors.timing = 15;
        positives.push(format!("Acceptable timing ({})", inputs.timing_score));
    } else if inputs.timing_score > 80 {
        factors.timing = 5;
        negatives.push(format!("Overbought timing ({})", inputs.timing_score));
    } else {
        factors.timing = 10;
        negatives.push(format!("Oversold timing ({})", inputs.timing_score));
    }

    // Factor 3: gap risk banding (0-20).
    if abs_gap < 2.0 {
        factors.gap = 20;
        positives.push(format!("Excellent gap ({:+.1}%)", inputs.gap_percent));
    } else if abs_gap < cfg.gap.excellent {
        factors.gap = 15;
        positives.push(format!("Good gap ({:+.1}%)", inputs.gap_percent));
    } else if abs_gap < 4.0 {
        factors.gap = 10;
    } else {
        factors.gap = 5;
        negatives.push(format!("Elevated gap risk ({:+.1}%)", inputs.gap_percent));
    }

    // Factor 4: signal confirmation count (0-20).
    let mut confirmations = 0;
    if inputs.oscillator_bullish && inputs.price_bullish {
        confirmations += 2;
        positives.push("Oscillator and price tracker aligned bullish".to_string());
    } else if inputs.oscillator_bullish {
        confirmations += 1;
        positives.push("Oscillator bullish (early signal)".to_string());
    } else if inputs.price_bullish {
        negatives.push("Oscillator bearish despite price strength".to_string());
    }

    match inputs.flow_bullish {
        Some(true) => {
            confirmations += 1;
            positives.push("Volume flow confirms accumulation".to_string());
        }
        Some(false) => {
            negatives.push("Volume flow shows distribution".to_string());
        }
        None => {}
    }

    factors.confirmation = (confirmations * 7).min(20);

    // Factor 5: momentum banding (0-10).
    let m = &cfg.momentum;
    if inputs.momentum >= m.ideal_min && inputs.momentum <= m.ideal_max {
        factors.momentum = 10;
        positives.push(format!("Ideal momentum ({})", inputs.momentum));
    } else if inputs.momentum >= m.strong_min {
        factors.momentum = 5;
        negatives.push(format!("High momentum ({}) - late entry", inputs.momentum));
    } else if inputs.momentum >= 4 {
        factors.momentum = 7;
    } else {
        factors.momentum = 3;
        negatives.push(format!("Low momentum ({})", inputs.momentum));
    }

    let mut total = factors.total();

    // Volatility-meter extremes shave the total; oversold less than overbought
    // since capitulation can be a setup.
    if inputs.volatility_percent > cfg.atr.extreme_overbought {
        total -= 15;
        negatives.push(format!(
            "Extremely overbought ({:+.0}%)",
            inputs.volatility_percent
        ));
    } else if inputs.volatility_percent < cfg.atr.extreme_oversold {
        total -= 5;
        negatives.push(format!(
            "Extremely oversold ({:.0}%)",
            inputs.volatility_percent
        ));
    }

    let grade = if total >= 80 {
        EntryGrade::A
    } else if total >= 60 {
        EntryGrade::B
    } else if total >= 40 {
        EntryGrade::C
    } else {
        EntryGrade::D
    };

    EntryQuality {
        grade,
        score: total.clamp(0, 100),
        factors,
        positives,
        negatives,
        blocked_reason: None,
    }
}
