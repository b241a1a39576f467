//! Discrete classification outputs: zones, entry grades, warnings.
//!
//! The per-variant display attributes (priority, color, emoji, action) are
//! static lookup tables, not mutable state.

use serde::{Deserialize, Serialize};

/// Nine-way trading zone, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    StrongBuy,
    Buy,
    EarlyBuy,
    Hold,
    Neutral,
    Warning,
    Weak,
    Sell,
    OversoldWatch,
}

impl Zone {
    /// Strict total order used for display sorting (1 = highest).
    pub fn priority(self) -> u8 {
        match self {
            Zone::StrongBuy => 1,
            Zone::Buy => 2,
            Zone::EarlyBuy => 3,
            Zone::Hold => 4,
            Zone::Neutral => 5,
            Zone::Warning => 6,
            Zone::Weak => 7,
            Zone::Sell => 8,
            Zone::OversoldWatch => 9,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Zone::StrongBuy => "STRONG_BUY",
            Zone::Buy => "BUY",
            Zone::EarlyBuy => "EARLY_BUY",
            Zone::Hold => "HOLD",
            Zone::Neutral => "NEUTRAL",
            Zone::Warning => "WARNING",
            Zone::Weak => "WEAK",
            Zone::Sell => "SELL",
            Zone::OversoldWatch => "OVERSOLD_WATCH",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Zone::StrongBuy => "#27ae60",
            Zone::Buy => "#2ecc71",
            Zone::EarlyBuy => "#3498db",
            Zone::Hold => "#f39c12",
            Zone::Neutral => "#95a5a6",
            Zone::Warning => "#e67e22",
            Zone::Weak => "#e74c3c",
            Zone::Sell => "#c0392b",
            Zone::OversoldWatch => "#9b59b6",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Zone::StrongBuy => "🟢🟢",
            Zone::Buy => "🟢",
            Zone::EarlyBuy => "⚡",
            Zone::Hold => "⏸️",
            Zone::Neutral => "🟡",
            Zone::Warning => "⚠️",
            Zone::Weak => "🟠",
            Zone::Sell => "🔴",
            Zone::OversoldWatch => "❄️",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            Zone::StrongBuy => "Enter now - all signals aligned",
            Zone::Buy => "Enter with normal position",
            Zone::EarlyBuy => "Early entry - catching the turn",
            Zone::Hold => "Hold existing, no new entries",
            Zone::Neutral => "Wait for clarity",
            Zone::Warning => "Consider exit - momentum fading",
            Zone::Weak => "Avoid - weak setup",
            Zone::Sell => "Exit or avoid",
            Zone::OversoldWatch => "Watch for bounce - accumulation detected",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Zone::StrongBuy => "Oscillator bullish + flow confirming + small gap",
            Zone::Buy => "Oscillator bullish, mostly confirmed",
            Zone::EarlyBuy => "Oscillator flipped bullish, price catching up",
            Zone::Hold => "Good trend but overextended",
            Zone::Neutral => "Mixed signals",
            Zone::Warning => "Oscillator bearish while price holds up",
            Zone::Weak => "Poor trend strength",
            Zone::Sell => "Oscillator and flow both bearish",
            Zone::OversoldWatch => "Downtrend with accumulation underneath",
        }
    }
}

/// Result of zone classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneResult {
    pub zone: Zone,
    /// Clamped to [10, 95].
    pub confidence: i32,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
    pub entry_allowed: bool,
    pub action: String,
}

impl ZoneResult {
    pub fn display(&self) -> String {
        format!("{} {}", self.zone.emoji(), self.zone.name())
    }
}

/// Entry quality grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryGrade {
    A,
    B,
    C,
    D,
    X,
}

impl EntryGrade {
    pub fn label(self) -> &'static str {
        match self {
            EntryGrade::A => "Excellent",
            EntryGrade::B => "Good",
            EntryGrade::C => "Poor",
            EntryGrade::D => "Bad",
            EntryGrade::X => "Blocked",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            EntryGrade::A => "#27ae60",
            EntryGrade::B => "#f1c40f",
            EntryGrade::C => "#e67e22",
            EntryGrade::D => "#e74c3c",
            EntryGrade::X => "#c0392b",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            EntryGrade::A => "ENTER - full position",
            EntryGrade::B => "ENTER - reduced position",
            EntryGrade::C => "WAIT - poor timing or risk",
            EntryGrade::D => "AVOID - bad setup",
            EntryGrade::X => "NO ENTRY - hard block",
        }
    }
}

/// Per-factor point breakdown behind an entry grade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryFactors {
    pub trend: i32,
    pub timing: i32,
    pub gap: i32,
    pub confirmation: i32,
    pub momentum: i32,
}

impl EntryFactors {
    pub fn total(&self) -> i32 {
        self.trend + self.timing + self.gap + self.confirmation + self.momentum
    }
}

/// Result of entry quality grading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryQuality {
    pub grade: EntryGrade,
    /// 0-100 composite score; 0 when hard-blocked.
    pub score: i32,
    pub factors: EntryFactors,
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
    pub blocked_reason: Option<String>,
}

impl EntryQuality {
    pub fn is_actionable(&self) -> bool {
        matches!(self.grade, EntryGrade::A | EntryGrade::B)
    }

    pub fn display(&self) -> String {
        format!("{:?} ({})", self.grade, self.score)
    }
}

/// Warning severity. `Block` forces entry_allowed=false downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Block,
    High,
    Medium,
    Low,
    Opportunity,
}

/// Typed warning conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningKind {
    GapBlocked,
    GapWarning,
    MomentumExhausted,
    ExtremeOverbought,
    Overbought,
    ExtremeOversold,
    OversoldBounce,
    RsiOverbought,
    RsiOversold,
    EarlyEntry,
    OscillatorDivergence,
    Accumulation,
    Distribution,
}

impl WarningKind {
    pub fn severity(self) -> Severity {
        match self {
            WarningKind::GapBlocked | WarningKind::MomentumExhausted => Severity::Block,
            WarningKind::ExtremeOverbought | WarningKind::Distribution => Severity::High,
            WarningKind::GapWarning
            | WarningKind::Overbought
            | WarningKind::OscillatorDivergence => Severity::Medium,
            WarningKind::RsiOverbought => Severity::Low,
            WarningKind::ExtremeOversold
            | WarningKind::OversoldBounce
            | WarningKind::RsiOversold
            | WarningKind::EarlyEntry
            | WarningKind::Accumulation => Severity::Opportunity,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            WarningKind::GapBlocked => "🚫",
            WarningKind::GapWarning => "⚠️",
            WarningKind::MomentumExhausted => "⏸️",
            WarningKind::ExtremeOverbought => "🔥🔥",
            WarningKind::Overbought => "🔥",
            WarningKind::ExtremeOversold => "❄️❄️",
            WarningKind::OversoldBounce => "❄️",
            WarningKind::RsiOverbought => "📊",
            WarningKind::RsiOversold => "📊",
            WarningKind::EarlyEntry => "⚡",
            WarningKind::OscillatorDivergence => "⚠️",
            WarningKind::Accumulation => "📈",
            WarningKind::Distribution => "📉",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            WarningKind::GapBlocked => "#c0392b",
            WarningKind::GapWarning => "#f39c12",
            WarningKind::MomentumExhausted => "#95a5a6",
            WarningKind::ExtremeOverbought => "#e74c3c",
            WarningKind::Overbought => "#e67e22",
            WarningKind::ExtremeOversold => "#9b59b6",
            WarningKind::OversoldBounce => "#3498db",
            WarningKind::RsiOverbought => "#e67e22",
            WarningKind::RsiOversold => "#3498db",
            WarningKind::EarlyEntry => "#27ae60",
            WarningKind::OscillatorDivergence => "#f39c12",
            WarningKind::Accumulation => "#27ae60",
            WarningKind::Distribution => "#e74c3c",
        }
    }
}

/// A single warning with optional context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
    pub detail: Option<String>,
    pub value: Option<f64>,
}

impl Warning {
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_block(&self) -> bool {
        self.severity() == Severity::Block
    }

    pub fn is_opportunity(&self) -> bool {
        self.severity() == Severity::Opportunity
    }
}

/// The fused classification handed to external collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteSignal {
    pub zone: ZoneResult,
    pub entry: EntryQuality,
    pub warnings: Vec<Warning>,
    /// Zone verdict AND no block-severity warning present.
    pub entry_allowed: bool,
    pub confidence: i32,
    /// Emoji-only shorthand of the warning list.
    pub summary: String,
}

impl CompleteSignal {
    pub fn has_block(&self) -> bool {
        self.warnings.iter().any(Warning::is_block)
    }

    pub fn has_opportunity(&self) -> bool {
        self.warnings.iter().any(Warning::is_opportunity)
    }
}
