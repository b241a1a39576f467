//! Shared data models spanning the engine layers.

pub mod bar;
pub mod indicators;
pub mod signal;
pub mod snapshot;

pub use bar::Bar;
pub use indicators::{
    BollingerReading, CrossDirection, DirectionState, DirectionStrength, DivergenceKind,
    FlowDivergence, FlowTrend, MacdReading, OscillatorTracker, PriceTracker, RsiDivergence,
    TrackerPoint, TrendDirection, VolatilityBand, VolatilityReading, VolumeFlow,
};
pub use signal::{
    CompleteSignal, EntryFactors, EntryGrade, EntryQuality, Severity, Warning, WarningKind, Zone,
    ZoneResult,
};
pub use snapshot::IndicatorSnapshot;
