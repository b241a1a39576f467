//! Signal-fusion engine for price/volume bar series.
//!
//! Feed in a chronological bar series, get back an [`models::IndicatorSnapshot`]
//! plus a [`models::CompleteSignal`]: a nine-way zone, an A-X entry grade, and
//! a list of typed warnings. The oscillator tracker (stop-and-reverse over the
//! RSI) is the primary signal; the price tracker is the risk filter; volume
//! flow confirms or warns; two composite scores answer "what to trade" and
//! "when to enter".
//!
//! The engine is deterministic and side-effect-free: all state lives inside a
//! single call to [`signals::SignalEngine::evaluate`].

pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod scoring;
pub mod signals;

pub use config::{EngineConfig, MomentumStrategy};
pub use models::{Bar, CompleteSignal, EntryGrade, IndicatorSnapshot, Warning, Zone};
pub use signals::{Analysis, Overrides, SignalEngine};
