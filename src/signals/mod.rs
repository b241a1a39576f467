//! Signal fusion: zone classification, entry grading, warnings, aggregation.

pub mod engine;
pub mod entry;
pub mod warnings;
pub mod zone;

pub use engine::{Analysis, Overrides, SignalEngine, MIN_BARS};
pub use entry::EntryInputs;
pub use warnings::WarningInputs;
pub use zone::ZoneInputs;
