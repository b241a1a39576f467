//! Structure indicators: the stop-and-reverse tracker, over price and over
//! the relative-strength oscillator.

pub mod osc_tracker;
pub mod tracker;
