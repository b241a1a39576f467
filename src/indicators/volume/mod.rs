//! Volume indicators: on-balance volume flow

pub mod obv;
