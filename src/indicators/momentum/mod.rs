//! Momentum indicators: RSI, MACD, Williams %R

pub mod macd;
pub mod rsi;
pub mod williams;
