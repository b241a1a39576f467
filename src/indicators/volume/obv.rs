//! Volume-flow tracker (on-balance volume style).
//!
//! Cumulative signed volume: add on up bars, subtract on down bars. Rising
//! flow is buying pressure, falling flow is selling pressure. The divergence
//! check against price is the piece that separates accumulation-on-dip from
//! distribution-at-top.

use crate::common::math;
use crate::config::VolumeFlowConfig;
use crate::models::bar::Bar;
use crate::models::indicators::{DivergenceKind, FlowDivergence, FlowTrend, VolumeFlow};

/// Cumulative signed volume series.
pub fn flow_series(bars: &[Bar]) -> Vec<f64> {
    let mut out = Vec::with_capacity(bars.len());
    let mut total = 0.0;
    for (i, bar) in bars.iter().enumerate() {
        if i > 0 {
            let change = bar.close - bars[i - 1].close;
            if change > 0.0 {
                total += bar.volume;
            } else if change < 0.0 {
                total -= bar.volume;
            }
        }
        out.push(total);
    }
    out
}

/// Flow trend for the last bar.
///
/// Bullish only when the flow is both above its own moving average and
/// net-rising over the lookback window; bearish only in the mirror case;
/// anything in between stays mixed.
pub fn analyze(bars: &[Bar], cfg: &VolumeFlowConfig) -> VolumeFlow {
    if bars.len() < cfg.lookback + 5 {
        return VolumeFlow::insufficient();
    }

    let series = flow_series(bars);
    let flow = series[series.len() - 1];
    let ma = math::sma(&series, cfg.ma_period);
    let above_ma = ma.map_or(false, |m| flow > m);

    let start = series[series.len() - cfg.lookback];
    let change = flow - start;
    let rising = change > 0.0;
    let change_pct = if start != 0.0 {
        change / start.abs() * 100.0
    } else {
        0.0
    };

    let trend = if above_ma && rising {
        FlowTrend::Accumulation
    } else if !above_ma && !rising {
        FlowTrend::Distribution
    } else {
        FlowTrend::Mixed
    };

    VolumeFlow {
        flow,
        flow_ma: ma.unwrap_or(flow),
        trend,
        change_pct,
        divergence: detect_divergence(bars, cfg),
    }
}

/// Divergence between price and flow over the divergence lookback.
///
/// Bullish: price fell at least the price threshold while flow rose at least
/// the flow threshold (accumulation on the dip). Bearish is the mirror
/// (distribution at the top). The two cannot both hold for one snapshot.
pub fn detect_divergence(bars: &[Bar], cfg: &VolumeFlowConfig) -> Option<FlowDivergence> {
    let lookback = cfg.divergence_lookback;
    if bars.len() < lookback + 5 {
        return None;
    }

    let series = flow_series(bars);
    let price_start = bars[bars.len() - lookback].close;
    let price_end = bars[bars.len() - 1].close;
    let price_change = if price_start != 0.0 {
        (price_end / price_start - 1.0) * 100.0
    } else {
        0.0
    };

    let flow_start = series[series.len() - lookback];
    let flow_end = series[series.len() - 1];
    let flow_change = if flow_start != 0.0 {
        (flow_end - flow_start) / flow_start.abs() * 100.0
    } else {
        0.0
    };

    let strength = ((flow_change.abs() / 5.0) as u8).clamp(1, 5);

    if price_change < -cfg.divergence_price_pct && flow_change > cfg.divergence_flow_pct {
        return Some(FlowDivergence {
            kind: DivergenceKind::Bullish,
            strength,
            price_change_pct: price_change,
            flow_change_pct: flow_change,
            description: format!(
                "Bullish divergence: price {:.1}% but flow +{:.1}%",
                price_change, flow_change
            ),
        });
    }

    if price_change > cfg.divergence_price_pct && flow_change < -cfg.divergence_flow_pct {
        return Some(FlowDivergence {
            kind: DivergenceKind::Bearish,
            strength,
            price_change_pct: price_change,
            flow_change_pct: flow_change,
            description: format!(
                "Bearish divergence: price +{:.1}% but flow {:.1}%",
                price_change, flow_change
            ),
        });
    }

    None
}
