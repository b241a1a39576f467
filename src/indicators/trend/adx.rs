//! Direction-strength meter (ADX/DMI style).

use crate::common::math;
use crate::config::AdxConfig;
use crate::models::bar::Bar;
use crate::models::indicators::{DirectionState, DirectionStrength};

/// ADX plus the directional components and the derived market state.
///
/// +DM/-DM and true range are EMA-smoothed over the period, turned into
/// +DI/-DI, then DX = 100 * |+DI - -DI| / (+DI + -DI) is smoothed again into
/// ADX. The state is bullish or bearish by the sign of (+DI - -DI), or choppy
/// when the two are tangled within the configured threshold.
pub fn direction_strength(bars: &[Bar], cfg: &AdxConfig) -> Option<DirectionStrength> {
    if cfg.period == 0 || bars.len() < cfg.period + 1 {
        return None;
    }

    let n = bars.len() - 1;
    let mut tr = Vec::with_capacity(n);
    let mut plus_dm = Vec::with_capacity(n);
    let mut minus_dm = Vec::with_capacity(n);

    for i in 1..bars.len() {
        tr.push(math::true_range(
            bars[i].high,
            bars[i].low,
            bars[i - 1].close,
        ));

        let up_move = bars[i].high - bars[i - 1].high;
        let down_move = bars[i - 1].low - bars[i].low;
        if up_move > down_move && up_move > 0.0 {
            plus_dm.push(up_move);
        } else {
            plus_dm.push(0.0);
        }
        if down_move > up_move && down_move > 0.0 {
            minus_dm.push(down_move);
        } else {
            minus_dm.push(0.0);
        }
    }

    let atr = math::ema_series(&tr, cfg.period);
    let plus_smooth = math::ema_series(&plus_dm, cfg.period);
    let minus_smooth = math::ema_series(&minus_dm, cfg.period);

    let mut dx = Vec::with_capacity(n);
    let mut plus_di_last = 0.0;
    let mut minus_di_last = 0.0;
    for i in 0..n {
        let (plus_di, minus_di) = if atr[i] > 0.0 {
            (
                100.0 * plus_smooth[i] / atr[i],
                100.0 * minus_smooth[i] / atr[i],
            )
        } else {
            (0.0, 0.0)
        };
        let di_sum = plus_di + minus_di;
        dx.push(if di_sum > 0.0 {
            100.0 * (plus_di - minus_di).abs() / di_sum
        } else {
            0.0
        });
        plus_di_last = plus_di;
        minus_di_last = minus_di;
    }

    let adx = *math::ema_series(&dx, cfg.period).last()?;

    let spread = plus_di_last - minus_di_last;
    let state = if spread.abs() < cfg.dmi_tangle {
        DirectionState::Choppy
    } else if spread > 0.0 {
        DirectionState::Bullish
    } else {
        DirectionState::Bearish
    };

    Some(DirectionStrength {
        adx,
        plus_di: plus_di_last,
        minus_di: minus_di_last,
        state,
    })
}
