//! Latest-value RSI and MACD over a close-price series.
//!
//! RSI uses simple means of gains and losses over a 14-delta window. MACD is
//! EMA(12) minus EMA(26), with the recursive EMA seeded on the first close
//! and no bias adjustment. Callers only ever consume the most recent value,
//! so both functions compute exactly that.

pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST_SPAN: usize = 12;
pub const MACD_SLOW_SPAN: usize = 26;

/// Latest indicator values for one ticker. Only built when both values are
/// defined; an undefined value means "skip this ticker for this cycle".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSnapshot {
    pub rsi: f64,
    pub macd: f64,
}

/// Latest RSI over the trailing `period` deltas, or `None` when the series
/// is shorter than `period + 1` bars.
///
/// The division-by-zero case is resolved explicitly instead of letting a
/// NaN reach the band comparison: a window with zero mean loss is 100 when
/// there were gains, 50 when the window was completely flat.
pub fn latest_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let window = &closes[closes.len() - (period + 1)..];

    let mut gains = 0.0;
    let mut losses = 0.0;
    for pair in window.windows(2) {
        let delta = pair[1] - pair[0];
        if delta >= 0.0 {
            gains += delta;
        } else {
            losses -= delta;
        }
    }

    let mean_gain = gains / period as f64;
    let mean_loss = losses / period as f64;

    if mean_loss == 0.0 {
        return Some(if mean_gain == 0.0 { 50.0 } else { 100.0 });
    }

    let rs = mean_gain / mean_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// Latest EMA with smoothing `2 / (span + 1)`, seeded on the first value.
pub fn latest_ema(closes: &[f64], span: usize) -> Option<f64> {
    let (&first, rest) = closes.split_first()?;
    let alpha = 2.0 / (span as f64 + 1.0);

    let mut ema = first;
    for &close in rest {
        ema = alpha * close + (1.0 - alpha) * ema;
    }
    Some(ema)
}

/// Latest MACD line value, or `None` for an empty series.
pub fn latest_macd(closes: &[f64]) -> Option<f64> {
    let fast = latest_ema(closes, MACD_FAST_SPAN)?;
    let slow = latest_ema(closes, MACD_SLOW_SPAN)?;
    Some(fast - slow)
}

/// Latest snapshot for a close series, or `None` when either indicator is
/// undefined for it.
pub fn latest_snapshot(closes: &[f64]) -> Option<IndicatorSnapshot> {
    let rsi = latest_rsi(closes, RSI_PERIOD)?;
    let macd = latest_macd(closes)?;
    Some(IndicatorSnapshot { rsi, macd })
}
