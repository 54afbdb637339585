//! Exponential Moving Average (EMA).

use crate::types::Candle;

/// EMA of closing prices, seeded with an SMA over the first `period`
/// candles. Falls back to the last close when the series is shorter
/// than `period`.
pub fn ema(candles: &[Candle], period: usize) -> f64 {
    let last_close = candles.last().map(|c| c.close).unwrap_or_default();
    if period == 0 || candles.len() < period {
        return last_close;
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut value: f64 = candles.iter().take(period).map(|c| c.close).sum::<f64>() / period as f64;

    for candle in candles.iter().skip(period) {
        value = (candle.close - value) * multiplier + value;
    }

    value
}

/// EMA series over raw values, used by the MACD signal line.
/// Empty when the input is shorter than `period`.
pub(crate) fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut series = Vec::with_capacity(values.len() - period + 1);

    let sma: f64 = values.iter().take(period).sum::<f64>() / period as f64;
    series.push(sma);

    for value in values.iter().skip(period) {
        let prev = *series.last().unwrap();
        series.push((value - prev) * multiplier + prev);
    }

    series
}
