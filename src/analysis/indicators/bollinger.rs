//! Bollinger Bands.

use crate::types::Candle;

/// Latest band values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerOutput {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Bollinger Bands over closing prices: middle = SMA(period), bands at
/// `std_dev` population standard deviations.
///
/// When the series is shorter than `period` all three bands collapse to
/// the last close.
pub fn bollinger(candles: &[Candle], period: usize, std_dev: f64) -> BollingerOutput {
    let last_close = candles.last().map(|c| c.close).unwrap_or_default();
    if period == 0 || candles.len() < period {
        return BollingerOutput {
            upper: last_close,
            middle: last_close,
            lower: last_close,
        };
    }

    let closes: Vec<f64> = candles
        .iter()
        .rev()
        .take(period)
        .map(|c| c.close)
        .collect();

    let middle = closes.iter().sum::<f64>() / period as f64;
    let variance =
        closes.iter().map(|c| (c - middle).powi(2)).sum::<f64>() / period as f64;
    let deviation = variance.sqrt() * std_dev;

    BollingerOutput {
        upper: middle + deviation,
        middle,
        lower: middle - deviation,
    }
}
