//! MACD (Moving Average Convergence Divergence).

use super::ema::ema_series;
use crate::types::Candle;

/// Latest MACD line, signal line and histogram values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacdOutput {
    /// MACD line: EMA(fast) - EMA(slow).
    pub value: f64,
    /// Signal line: EMA(signal_period) of the MACD line.
    pub signal: f64,
    /// MACD line minus signal line.
    pub histogram: f64,
}

pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

/// MACD(12, 26, 9) over closing prices.
///
/// The output is defined only once the signal line is, at
/// `slow + signal - 1` candles (34 with the defaults). Below that every
/// field reports zero, including the MACD line at lengths (26..34)
/// where it alone could be computed.
pub fn macd(candles: &[Candle]) -> MacdOutput {
    macd_with(candles, MACD_FAST, MACD_SLOW, MACD_SIGNAL)
}

pub fn macd_with(candles: &[Candle], fast: usize, slow: usize, signal_period: usize) -> MacdOutput {
    if fast >= slow || candles.len() < slow + signal_period - 1 {
        return MacdOutput::default();
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let fast_ema = ema_series(&closes, fast);
    let slow_ema = ema_series(&closes, slow);

    // The fast series starts earlier; align it onto the slow one.
    let offset = slow - fast;
    let macd_line: Vec<f64> = fast_ema
        .iter()
        .skip(offset)
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal_line = ema_series(&macd_line, signal_period);

    let (Some(&value), Some(&signal)) = (macd_line.last(), signal_line.last()) else {
        return MacdOutput::default();
    };

    MacdOutput {
        value,
        signal,
        histogram: value - signal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Candle {
                timestamp: 1_700_000_000_000 + i as i64 * 300_000,
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 100.0,
            })
            .collect()
    }

    #[test]
    fn test_macd_insufficient_data_is_zero() {
        let closes: Vec<f64> = (0..33).map(|i| 100.0 + i as f64).collect();
        let out = macd(&candles_from_closes(&closes));
        assert_eq!(out, MacdOutput::default());
    }

    #[test]
    fn test_macd_line_not_reported_without_signal_line() {
        // 26..34 candles could define the MACD line but not the signal
        // line; the whole output stays zero, not just the histogram.
        for n in [26, 30, 33] {
            let closes: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
            let out = macd(&candles_from_closes(&closes));
            assert_eq!(out.value, 0.0, "{} candles", n);
            assert_eq!(out.signal, 0.0, "{} candles", n);
            assert_eq!(out.histogram, 0.0, "{} candles", n);
        }
    }

    #[test]
    fn test_macd_defined_at_minimum_length() {
        let closes: Vec<f64> = (0..34).map(|i| 100.0 + i as f64).collect();
        let out = macd(&candles_from_closes(&closes));
        assert!(out.value != 0.0 || out.signal != 0.0);
    }

    #[test]
    fn test_macd_histogram_is_value_minus_signal() {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0 + i as f64 * 0.2)
            .collect();
        let out = macd(&candles_from_closes(&closes));
        assert!((out.histogram - (out.value - out.signal)).abs() < 1e-12);
    }

    #[test]
    fn test_macd_positive_in_sustained_uptrend() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 2.0).collect();
        let out = macd(&candles_from_closes(&closes));
        assert!(out.value > 0.0, "MACD line should be positive, got {}", out.value);
    }

    #[test]
    fn test_macd_negative_in_sustained_downtrend() {
        let closes: Vec<f64> = (0..60).map(|i| 300.0 - i as f64 * 2.0).collect();
        let out = macd(&candles_from_closes(&closes));
        assert!(out.value < 0.0, "MACD line should be negative, got {}", out.value);
    }

    #[test]
    fn test_macd_flat_series_is_zero() {
        let closes = vec![150.0; 60];
        let out = macd(&candles_from_closes(&closes));
        assert!(out.value.abs() < 1e-9);
        assert!(out.histogram.abs() < 1e-9);
    }
}
