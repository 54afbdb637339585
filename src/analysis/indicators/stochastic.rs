//! Stochastic Oscillator.

use crate::types::Candle;

/// Latest %K and %D values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StochasticOutput {
    pub k: f64,
    pub d: f64,
}

/// Neutral output for series too short to analyze.
const NEUTRAL: StochasticOutput = StochasticOutput { k: 50.0, d: 50.0 };

/// Stochastic oscillator: %K compares the close to the high/low range of
/// the trailing `period` candles, %D is the SMA(signal_period) of %K.
///
/// A defined %D needs `period + signal_period - 1` candles; shorter
/// series report the neutral {50, 50}.
pub fn stochastic(candles: &[Candle], period: usize, signal_period: usize) -> StochasticOutput {
    if period == 0 || signal_period == 0 || candles.len() < period + signal_period - 1 {
        return NEUTRAL;
    }

    let mut k_values = Vec::with_capacity(candles.len() - period + 1);

    for i in (period - 1)..candles.len() {
        let window = &candles[(i + 1 - period)..=i];
        let lowest_low = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
        let highest_high = window
            .iter()
            .map(|c| c.high)
            .fold(f64::NEG_INFINITY, f64::max);

        // Flat window: no range to scale against, park at midline.
        let k = if highest_high != lowest_low {
            (candles[i].close - lowest_low) / (highest_high - lowest_low) * 100.0
        } else {
            50.0
        };
        k_values.push(k);
    }

    let k = *k_values.last().unwrap_or(&50.0);
    let d = k_values.iter().rev().take(signal_period).sum::<f64>() / signal_period as f64;

    StochasticOutput { k, d }
}
