//! Recent price-movement summary used as advisor prompt context.

use crate::types::Candle;
use std::fmt;

/// Trend direction over the summarized window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Bullish => write!(f, "Bullish"),
            Trend::Bearish => write!(f, "Bearish"),
            Trend::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Coarse volatility bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Volatility {
    High,
    Low,
}

impl fmt::Display for Volatility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Volatility::High => write!(f, "High"),
            Volatility::Low => write!(f, "Low"),
        }
    }
}

/// Textual/numeric context for the proposal prompt. Never used for
/// trading decisions directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceMovement {
    pub trend: Trend,
    pub volatility: Volatility,
    /// Lowest low over the last 10 candles of the window.
    pub support: f64,
    /// Highest high over the same slice.
    pub resistance: f64,
}

/// Number of trailing candles the summary considers.
pub const MOVEMENT_WINDOW: usize = 20;

/// Summarize the most recent `MOVEMENT_WINDOW` candles: last close vs
/// window mean for trend, average bar range vs 1% of the mean close for
/// volatility, and the last-10 extremes for support/resistance.
pub fn summarize_movement(candles: &[Candle]) -> PriceMovement {
    let window = if candles.len() > MOVEMENT_WINDOW {
        &candles[candles.len() - MOVEMENT_WINDOW..]
    } else {
        candles
    };

    if window.is_empty() {
        return PriceMovement {
            trend: Trend::Neutral,
            volatility: Volatility::Low,
            support: 0.0,
            resistance: 0.0,
        };
    }

    let avg_close = window.iter().map(|c| c.close).sum::<f64>() / window.len() as f64;
    let current_close = window[window.len() - 1].close;

    let trend = if current_close > avg_close {
        Trend::Bullish
    } else if current_close < avg_close {
        Trend::Bearish
    } else {
        Trend::Neutral
    };

    let highest = window.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
    let lowest = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    let avg_range = (highest - lowest) / window.len() as f64;
    let volatility = if avg_range > avg_close * 0.01 {
        Volatility::High
    } else {
        Volatility::Low
    };

    let tail = &window[window.len().saturating_sub(10)..];
    let support = tail.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    let resistance = tail.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);

    PriceMovement {
        trend,
        volatility,
        support,
        resistance,
    }
}
