//! Fixed indicator batch with categorical labels.

use super::indicators::{bollinger, ema, macd, rsi, stochastic};
use crate::types::{Candle, IndicatorResult, IndicatorSignal};

/// Compute the standard dashboard batch: exactly seven named indicators
/// in fixed order, each with its value formatted at the precision the
/// dashboard expects and a threshold-classified label.
pub fn indicator_batch(candles: &[Candle]) -> Vec<IndicatorResult> {
    let rsi_value = rsi(candles, 14);
    let macd_out = macd(candles);
    let ema9 = ema(candles, 9);
    let ema21 = ema(candles, 21);
    let ema50 = ema(candles, 50);
    let bb = bollinger(candles, 20, 2.0);
    let stoch = stochastic(candles, 14, 3);

    let current_price = candles.last().map(|c| c.close).unwrap_or_default();

    vec![
        IndicatorResult {
            name: "RSI (14)".to_string(),
            value: format!("{:.1}", rsi_value),
            signal: label_rsi(rsi_value),
            change: None,
        },
        IndicatorResult {
            name: "MACD".to_string(),
            value: format!("{:.2}", macd_out.histogram),
            signal: label_macd_histogram(macd_out.histogram),
            change: None,
        },
        IndicatorResult {
            name: "EMA (9)".to_string(),
            value: format!("{:.2}", ema9),
            signal: label_price_vs_ema(current_price, ema9),
            change: None,
        },
        IndicatorResult {
            name: "EMA (21)".to_string(),
            value: format!("{:.2}", ema21),
            signal: label_price_vs_ema(current_price, ema21),
            change: None,
        },
        IndicatorResult {
            name: "EMA (50)".to_string(),
            value: format!("{:.2}", ema50),
            signal: label_price_vs_ema(current_price, ema50),
            change: None,
        },
        IndicatorResult {
            name: "Bollinger Bands".to_string(),
            value: format!("{:.2}", bb.upper),
            signal: label_bollinger(current_price, bb.upper, bb.lower),
            change: None,
        },
        IndicatorResult {
            name: "Stochastic".to_string(),
            value: format!("{:.1}", stoch.k),
            signal: label_stochastic_k(stoch.k),
            change: None,
        },
    ]
}

/// RSI below 30 is oversold, above 70 overbought.
pub fn label_rsi(value: f64) -> IndicatorSignal {
    if value < 30.0 {
        IndicatorSignal::Oversold
    } else if value > 70.0 {
        IndicatorSignal::Overbought
    } else {
        IndicatorSignal::Neutral
    }
}

/// Histogram sign decides the cross direction; exactly zero reads bearish.
pub fn label_macd_histogram(histogram: f64) -> IndicatorSignal {
    if histogram > 0.0 {
        IndicatorSignal::BullishCross
    } else {
        IndicatorSignal::BearishCross
    }
}

pub fn label_price_vs_ema(price: f64, ema_value: f64) -> IndicatorSignal {
    if price > ema_value {
        IndicatorSignal::Bullish
    } else {
        IndicatorSignal::Bearish
    }
}

pub fn label_bollinger(price: f64, upper: f64, lower: f64) -> IndicatorSignal {
    if price > upper {
        IndicatorSignal::Overbought
    } else if price < lower {
        IndicatorSignal::Oversold
    } else {
        IndicatorSignal::Neutral
    }
}

/// Stochastic %K below 20 is oversold, above 80 overbought.
pub fn label_stochastic_k(k: f64) -> IndicatorSignal {
    if k < 20.0 {
        IndicatorSignal::Oversold
    } else if k > 80.0 {
        IndicatorSignal::Overbought
    } else {
        IndicatorSignal::Neutral
    }
}
