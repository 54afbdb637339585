//! Per-timeframe directional vote.

use super::indicators::{ema, macd, rsi};
use crate::types::{Candle, MacdTone, TimeframeAnalysis, TradeDirection};

/// Tally three independent directional votes (RSI, MACD histogram,
/// price vs EMA9) into a BUY/SELL/NEUTRAL call with a 0-100 strength.
///
/// Strength is the majority share of the votes actually cast, and 50
/// when nothing votes. The timeframe label is descriptive only: callers
/// decide which candle series backs it.
pub fn analyze_timeframe(candles: &[Candle], timeframe: &str) -> TimeframeAnalysis {
    let rsi_value = rsi(candles, 14);
    let macd_out = macd(candles);
    let ema9 = ema(candles, 9);
    let current_price = candles.last().map(|c| c.close).unwrap_or_default();

    let (signal, strength) = tally_votes(rsi_value, macd_out.histogram, current_price, ema9);

    TimeframeAnalysis {
        timeframe: timeframe.to_string(),
        signal,
        strength,
        rsi: rsi_value,
        macd: if macd_out.histogram > 0.0 {
            MacdTone::Bullish
        } else {
            MacdTone::Bearish
        },
    }
}

/// Cast the three directional votes and reduce them to a call plus the
/// majority-share strength.
pub fn tally_votes(rsi_value: f64, histogram: f64, price: f64, ema9: f64) -> (TradeDirection, u8) {
    let mut bullish = 0u32;
    let mut bearish = 0u32;

    // Each check casts at most one vote; RSI in [40, 60] abstains.
    if rsi_value < 40.0 {
        bullish += 1;
    }
    if rsi_value > 60.0 {
        bearish += 1;
    }
    if histogram > 0.0 {
        bullish += 1;
    }
    if histogram < 0.0 {
        bearish += 1;
    }
    if price > ema9 {
        bullish += 1;
    }
    if price < ema9 {
        bearish += 1;
    }

    let total = bullish + bearish;
    let strength = if total > 0 {
        (bullish.max(bearish) as f64 / total as f64 * 100.0).round() as u8
    } else {
        50
    };

    let signal = if bullish > bearish {
        TradeDirection::Buy
    } else if bearish > bullish {
        TradeDirection::Sell
    } else {
        TradeDirection::Neutral
    };

    (signal, strength)
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
    fn test_uptrend_votes_buy() {
        // Sustained climb: histogram > 0, price > EMA9; RSI is high so it
        // votes bearish, leaving a 2:1 bullish majority.
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 2.0).collect();
        let analysis = analyze_timeframe(&candles_from_closes(&closes), "5m");

        assert_eq!(analysis.signal, TradeDirection::Buy);
        assert_eq!(analysis.strength, 67);
        assert_eq!(analysis.macd, MacdTone::Bullish);
    }

    #[test]
    fn test_downtrend_votes_sell() {
        let closes: Vec<f64> = (0..60).map(|i| 400.0 - i as f64 * 2.0).collect();
        let analysis = analyze_timeframe(&candles_from_closes(&closes), "15m");

        assert_eq!(analysis.signal, TradeDirection::Sell);
        assert_eq!(analysis.strength, 67);
        assert_eq!(analysis.macd, MacdTone::Bearish);
    }

    #[test]
    fn test_flat_series_is_neutral_with_strength_50() {
        // Flat closes: RSI defaults to 50 (abstains), histogram is 0,
        // price equals EMA9. No votes at all.
        let analysis = analyze_timeframe(&candles_from_closes(&[100.0; 60]), "1h");

        assert_eq!(analysis.signal, TradeDirection::Neutral);
        assert_eq!(analysis.strength, 50);
    }

    #[test]
    fn test_strength_bounds() {
        for n in [1usize, 10, 40, 80] {
            let closes: Vec<f64> = (0..n).map(|i| 100.0 + (i as f64 * 0.7).sin() * 4.0).collect();
            let analysis = analyze_timeframe(&candles_from_closes(&closes), "30m");
            assert!(analysis.strength <= 100);
        }
    }

    #[test]
    fn test_oversold_momentum_alignment_is_unanimous_buy() {
        // RSI 25 (<40), histogram 0.5 (>0), price above EMA9: three
        // bullish votes, none bearish.
        let (signal, strength) = tally_votes(25.0, 0.5, 101.0, 100.0);
        assert_eq!(signal, TradeDirection::Buy);
        assert_eq!(strength, 100);
    }

    #[test]
    fn test_rsi_midband_abstains() {
        let (signal, strength) = tally_votes(50.0, -0.2, 99.0, 100.0);
        assert_eq!(signal, TradeDirection::Sell);
        assert_eq!(strength, 100);

        let (signal, _) = tally_votes(40.0, 0.0, 100.0, 100.0);
        assert_eq!(signal, TradeDirection::Neutral);
    }

    #[test]
    fn test_split_votes_are_neutral() {
        // RSI bullish, EMA bearish, histogram abstains.
        let (signal, strength) = tally_votes(35.0, 0.0, 99.0, 100.0);
        assert_eq!(signal, TradeDirection::Neutral);
        assert_eq!(strength, 50);
    }

    #[test]
    fn test_timeframe_label_is_passthrough() {
        let analysis = analyze_timeframe(&candles_from_closes(&[100.0; 5]), "1m");
        assert_eq!(analysis.timeframe, "1m");
    }
}
