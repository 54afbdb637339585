use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical label attached to a computed indicator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorSignal {
    Bullish,
    Bearish,
    Neutral,
    Oversold,
    Overbought,
    #[serde(rename = "Bullish Cross")]
    BullishCross,
    #[serde(rename = "Bearish Cross")]
    BearishCross,
}

impl IndicatorSignal {
    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorSignal::Bullish => "Bullish",
            IndicatorSignal::Bearish => "Bearish",
            IndicatorSignal::Neutral => "Neutral",
            IndicatorSignal::Oversold => "Oversold",
            IndicatorSignal::Overbought => "Overbought",
            IndicatorSignal::BullishCross => "Bullish Cross",
            IndicatorSignal::BearishCross => "Bearish Cross",
        }
    }
}

impl fmt::Display for IndicatorSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One named indicator with its formatted value and categorical label.
///
/// Ephemeral: recomputed on every batch, no identity beyond its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorResult {
    pub name: String,
    /// Numeric value formatted at the indicator's fixed precision.
    pub value: String,
    pub signal: IndicatorSignal,
    /// Percent change since the previous batch, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
}

/// Directional call for a timeframe or a trade signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "NEUTRAL")]
    Neutral,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Buy => write!(f, "BUY"),
            TradeDirection::Sell => write!(f, "SELL"),
            TradeDirection::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Bull/bear tone of the MACD histogram, shown in the timeframe table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacdTone {
    Bullish,
    Bearish,
}

/// Aggregated directional vote for one timeframe label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeAnalysis {
    pub timeframe: String,
    pub signal: TradeDirection,
    /// Majority share of the cast votes, 0-100. 50 when no votes cast.
    pub strength: u8,
    pub rsi: f64,
    pub macd: MacdTone,
}
