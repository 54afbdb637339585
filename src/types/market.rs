use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two tracked markets.
///
/// XAU/USD is proxied by Binance's PAXG (tokenized gold) pair, which
/// tracks spot gold closely enough for signal purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    #[serde(rename = "XAU/USD")]
    XauUsd,
    #[serde(rename = "BTC/USD")]
    BtcUsd,
}

impl Market {
    /// All tracked markets.
    pub const ALL: [Market; 2] = [Market::XauUsd, Market::BtcUsd];

    /// The Binance trading pair backing this market.
    pub fn binance_pair(&self) -> &'static str {
        match self {
            Market::XauUsd => "PAXGUSDT",
            Market::BtcUsd => "BTCUSDT",
        }
    }

    /// Pip multiplier reflecting each market's quote convention:
    /// gold is quoted to 0.1 (10 pips per point), BTC to whole dollars.
    pub fn pip_multiplier(&self) -> f64 {
        match self {
            Market::XauUsd => 10.0,
            Market::BtcUsd => 1.0,
        }
    }

    /// URL path slug used by the REST API.
    pub fn slug(&self) -> &'static str {
        match self {
            Market::XauUsd => "xauusd",
            Market::BtcUsd => "btcusd",
        }
    }

    /// Parse a URL path slug.
    pub fn from_slug(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "xauusd" | "xau" | "gold" => Some(Market::XauUsd),
            "btcusd" | "btc" => Some(Market::BtcUsd),
            _ => None,
        }
    }

    /// Human-readable name used in advisor prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Market::XauUsd => "Gold",
            Market::BtcUsd => "Bitcoin",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Market::XauUsd => write!(f, "XAU/USD"),
            Market::BtcUsd => write!(f, "BTC/USD"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_serde_rename() {
        assert_eq!(
            serde_json::to_string(&Market::XauUsd).unwrap(),
            "\"XAU/USD\""
        );
        let back: Market = serde_json::from_str("\"BTC/USD\"").unwrap();
        assert_eq!(back, Market::BtcUsd);
    }

    #[test]
    fn test_pip_multiplier() {
        assert_eq!(Market::XauUsd.pip_multiplier(), 10.0);
        assert_eq!(Market::BtcUsd.pip_multiplier(), 1.0);
    }

    #[test]
    fn test_from_slug() {
        assert_eq!(Market::from_slug("xauusd"), Some(Market::XauUsd));
        assert_eq!(Market::from_slug("BTCUSD"), Some(Market::BtcUsd));
        assert_eq!(Market::from_slug("eurusd"), None);
    }

    #[test]
    fn test_binance_pairs() {
        assert_eq!(Market::XauUsd.binance_pair(), "PAXGUSDT");
        assert_eq!(Market::BtcUsd.binance_pair(), "BTCUSDT");
    }
}
