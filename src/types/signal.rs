use super::{Market, TradeDirection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a trade signal.
///
/// The normalizer only ever emits `Active`. The remaining states are
/// written by whatever tracks the position afterwards; `Pending` is a
/// display placeholder used before any signal exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalStatus {
    Pending,
    Active,
    #[serde(rename = "Hit TP1")]
    HitTp1,
    #[serde(rename = "Hit TP2")]
    HitTp2,
    #[serde(rename = "Hit TP3")]
    HitTp3,
    #[serde(rename = "Stopped Out")]
    StoppedOut,
}

/// One of the three take-profit levels attached to a signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TPLevel {
    /// 1, 2 or 3, in ascending distance from entry.
    pub level: u8,
    pub price: f64,
    /// Pip distance from entry, rounded to the nearest whole pip.
    pub pips: u32,
    /// Reward distance divided by the stop distance.
    pub rr: f64,
}

/// A fully normalized trade signal.
///
/// Constructed exactly once by the normalizer; after that only `status`
/// is ever mutated, and never by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: Uuid,
    pub direction: TradeDirection,
    pub market: Market,
    pub entry: f64,
    pub stop_loss: f64,
    /// Always exactly three levels, ordered 1..3.
    pub take_profits: Vec<TPLevel>,
    /// 0-100; anything below 65 is rejected before construction.
    pub confidence: u8,
    /// Price snapshot at generation time. Not updated afterwards.
    pub current_price: f64,
    /// RFC 3339 creation time. Immutable.
    pub timestamp: String,
    pub reasoning: String,
    pub status: SignalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&SignalStatus::HitTp2).unwrap(),
            "\"Hit TP2\""
        );
        assert_eq!(
            serde_json::to_string(&SignalStatus::StoppedOut).unwrap(),
            "\"Stopped Out\""
        );
        let back: SignalStatus = serde_json::from_str("\"Active\"").unwrap();
        assert_eq!(back, SignalStatus::Active);
    }

    #[test]
    fn test_signal_round_trip() {
        let signal = Signal {
            id: Uuid::new_v4(),
            direction: TradeDirection::Buy,
            market: Market::XauUsd,
            entry: 2045.5,
            stop_loss: 2043.0,
            take_profits: vec![
                TPLevel { level: 1, price: 2048.0, pips: 25, rr: 1.0 },
                TPLevel { level: 2, price: 2050.5, pips: 50, rr: 2.0 },
                TPLevel { level: 3, price: 2053.0, pips: 75, rr: 3.0 },
            ],
            confidence: 78,
            current_price: 2045.6,
            timestamp: "2024-01-15T12:00:00Z".to_string(),
            reasoning: "Momentum aligned across timeframes".to_string(),
            status: SignalStatus::Active,
        };

        let json = serde_json::to_string(&signal).unwrap();
        assert!(json.contains("\"stopLoss\":2043.0"));
        assert!(json.contains("\"takeProfits\""));
        assert!(json.contains("\"status\":\"Active\""));

        let back: Signal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, signal);
    }
}
