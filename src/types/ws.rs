use super::{IndicatorResult, Market, PriceData, Signal};
use serde::{Deserialize, Serialize};

/// Incoming WebSocket message from a client.
///
/// The dashboard is push-only, so the only client message is a ping
/// keepalive; anything unparseable is ignored by the handler.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Ping,
}

/// Payload of a `price_update` broadcast. Either side may be absent if
/// that market's snapshot isn't available yet.
#[derive(Debug, Clone, Serialize)]
pub struct PriceUpdateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xauusd: Option<PriceData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub btcusd: Option<PriceData>,
}

/// Payload of an `indicators_update` broadcast.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorsUpdateData {
    pub market: Market,
    pub indicators: Vec<IndicatorResult>,
}

/// Outgoing WebSocket message to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    PriceUpdate { data: PriceUpdateData },
    NewSignal { data: Signal },
    IndicatorsUpdate { data: IndicatorsUpdateData },
    /// Sent once to a freshly connected client with the recent history.
    InitialSignals { data: Vec<Signal> },
    Pong,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IndicatorSignal;

    #[test]
    fn test_price_update_tag() {
        let msg = ServerMessage::PriceUpdate {
            data: PriceUpdateData {
                xauusd: None,
                btcusd: Some(PriceData {
                    market: Market::BtcUsd,
                    price: 43280.5,
                    change: 10.0,
                    change_percent: 0.02,
                    high_24h: 43500.0,
                    low_24h: 43000.0,
                    timestamp: 1700000000000,
                }),
            },
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"price_update\""));
        assert!(json.contains("\"btcusd\""));
        assert!(!json.contains("xauusd"));
    }

    #[test]
    fn test_indicators_update_tag() {
        let msg = ServerMessage::IndicatorsUpdate {
            data: IndicatorsUpdateData {
                market: Market::XauUsd,
                indicators: vec![IndicatorResult {
                    name: "RSI (14)".to_string(),
                    value: "28.4".to_string(),
                    signal: IndicatorSignal::Oversold,
                    change: None,
                }],
            },
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"indicators_update\""));
        assert!(json.contains("\"signal\":\"Oversold\""));
    }

    #[test]
    fn test_client_ping_parses() {
        let msg: ClientMessage = serde_json::from_str("{\"type\":\"ping\"}").unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
    }
}
