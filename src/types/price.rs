use super::Market;
use serde::{Deserialize, Serialize};

/// 24-hour price snapshot for one market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    pub market: Market,
    pub price: f64,
    /// Absolute price change over the last 24 hours.
    pub change: f64,
    pub change_percent: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    /// Unix timestamp in milliseconds when this snapshot was taken.
    pub timestamp: i64,
}
