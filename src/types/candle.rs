use serde::{Deserialize, Serialize};

/// A single OHLCV bar.
///
/// Sequences handed to the analysis functions are ordered by
/// non-decreasing timestamp; the upstream exchange does not guarantee
/// `high >= max(open, close)` so nothing here assumes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}
