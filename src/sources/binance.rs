//! Binance REST market data with synthetic fallback.
//!
//! Fetch failures never propagate: the analysis pipeline always gets a
//! price snapshot and a candle series, synthesized from the last known
//! price when the exchange is unreachable.

use crate::types::{Candle, Market, PriceData};
use dashmap::DashMap;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Binance 24hr ticker response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BinanceTicker {
    last_price: String,
    price_change: String,
    price_change_percent: String,
    high_price: String,
    low_price: String,
}

/// Market data client for the two tracked markets.
pub struct MarketDataService {
    client: Client,
    base_url: String,
    /// Last good snapshot per market, also the seed for synthetic data.
    price_cache: DashMap<Market, PriceData>,
}

impl MarketDataService {
    pub fn new(base_url: String) -> Arc<Self> {
        let client = Client::builder()
            .user_agent("Vantage/1.0")
            .build()
            .unwrap_or_else(|_| Client::new());

        Arc::new(Self {
            client,
            base_url,
            price_cache: DashMap::new(),
        })
    }

    /// Current 24h snapshot for a market. Falls back to synthetic data
    /// on any fetch or parse failure.
    pub async fn price(&self, market: Market) -> PriceData {
        match self.fetch_price(market).await {
            Ok(price) => {
                self.price_cache.insert(market, price);
                price
            }
            Err(e) => {
                warn!("{} price fetch failed, using fallback: {}", market, e);
                self.mock_price(market)
            }
        }
    }

    /// Recent candles for a market. Falls back to a synthetic series on
    /// failure so the indicator pipeline always has input.
    pub async fn candles(&self, market: Market, interval: &str, limit: u32) -> Vec<Candle> {
        match self.fetch_candles(market, interval, limit).await {
            Ok(candles) if !candles.is_empty() => candles,
            Ok(_) => {
                warn!("{} returned an empty candle series, using fallback", market);
                self.mock_candles(market)
            }
            Err(e) => {
                warn!("{} candle fetch failed, using fallback: {}", market, e);
                self.mock_candles(market)
            }
        }
    }

    /// Last cached snapshot, if any market data has been seen.
    pub fn cached_price(&self, market: Market) -> Option<PriceData> {
        self.price_cache.get(&market).map(|e| *e.value())
    }

    async fn fetch_price(&self, market: Market) -> anyhow::Result<PriceData> {
        let url = format!("{}/ticker/24hr", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("symbol", market.binance_pair())])
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Binance API error: {}", response.status());
        }

        let ticker: BinanceTicker = response.json().await?;
        debug!("{} ticker: last={}", market, ticker.last_price);

        Ok(PriceData {
            market,
            price: ticker.last_price.parse()?,
            change: ticker.price_change.parse()?,
            change_percent: ticker.price_change_percent.parse()?,
            high_24h: ticker.high_price.parse()?,
            low_24h: ticker.low_price.parse()?,
            timestamp: chrono::Utc::now().timestamp_millis(),
        })
    }

    async fn fetch_candles(
        &self,
        market: Market,
        interval: &str,
        limit: u32,
    ) -> anyhow::Result<Vec<Candle>> {
        let url = format!("{}/klines", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", market.binance_pair()),
                ("interval", interval),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Binance API error: {}", response.status());
        }

        // Klines arrive as heterogeneous arrays:
        // [openTime, open, high, low, close, volume, ...]
        let rows: Vec<Vec<serde_json::Value>> = response.json().await?;
        let candles = rows
            .iter()
            .filter_map(|row| {
                Some(Candle {
                    timestamp: row.first()?.as_i64()?,
                    open: row.get(1)?.as_str()?.parse().ok()?,
                    high: row.get(2)?.as_str()?.parse().ok()?,
                    low: row.get(3)?.as_str()?.parse().ok()?,
                    close: row.get(4)?.as_str()?.parse().ok()?,
                    volume: row.get(5)?.as_str()?.parse().ok()?,
                })
            })
            .collect();

        Ok(candles)
    }

    /// Synthetic snapshot drifting around the last known price.
    fn mock_price(&self, market: Market) -> PriceData {
        let base_price = self
            .cached_price(market)
            .map(|p| p.price)
            .unwrap_or_else(|| match market {
                Market::XauUsd => 2045.50,
                Market::BtcUsd => 43280.50,
            });

        let span = match market {
            Market::XauUsd => 5.0,
            Market::BtcUsd => 200.0,
        };

        let mut rng = rand::thread_rng();
        let variance = (rng.gen::<f64>() - 0.5) * span;
        let price = base_price + variance;

        PriceData {
            market,
            price,
            change: variance,
            change_percent: variance / base_price * 100.0,
            high_24h: price + rng.gen::<f64>() * span * 2.0,
            low_24h: price - rng.gen::<f64>() * span * 2.0,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Synthetic random-walk candle series, 5-minute spacing.
    fn mock_candles(&self, market: Market) -> Vec<Candle> {
        let (base_price, variance) = match market {
            Market::XauUsd => (2045.0, 50.0),
            Market::BtcUsd => (43250.0, 5000.0),
        };

        let mut rng = rand::thread_rng();
        let now = chrono::Utc::now().timestamp_millis();
        let mut price = self.cached_price(market).map(|p| p.price).unwrap_or(base_price);
        let mut candles = Vec::with_capacity(101);

        for i in (0..=100).rev() {
            let open = price;
            let close = price + (rng.gen::<f64>() - 0.5) * variance * 0.02;
            let high = open.max(close) + rng.gen::<f64>() * variance * 0.01;
            let low = open.min(close) - rng.gen::<f64>() * variance * 0.01;

            candles.push(Candle {
                timestamp: now - i * 5 * 60 * 1000,
                open,
                high,
                low,
                close,
                volume: rng.gen::<f64>() * 1000.0,
            });

            price = close;
        }

        candles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_deserialization() {
        let json = r#"{
            "symbol": "PAXGUSDT",
            "lastPrice": "2045.50",
            "priceChange": "12.30",
            "priceChangePercent": "0.60",
            "highPrice": "2050.00",
            "lowPrice": "2030.00"
        }"#;

        let ticker: BinanceTicker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.last_price, "2045.50");
        assert_eq!(ticker.price_change_percent, "0.60");
    }

    #[test]
    fn test_mock_candles_are_time_ordered_and_coherent() {
        let service = MarketDataService::new("http://unused".to_string());
        let candles = service.mock_candles(Market::XauUsd);

        assert_eq!(candles.len(), 101);
        for pair in candles.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
            // The walk chains: next open equals previous close.
            assert_eq!(pair[1].open, pair[0].close);
        }
        for candle in &candles {
            assert!(candle.high >= candle.open.max(candle.close));
            assert!(candle.low <= candle.open.min(candle.close));
        }
    }

    #[test]
    fn test_mock_price_seeds_from_cache() {
        let service = MarketDataService::new("http://unused".to_string());
        service.price_cache.insert(
            Market::BtcUsd,
            PriceData {
                market: Market::BtcUsd,
                price: 50000.0,
                change: 0.0,
                change_percent: 0.0,
                high_24h: 50000.0,
                low_24h: 50000.0,
                timestamp: 0,
            },
        );

        let mock = service.mock_price(Market::BtcUsd);
        assert!((mock.price - 50000.0).abs() <= 100.0);
    }
}
