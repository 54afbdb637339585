//! HTTP API tests driven through the router without a live server.
//!
//! The market-data base URL points at a closed local port, so every
//! fetch fails fast and the synthetic fallback keeps the endpoints
//! deterministic and offline.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use vantage::config::Config;
use vantage::signal::{normalize, RawProposal};
use vantage::types::Market;
use vantage::{api, AppState};

fn test_state() -> AppState {
    AppState::new(Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        openai_api_key: None,
        openai_model: "gpt-4o-mini".to_string(),
        binance_api_url: "http://127.0.0.1:9".to_string(),
        price_refresh_secs: 3,
        signal_interval_secs: 60,
        candle_interval: "5m".to_string(),
        candle_limit: 100,
    })
}

fn app() -> Router {
    api::router().with_state(test_state())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_reports_ok() {
    let (status, body) = get_json(app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
    assert_eq!(body["signals"], 0);
}

#[tokio::test]
async fn test_health_counts_stored_signals() {
    let raw = RawProposal {
        direction: Some("BUY".to_string()),
        entry: 2045.5,
        stop_loss: 2043.0,
        tp1: 2048.0,
        tp2: 2050.5,
        tp3: 2053.0,
        confidence: 78.0,
        reasoning: String::new(),
    };

    let state = test_state();
    let signal = normalize(&raw, Market::XauUsd, 2045.6).unwrap();
    state.signal_store.add(signal);

    let app = api::router().with_state(state);
    let (status, body) = get_json(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["signals"], 1);
}

#[tokio::test]
async fn test_price_falls_back_to_synthetic_data() {
    let (status, body) = get_json(app(), "/api/price/xauusd").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["market"], "XAU/USD");
    assert!(body["price"].is_number());
    assert!(body["high24h"].is_number());
}

#[tokio::test]
async fn test_unknown_market_is_bad_request() {
    let (status, body) = get_json(app(), "/api/price/eurusd").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("eurusd"));
}

#[tokio::test]
async fn test_indicators_endpoint_returns_full_batch() {
    let (status, body) = get_json(app(), "/api/indicators/btcusd").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["name"], "RSI (14)");
}

#[tokio::test]
async fn test_analysis_endpoint_returns_five_timeframes() {
    let (status, body) = get_json(app(), "/api/analysis/xauusd").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    let timeframes: Vec<&str> = rows
        .iter()
        .map(|r| r["timeframe"].as_str().unwrap())
        .collect();
    assert_eq!(timeframes, ["1m", "5m", "15m", "30m", "1h"]);
    for row in rows {
        let strength = row["strength"].as_u64().unwrap();
        assert!(strength <= 100);
    }
}

#[tokio::test]
async fn test_signals_empty_until_generated() {
    let (status, body) = get_json(app(), "/api/signals").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_unknown_signal_id_is_not_found() {
    let (status, _) = get_json(app(), "/api/signals/not-a-uuid").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
        get_json(app(), "/api/signals/00000000-0000-0000-0000-000000000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
