//! Market data and analysis endpoints.

use crate::analysis::{analyze_timeframe, indicator_batch};
use crate::error::AppError;
use crate::types::{Candle, IndicatorResult, Market, PriceData, TimeframeAnalysis};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

/// Timeframe labels shown in the multi-timeframe table. All five rows
/// are computed from the same fetched series; the labels are
/// descriptive, not separately fetched intervals.
const ANALYSIS_TIMEFRAMES: [&str; 5] = ["1m", "5m", "15m", "30m", "1h"];

#[derive(Debug, Deserialize)]
pub struct CandleQuery {
    pub interval: Option<String>,
    pub limit: Option<u32>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/price/:market", get(get_price))
        .route("/api/candles/:market", get(get_candles))
        .route("/api/indicators/:market", get(get_indicators))
        .route("/api/analysis/:market", get(get_analysis))
}

fn parse_market(slug: &str) -> Result<Market, AppError> {
    Market::from_slug(slug).ok_or_else(|| AppError::BadRequest(format!("Invalid market: {}", slug)))
}

async fn get_price(
    State(state): State<AppState>,
    Path(market): Path<String>,
) -> Result<Json<PriceData>, AppError> {
    let market = parse_market(&market)?;
    Ok(Json(state.market_data.price(market).await))
}

async fn get_candles(
    State(state): State<AppState>,
    Path(market): Path<String>,
    Query(query): Query<CandleQuery>,
) -> Result<Json<Vec<Candle>>, AppError> {
    let market = parse_market(&market)?;
    let interval = query.interval.as_deref().unwrap_or("5m");
    let limit = query.limit.unwrap_or(100);
    Ok(Json(state.market_data.candles(market, interval, limit).await))
}

async fn get_indicators(
    State(state): State<AppState>,
    Path(market): Path<String>,
    Query(query): Query<CandleQuery>,
) -> Result<Json<Vec<IndicatorResult>>, AppError> {
    let market = parse_market(&market)?;
    let interval = query.interval.as_deref().unwrap_or("5m");
    let candles = state.market_data.candles(market, interval, 100).await;
    Ok(Json(indicator_batch(&candles)))
}

async fn get_analysis(
    State(state): State<AppState>,
    Path(market): Path<String>,
) -> Result<Json<Vec<TimeframeAnalysis>>, AppError> {
    let market = parse_market(&market)?;
    let candles = state.market_data.candles(market, "5m", 100).await;

    let analyses = ANALYSIS_TIMEFRAMES
        .iter()
        .map(|tf| analyze_timeframe(&candles, tf))
        .collect();

    Ok(Json(analyses))
}
