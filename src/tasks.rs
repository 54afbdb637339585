//! Background orchestration loops.
//!
//! Two independent timers drive the dashboard: a short price-refresh
//! cycle and a long signal-generation cycle. They are not mutually
//! exclusive; an in-flight advisor call never blocks price updates.

use crate::analysis::{indicator_batch, summarize_movement};
use crate::signal::{normalize, ProposalResponse};
use crate::types::{IndicatorsUpdateData, Market, PriceUpdateData, ServerMessage};
use crate::AppState;
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// Policy deciding which market a signal-generation tick works on.
pub enum MarketSelector {
    /// Uniform random pick per tick.
    Random,
    /// Strict alternation between the markets.
    RoundRobin(AtomicUsize),
}

impl MarketSelector {
    pub fn round_robin() -> Self {
        MarketSelector::RoundRobin(AtomicUsize::new(0))
    }

    pub fn pick(&self) -> Market {
        match self {
            MarketSelector::Random => {
                let idx = rand::thread_rng().gen_range(0..Market::ALL.len());
                Market::ALL[idx]
            }
            MarketSelector::RoundRobin(counter) => {
                let idx = counter.fetch_add(1, Ordering::Relaxed);
                Market::ALL[idx % Market::ALL.len()]
            }
        }
    }
}

/// Spawn the price-refresh loop: fetch both markets and broadcast a
/// combined update on every tick.
pub fn spawn_price_refresh(state: AppState) {
    tokio::spawn(async move {
        let period = tokio::time::Duration::from_secs(state.config.price_refresh_secs);
        let mut interval = tokio::time::interval(period);

        loop {
            interval.tick().await;

            let (xauusd, btcusd) = tokio::join!(
                state.market_data.price(Market::XauUsd),
                state.market_data.price(Market::BtcUsd),
            );

            state.hub.broadcast(&ServerMessage::PriceUpdate {
                data: PriceUpdateData {
                    xauusd: Some(xauusd),
                    btcusd: Some(btcusd),
                },
            });
        }
    });
}

/// Spawn the signal-generation loop: each tick picks one market, runs
/// the analysis pipeline, asks the advisor for a proposal and publishes
/// the normalized result when one survives validation.
pub fn spawn_signal_generation(state: AppState, selector: MarketSelector) {
    tokio::spawn(async move {
        let period = tokio::time::Duration::from_secs(state.config.signal_interval_secs);
        let mut interval = tokio::time::interval(period);
        // The first tick of a tokio interval fires immediately; skip it
        // so startup does not burn an advisor call before any client.
        interval.tick().await;

        loop {
            interval.tick().await;
            let market = selector.pick();
            run_generation_cycle(&state, market).await;
        }
    });
}

async fn run_generation_cycle(state: &AppState, market: Market) {
    let (candles, price) = tokio::join!(
        state
            .market_data
            .candles(market, &state.config.candle_interval, state.config.candle_limit),
        state.market_data.price(market),
    );

    let indicators = indicator_batch(&candles);
    let movement = summarize_movement(&candles);

    let response = state
        .advisor
        .propose(market, price.price, &indicators, &movement)
        .await;

    let raw = match response {
        ProposalResponse::Proposal(raw) => raw,
        ProposalResponse::Absent => {
            debug!("no proposal for {} this cycle", market);
            return;
        }
        ProposalResponse::Malformed => {
            debug!("malformed proposal for {} discarded", market);
            return;
        }
    };

    let Some(signal) = normalize(&raw, market, price.price) else {
        debug!("proposal for {} rejected by normalizer", market);
        return;
    };

    info!(
        "Generated {} signal for {} (confidence {})",
        signal.direction, market, signal.confidence
    );

    state.signal_store.add(signal.clone());
    state
        .hub
        .broadcast(&ServerMessage::NewSignal { data: signal });
    state.hub.broadcast(&ServerMessage::IndicatorsUpdate {
        data: IndicatorsUpdateData { market, indicators },
    });
}
