//! AI-assisted trading signal server for gold and Bitcoin.
//!
//! Polls Binance for prices and candles, computes a fixed technical
//! indicator batch, asks an OpenAI model for trade proposals, validates
//! and normalizes them, and pushes the results to WebSocket clients.

pub mod advisor;
pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod signal;
pub mod sources;
pub mod tasks;
pub mod types;
pub mod websocket;

use std::sync::Arc;

use advisor::AdvisorClient;
use config::Config;
use signal::SignalStore;
use sources::MarketDataService;
use websocket::ClientHub;

pub use error::{AppError, Result};

/// Shared handles threaded through every route and background task.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub market_data: Arc<MarketDataService>,
    pub advisor: Arc<AdvisorClient>,
    pub signal_store: Arc<SignalStore>,
    pub hub: Arc<ClientHub>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let market_data = MarketDataService::new(config.binance_api_url.clone());
        let advisor = AdvisorClient::new(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
        );

        AppState {
            config,
            market_data,
            advisor,
            signal_store: SignalStore::new(),
            hub: ClientHub::new(),
        }
    }
}
