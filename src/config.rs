use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// OpenAI API key; signal generation is disabled without one.
    pub openai_api_key: Option<String>,
    /// Chat model used for proposals.
    pub openai_model: String,
    /// Binance REST base URL.
    pub binance_api_url: String,
    /// Price broadcast cadence in seconds.
    pub price_refresh_secs: u64,
    /// Signal generation cadence in seconds.
    pub signal_interval_secs: u64,
    /// Candle interval fetched for analysis.
    pub candle_interval: String,
    /// Number of candles fetched per analysis run.
    pub candle_limit: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            binance_api_url: env::var("BINANCE_API_URL")
                .unwrap_or_else(|_| "https://api.binance.com/api/v3".to_string()),
            price_refresh_secs: env::var("PRICE_REFRESH_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            signal_interval_secs: env::var("SIGNAL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            candle_interval: env::var("CANDLE_INTERVAL").unwrap_or_else(|_| "5m".to_string()),
            candle_limit: env::var("CANDLE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
        }
    }
}
