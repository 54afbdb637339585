pub mod binance;

pub use binance::MarketDataService;
