//! Pure technical-indicator formulas over candle series.
//!
//! Every function is deterministic, takes the series as an explicit
//! argument, and reports a documented neutral default instead of
//! failing when the series is shorter than its minimum lookback.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod stochastic;

pub use bollinger::{bollinger, BollingerOutput};
pub use ema::ema;
pub use macd::{macd, MacdOutput};
pub use rsi::rsi;
pub use stochastic::{stochastic, StochasticOutput};
