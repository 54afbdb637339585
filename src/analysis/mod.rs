//! Market analysis: indicator formulas, the labeled dashboard batch,
//! per-timeframe voting and the price-movement summary.
//!
//! Everything here is synchronous and pure; callers own the candle
//! series for the duration of a call and no state is shared between
//! invocations.

pub mod batch;
pub mod indicators;
pub mod movement;
pub mod timeframe;

pub use batch::indicator_batch;
pub use movement::{summarize_movement, PriceMovement, Trend, Volatility};
pub use timeframe::analyze_timeframe;
