pub mod candle;
pub mod indicator;
pub mod market;
pub mod price;
pub mod signal;
pub mod ws;

pub use candle::*;
pub use indicator::*;
pub use market::*;
pub use price::*;
pub use signal::*;
pub use ws::*;
