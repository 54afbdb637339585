//! Prompt construction for the proposal model.

use crate::analysis::PriceMovement;
use crate::types::{IndicatorResult, Market};

/// System message sent with every proposal request.
pub const SYSTEM_PROMPT: &str =
    "You are an expert trading signal generator. Respond only with valid JSON.";

/// Build the proposal prompt from the computed market context.
pub fn build_prompt(
    market: Market,
    current_price: f64,
    indicators: &[IndicatorResult],
    movement: &PriceMovement,
) -> String {
    let indicator_lines = indicators
        .iter()
        .map(|ind| format!("- {}: {} ({})", ind.name, ind.value, ind.signal))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert trading signal generator for {market}. Analyze the following market data and generate a trading signal with precise Entry, Stop Loss, and Take Profit levels.\n\n\
        Current Price: {price:.2}\n\n\
        Technical Indicators:\n{indicator_lines}\n\n\
        Recent Price Movement:\n\
        - Trend: {trend}\n\
        - Volatility: {volatility}\n\
        - Support Level: {support:.2}\n\
        - Resistance Level: {resistance:.2}\n\n\
        Based on this analysis, generate a trading signal in the following JSON format:\n\
        {{\n\
          \"direction\": \"BUY\" or \"SELL\",\n\
          \"entry\": number (exact entry price),\n\
          \"stopLoss\": number (exact SL price),\n\
          \"tp1\": number (first take profit),\n\
          \"tp2\": number (second take profit),\n\
          \"tp3\": number (third take profit),\n\
          \"confidence\": number (0-100),\n\
          \"reasoning\": \"Brief explanation of the signal (2-3 sentences)\"\n\
        }}\n\n\
        Guidelines:\n\
        - For {asset}, use appropriate pip/point distances\n\
        - SL should be 20-40 pips away from entry for scalping\n\
        - TP1: 1:1 risk-reward, TP2: 1:2, TP3: 1:3+\n\
        - Only generate a signal if confidence is above 65%\n\
        - If no clear signal, return null\n\n\
        Respond with only the JSON object, no additional text.",
        market = market,
        price = current_price,
        indicator_lines = indicator_lines,
        trend = movement.trend,
        volatility = movement.volatility,
        support = movement.support,
        resistance = movement.resistance,
        asset = market.display_name(),
    )
}
