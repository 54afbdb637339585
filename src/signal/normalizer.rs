//! Normalization of external trade proposals into strict signals.

use crate::types::{Market, Signal, SignalStatus, TPLevel, TradeDirection};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Minimum proposal confidence below which no signal is ever built.
pub const CONFIDENCE_FLOOR: f64 = 65.0;

/// Raw trade proposal as emitted by the advisor, before validation.
///
/// Field presence is all serde enforces; the numeric relationships are
/// checked by [`normalize`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProposal {
    /// "BUY" or "SELL"; anything else fails normalization, not parsing.
    #[serde(default)]
    pub direction: Option<String>,
    pub entry: f64,
    pub stop_loss: f64,
    pub tp1: f64,
    pub tp2: f64,
    pub tp3: f64,
    pub confidence: f64,
    #[serde(default)]
    pub reasoning: String,
}

/// Outcome of one advisor call, resolved at the boundary before any
/// typed field is touched.
#[derive(Debug, Clone)]
pub enum ProposalResponse {
    Proposal(RawProposal),
    /// The advisor explicitly declined or returned nothing.
    Absent,
    /// The response existed but did not match the expected shape.
    Malformed,
}

impl ProposalResponse {
    /// Lenient parse of an advisor completion body. `null` is a valid
    /// "no signal" answer; anything unparseable is malformed.
    pub fn from_completion(content: &str) -> Self {
        let trimmed = content.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return ProposalResponse::Absent;
        }
        match serde_json::from_str::<RawProposal>(trimmed) {
            Ok(raw) => ProposalResponse::Proposal(raw),
            Err(_) => ProposalResponse::Malformed,
        }
    }
}

/// Validate a raw proposal and build the signal record.
///
/// Returns `None` (a defined empty outcome, never an error) when the
/// direction is unusable, the confidence is below the floor, or the
/// stop distance is zero. The zero-stop rejection guards the
/// risk:reward division; a proposal whose entry equals its stop has no
/// risk unit to measure reward against.
pub fn normalize(raw: &RawProposal, market: Market, current_price: f64) -> Option<Signal> {
    let direction = match raw.direction.as_deref() {
        Some("BUY") => TradeDirection::Buy,
        Some("SELL") => TradeDirection::Sell,
        _ => return None,
    };

    if raw.confidence < CONFIDENCE_FLOOR {
        return None;
    }

    let sl_distance = (raw.entry - raw.stop_loss).abs();
    if sl_distance == 0.0 {
        return None;
    }

    let pip_multiplier = market.pip_multiplier();
    let take_profits = [raw.tp1, raw.tp2, raw.tp3]
        .iter()
        .enumerate()
        .map(|(i, &price)| {
            let distance = (price - raw.entry).abs();
            TPLevel {
                level: i as u8 + 1,
                price,
                pips: (distance * pip_multiplier).round() as u32,
                rr: distance / sl_distance,
            }
        })
        .collect();

    Some(Signal {
        id: Uuid::new_v4(),
        direction,
        market,
        entry: raw.entry,
        stop_loss: raw.stop_loss,
        take_profits,
        confidence: raw.confidence.round().clamp(0.0, 100.0) as u8,
        current_price,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        reasoning: raw.reasoning.clone(),
        status: SignalStatus::Active,
    })
}
