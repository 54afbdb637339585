//! Proposal generator backed by the OpenAI chat-completions API.
//!
//! The advisor is a boundary collaborator: every failure mode (network,
//! HTTP status, empty choices, unparseable content) collapses into the
//! [`ProposalResponse`] variants. It never raises toward the pipeline.

pub mod prompt;

use crate::analysis::PriceMovement;
use crate::signal::ProposalResponse;
use crate::types::{IndicatorResult, Market};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenAI-backed trade-proposal client.
pub struct AdvisorClient {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl AdvisorClient {
    pub fn new(api_key: Option<String>, model: String) -> Arc<Self> {
        Arc::new(Self {
            client: Client::new(),
            api_key,
            model,
        })
    }

    /// Whether proposal generation is enabled at all.
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask the model for a trade proposal given the computed context.
    pub async fn propose(
        &self,
        market: Market,
        current_price: f64,
        indicators: &[IndicatorResult],
        movement: &PriceMovement,
    ) -> ProposalResponse {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("advisor disabled (no API key), skipping {}", market);
            return ProposalResponse::Absent;
        };

        let user_prompt = prompt::build_prompt(market, current_price, indicators, movement);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt::SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: 0.7,
            max_tokens: 500,
        };

        let response = match self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("advisor request failed for {}: {}", market, e);
                return ProposalResponse::Absent;
            }
        };

        if !response.status().is_success() {
            warn!("advisor returned {} for {}", response.status(), market);
            return ProposalResponse::Absent;
        }

        let body: ChatResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                warn!("advisor response decode failed for {}: {}", market, e);
                return ProposalResponse::Malformed;
            }
        };

        let Some(content) = body.choices.first().and_then(|c| c.message.content.as_deref())
        else {
            return ProposalResponse::Absent;
        };

        ProposalResponse::from_completion(content)
    }
}
