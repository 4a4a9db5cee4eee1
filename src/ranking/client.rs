// client.rs
use crate::config::RankingConfig;
use crate::ranking::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::ranking::{RankingError, RankingRequest};
use reqwest::blocking::Client;

/// The one external, failure-prone call: turn a ranking request into the
/// model's raw completion text.
pub trait Ranker: Send + Sync {
    fn complete(&self, request: &RankingRequest) -> Result<String, RankingError>;
}

/// OpenAI-compatible chat/completions client.
pub struct OpenAiRanker {
    client: Client,
    cfg: RankingConfig,
}

impl OpenAiRanker {
    pub fn new(cfg: RankingConfig) -> Result<Self, RankingError> {
        let mut builder = Client::builder();
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| RankingError::Network(e.to_string()))?;

        Ok(Self { client, cfg })
    }

    fn api_key(&self) -> Result<&str, RankingError> {
        self.cfg
            .api_key
            .as_deref()
            .ok_or_else(|| RankingError::Config("OPENAI_API_KEY environment variable not set".into()))
    }
}

impl Ranker for OpenAiRanker {
    fn complete(&self, request: &RankingRequest) -> Result<String, RankingError> {
        let api_key = self.api_key()?;

        let body = ChatRequest {
            model: &self.cfg.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            max_tokens: request.max_tokens,
        };

        let resp = self
            .client
            .post(&self.cfg.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| RankingError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| RankingError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(RankingError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        extract_content(&text)
    }
}

fn extract_content(body: &str) -> Result<String, RankingError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| RankingError::MalformedResponse(e.to_string()))?;

    parsed
        .first_content()
        .ok_or_else(|| RankingError::MalformedResponse(format!("no message content in {body}")))
}
