use std::fmt;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use ec_core::{EarningsCallSummary, Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::prompts::{transcript_message, SYSTEM_PROMPT, TEMPERATURE};
use crate::{schema, Config};

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: &'a Value,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

/// Client for any OpenAI-compatible chat completions endpoint that supports
/// `json_schema` structured output.
pub struct OpenAiModel {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
    model_name: String,
    response_format: Value,
}

impl fmt::Debug for OpenAiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl OpenAiModel {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::Config("OpenAI API key is required (set OPENAI_API_KEY)".to_string())
            })?;
        Url::parse(&config.base_url).map_err(|e| {
            Error::Config(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model_name: config.model_name.clone(),
            response_format: schema::response_format()?,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request<'a>(&'a self, transcript: &str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model_name,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: transcript_message(transcript),
                },
            ],
            temperature: TEMPERATURE,
            response_format: &self.response_format,
        }
    }

    async fn complete(&self, transcript: &str) -> anyhow::Result<EarningsCallSummary> {
        let request = self.build_request(transcript);
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("provider returned {}: {}", status, body.trim());
        }

        let response = response
            .json::<ChatResponse>()
            .await
            .context("malformed chat completion response")?;
        parse_response(response)
    }
}

fn parse_response(response: ChatResponse) -> anyhow::Result<EarningsCallSummary> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("response contained no choices"))?;
    if let Some(refusal) = choice.message.refusal {
        bail!("model refused the request: {}", refusal);
    }
    let content = choice
        .message
        .content
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| anyhow!("response message had no content"))?;

    serde_json::from_str(&content).context("response did not match the EarningsCallSummary schema")
}

#[async_trait]
impl super::AnalysisModel for OpenAiModel {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn analyze(&self, transcript: &str) -> Result<EarningsCallSummary> {
        tracing::info!(
            model_name = %self.model_name,
            chars = transcript.len(),
            "requesting transcript analysis"
        );
        self.complete(transcript).await.map_err(|e| {
            let message = format!("{:#}", e);
            tracing::error!(error = %message, "transcript analysis failed");
            Error::Analysis(message)
        })
    }
}
