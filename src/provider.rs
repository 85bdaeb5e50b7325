//! Gemini completion client
//!
//! Thin adapter over the Gemini `generateContent` REST endpoint. Sends one
//! prompt with fixed sampling parameters and returns the raw text
//! completion; every transport, auth, or quota failure surfaces as a
//! [`ProviderError`]. No retry loop lives here.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::ProviderConfig;
use crate::error::ProviderError;

/// Sampling temperature for every generation request. Itineraries benefit
/// from variety across repeated calls, so determinism is not the goal.
const TEMPERATURE: f64 = 0.7;
/// Nucleus sampling threshold for every generation request
const TOP_P: f64 = 0.95;

/// Sends a prompt to an external completion provider and returns the raw
/// text completion.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Completion client for the Gemini `generateContent` API
pub struct GeminiClient {
    /// HTTP client
    client: Client,
    /// Provider configuration, resolved once at startup
    config: ProviderConfig,
}

impl GeminiClient {
    /// Create a new Gemini client from validated provider configuration
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("TripCraft/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = wire::GenerateContentRequest::from_prompt(prompt, TEMPERATURE, TOP_P);

        debug!("Sending generation request to {}", self.endpoint());
        let start = Instant::now();

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.config.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        match status.as_u16() {
            401 | 403 => {
                warn!("Provider rejected credentials (HTTP {status})");
                return Err(ProviderError::Auth {
                    status: status.as_u16(),
                });
            }
            429 => {
                warn!("Provider rate limit exceeded (HTTP 429)");
                return Err(ProviderError::RateLimited);
            }
            _ if !status.is_success() => {
                let message = response.text().await.unwrap_or_default();
                warn!("Provider request failed (HTTP {status}): {message}");
                return Err(ProviderError::Status {
                    status: status.as_u16(),
                    message,
                });
            }
            _ => {}
        }

        let completion: wire::GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|err| ProviderError::InvalidResponse {
                    detail: err.to_string(),
                })?;

        let text = completion.text().ok_or(ProviderError::EmptyCompletion)?;

        info!(
            "Received completion ({} chars) in {:.3}s",
            text.len(),
            start.elapsed().as_secs_f64()
        );

        Ok(text)
    }
}

/// Gemini `generateContent` wire structures
mod wire {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GenerateContentRequest {
        pub contents: Vec<Content>,
        pub generation_config: GenerationConfig,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Content {
        pub parts: Vec<Part>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Part {
        pub text: String,
    }

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GenerationConfig {
        pub temperature: f64,
        pub top_p: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct GenerateContentResponse {
        #[serde(default)]
        pub candidates: Vec<Candidate>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Candidate {
        pub content: Option<Content>,
    }

    impl GenerateContentRequest {
        pub fn from_prompt(prompt: &str, temperature: f64, top_p: f64) -> Self {
            Self {
                contents: vec![Content {
                    parts: vec![Part {
                        text: prompt.to_string(),
                    }],
                }],
                generation_config: GenerationConfig { temperature, top_p },
            }
        }
    }

    impl GenerateContentResponse {
        /// Concatenated text of the first candidate's parts, if any
        pub fn text(&self) -> Option<String> {
            let content = self.candidates.first()?.content.as_ref()?;
            if content.parts.is_empty() {
                return None;
            }
            Some(
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect(),
            )
        }
    }
}
