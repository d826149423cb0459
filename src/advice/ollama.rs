//! Local Ollama client
//!
//! Endpoint: POST /api/generate with `stream: false`; the whole reply
//! arrives in the `response` field.

use crate::advice::AdviceGenerator;
use crate::errors::{HealthBotError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama API endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Default model
pub const DEFAULT_OLLAMA_MODEL: &str = "qwen2.5:7b-instruct";

#[derive(Debug, Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: String,
}

/// Ollama client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create Ollama client with custom configuration
    pub fn with_config(base_url: &str, model: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(HealthBotError::HttpError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AdviceGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        let request = OllamaGenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| HealthBotError::AdviceService(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(HealthBotError::AdviceService(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: OllamaGenerateResponse = response.json().await?;
        tracing::debug!(model = %self.model, chars = body.response.len(), "Ollama reply received");
        Ok(body.response)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client =
            OllamaClient::with_config(DEFAULT_OLLAMA_URL, DEFAULT_OLLAMA_MODEL, Duration::from_secs(30))
                .unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:11434");
        assert_eq!(client.model(), "qwen2.5:7b-instruct");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client =
            OllamaClient::with_config("http://localhost:8080/", "llama3", Duration::from_secs(5))
                .unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
