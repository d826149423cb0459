//! Advice generation via an external generative-text service
//!
//! The service is asked for two labelled sections; any failure along the
//! way is replaced by fixed fallback text so a symptom report always
//! completes.

pub mod gemini;
pub mod ollama;
pub mod parser;

use crate::config::{AdviceConfig, AdviceProvider};
use crate::errors::{HealthBotError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use gemini::GeminiClient;
pub use ollama::OllamaClient;
pub use parser::parse_advice;

/// Heading of the remedy section
pub const REMEDY_LABEL: &str = "💊 Remedy:";

/// Heading of the doctor section
pub const DOCTOR_LABEL: &str = "👨‍⚕️ When to see doctor:";

pub const REMEDY_PARSE_FALLBACK: &str = "Unable to parse remedy from AI response";
pub const DOCTOR_PARSE_FALLBACK: &str =
    "If symptoms persist or worsen, please consult a healthcare provider";
pub const REMEDY_ERROR_FALLBACK: &str = "Error getting AI response. Please try again.";
pub const DOCTOR_ERROR_FALLBACK: &str =
    "If symptoms persist, please consult a healthcare provider.";

/// Advice shown to the user and persisted with the health log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub remedy: String,
    pub doctor_advice: String,
}

impl Advice {
    /// Advice used when the service could not be reached
    pub fn service_failure() -> Self {
        Self {
            remedy: REMEDY_ERROR_FALLBACK.to_string(),
            doctor_advice: DOCTOR_ERROR_FALLBACK.to_string(),
        }
    }
}

/// A generative-text backend
#[async_trait]
pub trait AdviceGenerator: Send + Sync {
    /// Return the raw reply text for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Backend name for logs and banners
    fn name(&self) -> &str;
}

/// Advice plus the service error it replaced, if any
#[derive(Debug)]
pub struct AdviceOutcome {
    pub advice: Advice,
    pub failure: Option<HealthBotError>,
}

/// Prompt asking for the two labelled sections
pub fn build_prompt(symptoms: &str, keywords: &[String]) -> String {
    format!(
        "Given these symptoms from a college student: \"{symptoms}\".\n\
         Detected keywords: {keywords}.\n\
         Please provide health advice in exactly this format:\n\
         {remedy} [provide a clear, concise home remedy]\n\
         {doctor} [explain when medical attention is needed]\n\n\
         Make sure to include EXACTLY these two sections with the exact headings '{remedy}' and '{doctor}'",
        symptoms = symptoms,
        keywords = keywords.join(", "),
        remedy = REMEDY_LABEL,
        doctor = DOCTOR_LABEL,
    )
}

/// Ask the generator for advice, substituting fallbacks on failure
pub async fn request_advice(
    generator: &dyn AdviceGenerator,
    symptoms: &str,
    keywords: &[String],
) -> AdviceOutcome {
    let prompt = build_prompt(symptoms, keywords);

    match generator.generate(&prompt).await {
        Ok(text) => AdviceOutcome {
            advice: parse_advice(&text),
            failure: None,
        },
        Err(e) => {
            tracing::error!(backend = generator.name(), error = %e, "Advice request failed");
            AdviceOutcome {
                advice: Advice::service_failure(),
                failure: Some(e),
            }
        }
    }
}

/// Build the configured backend
pub fn build_generator(
    config: &AdviceConfig,
    api_key: Option<String>,
) -> Result<Box<dyn AdviceGenerator>> {
    match config.provider {
        AdviceProvider::Gemini => {
            if api_key.is_none() {
                tracing::warn!("GEMINI_API_KEY is not set; advice requests will fall back");
            }
            Ok(Box::new(GeminiClient::new(
                &config.gemini_url,
                config.model(),
                api_key,
                config.timeout(),
            )?))
        }
        AdviceProvider::Ollama => Ok(Box::new(OllamaClient::with_config(
            &config.ollama_url(),
            config.model(),
            config.timeout(),
        )?)),
    }
}
