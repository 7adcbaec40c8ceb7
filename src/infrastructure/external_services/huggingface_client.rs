use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{GenerationError, GenerationParams, TextGenerator};
use crate::config::GenerationConfig;

#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: InferenceParameters,
    pub options: InferenceOptions,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct InferenceParameters {
    pub max_length: u32,
    pub num_return_sequences: u32,
    pub num_beams: u32,
}

#[derive(Debug, Serialize)]
pub struct InferenceOptions {
    pub wait_for_model: bool,
    pub use_cache: bool,
}

#[derive(Debug, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

#[derive(Debug, Deserialize)]
struct InferenceErrorBody {
    error: String,
}

impl From<GenerationParams> for InferenceParameters {
    fn from(params: GenerationParams) -> Self {
        Self {
            max_length: params.max_length,
            num_return_sequences: params.num_return_sequences,
            num_beams: params.num_beams,
        }
    }
}

/// Text-to-text generation through the hosted Hugging Face inference API.
#[derive(Debug, Clone)]
pub struct HuggingFaceTextGenerator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl HuggingFaceTextGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/models/{}", config.api_url, config.model),
            model: config.model,
            api_key: config.api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<Vec<String>, GenerationError> {
        let request = InferenceRequest {
            inputs: prompt,
            parameters: params.into(),
            options: InferenceOptions {
                wait_for_model: true,
                use_cache: false,
            },
        };

        tracing::debug!(
            "Requesting {} candidates from {}",
            params.num_return_sequences,
            self.model
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Request(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_generated(&body)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

fn parse_generated(body: &str) -> Result<Vec<String>, GenerationError> {
    let generated: Vec<GeneratedText> = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

    Ok(generated.into_iter().map(|g| g.generated_text).collect())
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<InferenceErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
