use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Network error: {0}")]
    Request(String),
    #[error("Model API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Malformed model output: {0}")]
    MalformedResponse(String),
}

/// Decoding parameters forwarded to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    pub max_length: u32,
    pub num_return_sequences: u32,
    pub num_beams: u32,
}

impl GenerationParams {
    pub fn single(max_length: u32) -> Self {
        Self {
            max_length,
            num_return_sequences: 1,
            num_beams: 1,
        }
    }

    pub fn beam_search(max_length: u32, candidates: u32) -> Self {
        Self {
            max_length,
            num_return_sequences: candidates,
            num_beams: candidates,
        }
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the generated candidates in the order the model ranked them.
    async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<Vec<String>, GenerationError>;

    fn model_name(&self) -> &str;
}
