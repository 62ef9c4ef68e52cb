use crate::error::QaError;
use async_trait::async_trait;

/// A hosted LLM provider offering chat completion and text embedding. The
/// engine and the API layer only see this trait, so tests can substitute a
/// recording mock.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends a single prompt to the chat model and returns the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, QaError>;

    /// Computes the embedding vector for one text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, QaError>;

    fn model_info(&self) -> String;
}
