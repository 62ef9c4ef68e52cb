use crate::error::QaError;
use crate::providers::traits::CompletionProvider;
use std::sync::Arc;

/// Thin batching wrapper over the provider's embedding endpoint. Chunks are
/// embedded one call at a time; a single failure aborts the batch.
pub struct EmbeddingGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl EmbeddingGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, QaError> {
        self.provider.embed(text).await
    }

    pub async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, QaError> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.provider.embed(text).await?);
        }
        Ok(embeddings)
    }
}
