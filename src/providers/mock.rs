use crate::error::QaError;
use crate::providers::traits::CompletionProvider;
use async_trait::async_trait;
use std::sync::Mutex;

/// Recording stand-in for the OpenAI provider. Embeddings are deterministic
/// functions of the text, so identical texts always land on identical
/// vectors and retrieval stays reproducible.
pub struct MockProvider {
    pub answer: String,
    pub embed_error: Option<String>,
    pub completion_prompts: Mutex<Vec<String>>,
    pub embedded_texts: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            embed_error: None,
            completion_prompts: Mutex::new(Vec::new()),
            embedded_texts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_embeddings(message: &str) -> Self {
        Self {
            answer: String::new(),
            embed_error: Some(message.to_string()),
            completion_prompts: Mutex::new(Vec::new()),
            embedded_texts: Mutex::new(Vec::new()),
        }
    }

    pub fn completion_prompts(&self) -> Vec<String> {
        self.completion_prompts.lock().unwrap().clone()
    }

    pub fn embedded_texts(&self) -> Vec<String> {
        self.embedded_texts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.completion_prompts.lock().unwrap().len() + self.embedded_texts.lock().unwrap().len()
    }
}

/// Hashes the text into a small fixed-dimension vector. Equal texts map to
/// equal vectors; different texts almost always differ.
pub fn embedding_of(text: &str) -> Vec<f32> {
    let mut dims = [0.0f32; 8];
    for (i, byte) in text.bytes().enumerate() {
        dims[i % 8] += byte as f32;
    }
    dims[7] += text.len() as f32;
    let norm = dims.iter().map(|d| d * d).sum::<f32>().sqrt().max(1.0);
    dims.iter().map(|d| d / norm).collect()
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, prompt: &str) -> Result<String, QaError> {
        self.completion_prompts
            .lock()
            .unwrap()
            .push(prompt.to_string());
        Ok(self.answer.clone())
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, QaError> {
        if let Some(message) = &self.embed_error {
            return Err(QaError::Provider(message.clone()));
        }
        self.embedded_texts.lock().unwrap().push(text.to_string());
        Ok(embedding_of(text))
    }

    fn model_info(&self) -> String {
        "mock".to_string()
    }
}
