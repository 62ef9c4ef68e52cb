use crate::error::QaError;
use crate::providers::traits::CompletionProvider;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
        CreateChatCompletionRequestArgs, CreateEmbeddingRequestArgs, EmbeddingInput, Role,
    },
    Client,
};
use async_trait::async_trait;
use std::env;

const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

#[derive(Clone)]
pub struct OpenAIProvider {
    client: Client<OpenAIConfig>,
    system_message: String,
    chat_model: String,
    embedding_model: String,
}

impl OpenAIProvider {
    /// An empty or wrong key is not rejected here; OpenAI reports it on the
    /// first call and that error surfaces as `QaError::Provider`.
    pub fn new(api_key: String, system_message: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(config);

        let chat_model =
            env::var("OPENAI_CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());
        let embedding_model = env::var("OPENAI_EMBEDDING_MODEL")
            .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string());

        Self {
            client,
            system_message,
            chat_model,
            embedding_model,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    async fn complete(&self, prompt: &str) -> Result<String, QaError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.chat_model)
            .messages(vec![
                ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                    role: Role::System,
                    content: self.system_message.clone(),
                    name: None,
                }),
                ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                    role: Role::User,
                    content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
                    name: None,
                }),
            ])
            .build()
            .map_err(|e| QaError::Provider(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| QaError::Provider(e.to_string()))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| QaError::Provider("No response content".to_string()))
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, QaError> {
        let request = CreateEmbeddingRequestArgs::default()
            .model(&self.embedding_model)
            .input(EmbeddingInput::String(text.to_string()))
            .build()
            .map_err(|e| QaError::Provider(e.to_string()))?;

        let response = self
            .client
            .embeddings()
            .create(request)
            .await
            .map_err(|e| QaError::Provider(e.to_string()))?;

        response
            .data
            .first()
            .map(|embedding| embedding.embedding.clone())
            .ok_or_else(|| QaError::Provider("No embedding returned from OpenAI".to_string()))
    }

    fn model_info(&self) -> String {
        self.chat_model.clone()
    }
}
