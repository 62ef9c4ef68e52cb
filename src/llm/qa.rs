use crate::document::{Page, TextSplitter};
use crate::error::QaError;
use crate::llm::{EmbeddingGenerator, VectorStore};
use crate::modules::Module;
use crate::providers::traits::CompletionProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How many chunks are stuffed into the generation prompt.
pub const DEFAULT_TOP_K: usize = 4;

const STUFF_PROMPT_HEADER: &str = "Use the following pieces of context to answer \
the question at the end. If you don't know the answer, just say that you don't \
know, don't try to make up an answer.";

/// One prior message of the conversation, resupplied by the caller on every
/// request. Nothing is kept server-side between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: String,
    pub content: String,
}

/// Retrieval-then-generation engine for one module's document. Building one
/// loads nothing lazily: the full chunk-embed-index pipeline runs up front,
/// after which `ask` only costs one query embedding and one completion.
pub struct QaEngine {
    module: Module,
    provider: Arc<dyn CompletionProvider>,
    store: VectorStore,
    top_k: usize,
}

impl std::fmt::Debug for QaEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QaEngine")
            .field("module", &self.module)
            .field("top_k", &self.top_k)
            .finish_non_exhaustive()
    }
}

impl QaEngine {
    pub async fn build(
        module: Module,
        pages: Vec<Page>,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, QaError> {
        let splitter = TextSplitter::default();
        let chunks = splitter.split_pages(&pages);
        if chunks.is_empty() {
            return Err(QaError::DocumentLoad(format!(
                "document for module {} contains no usable text",
                module
            )));
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let embeddings = EmbeddingGenerator::new(provider.clone())
            .embed_batch(&texts)
            .await?;

        tracing::info!(
            module = %module,
            chunks = chunks.len(),
            "built retrieval index"
        );

        Ok(Self {
            module,
            provider,
            store: VectorStore::new(chunks, embeddings),
            top_k: DEFAULT_TOP_K,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        module: Module,
        store: VectorStore,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            module,
            provider,
            store,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn module(&self) -> Module {
        self.module
    }

    /// Flattens prior turns and the current question into one text block.
    /// With no history this is the raw question; otherwise each turn becomes
    /// a `Role: content` line, followed by the question and a trailing
    /// `Assistant:` marker. The block doubles as the retrieval query, history
    /// included, to match the original conversation handling.
    pub fn render_question_block(question: &str, history: &[ConversationTurn]) -> String {
        if history.is_empty() {
            return question.to_string();
        }
        let mut lines: Vec<String> = history
            .iter()
            .map(|turn| format!("{}: {}", capitalize(&turn.role), turn.content))
            .collect();
        lines.push(format!("User: {}", question));
        lines.push("Assistant:".to_string());
        lines.join("\n")
    }

    pub async fn ask(
        &self,
        question: &str,
        history: &[ConversationTurn],
    ) -> Result<String, QaError> {
        let block = Self::render_question_block(question, history);

        let query_embedding = self.provider.embed(&block).await?;
        let hits = self.store.search(&query_embedding, self.top_k);
        tracing::debug!(module = %self.module, retrieved = hits.len(), "retrieval complete");

        let context = hits
            .iter()
            .map(|(chunk, _)| chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        let prompt = format!(
            "{}\n\n{}\n\nQuestion: {}\nHelpful Answer:",
            STUFF_PROMPT_HEADER, context, block
        );

        self.provider.complete(&prompt).await
    }
}

/// First letter uppercased, rest lowercased ("user" -> "User").
fn capitalize(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
