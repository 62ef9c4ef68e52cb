pub mod embeddings;
pub mod qa;
pub mod vector_store;

pub use embeddings::EmbeddingGenerator;
pub use qa::{ConversationTurn, QaEngine};
pub use vector_store::VectorStore;
