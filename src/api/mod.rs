use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::document;
use crate::error::QaError;
use crate::llm::qa::{ConversationTurn, QaEngine};
use crate::modules::Module;
use crate::providers::traits::CompletionProvider;

#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    provider: Arc<dyn CompletionProvider>,
    engines: Arc<RwLock<HashMap<Module, Arc<QaEngine>>>>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config,
            provider,
            engines: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Engine for `module`, built on first use and shared afterwards.
    /// Re-checked under the write lock so concurrent first requests do not
    /// build the same index twice.
    async fn engine_for(&self, module: Module) -> Result<Arc<QaEngine>, QaError> {
        if let Some(engine) = self.engines.read().await.get(&module) {
            return Ok(engine.clone());
        }

        let mut engines = self.engines.write().await;
        if let Some(engine) = engines.get(&module) {
            return Ok(engine.clone());
        }

        let pages = document::load_pdf(self.config.pdf_path(module))?;
        let engine = Arc::new(QaEngine::build(module, pages, self.provider.clone()).await?);
        engines.insert(module, engine.clone());
        Ok(engine)
    }
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    // Missing fields behave like empty ones so validation owns the error
    // message instead of the deserializer.
    #[serde(default)]
    question: String,
    module: Option<String>,
    #[serde(default)]
    history: Vec<ConversationTurn>,
}

#[derive(Serialize)]
pub struct AskResponse {
    answer: String,
}

#[derive(Serialize)]
struct StatusResponse {
    status: String,
}

/// Create and configure the API router
pub fn create_api(state: AppState) -> Router {
    // Fully permissive CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/api/ask", post(ask_handler))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(state)
}

async fn ask_handler(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, QaError> {
    let question = request.question.trim();
    if question.is_empty() {
        return Err(QaError::Validation("Question cannot be empty".to_string()));
    }

    let module = match request.module.as_deref() {
        None => Module::default(),
        Some(name) => Module::parse(name)
            .ok_or_else(|| QaError::Validation("Invalid module selected".to_string()))?,
    };

    tracing::info!(%module, history_turns = request.history.len(), "answering question");

    let engine = state.engine_for(module).await?;
    let answer = engine.ask(question, &request.history).await?;

    Ok(Json(AskResponse { answer }))
}

async fn health_check() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Server is running and healthy".to_string(),
    })
}
