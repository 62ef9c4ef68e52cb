use clap::Parser;
use dotenv::dotenv;
use lecture_qa::api::{self, AppState};
use lecture_qa::config::AppConfig;
use lecture_qa::providers::openai::OpenAIProvider;
use lecture_qa::providers::traits::CompletionProvider;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const SYSTEM_MESSAGE: &str =
    "You are a helpful assistant answering questions about university lecture material.";

#[derive(Parser, Debug)]
#[command(author, version, about = "Question answering over lecture PDFs", long_about = None)]
struct Args {
    /// OpenAI API key; falls back to the OPENAI_API_KEY env var.
    #[arg(short, long)]
    api_key: Option<String>,

    /// Port to listen on; falls back to PORT, then 5000.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::from_env();
    if let Some(key) = args.api_key {
        config.openai_api_key = key;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let provider: Arc<dyn CompletionProvider> = Arc::new(OpenAIProvider::new(
        config.openai_api_key.clone(),
        SYSTEM_MESSAGE.to_string(),
    ));
    let state = AppState::new(Arc::new(config), provider);
    let app = api::create_api(state);

    tracing::info!(%addr, "starting lecture QA server");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
