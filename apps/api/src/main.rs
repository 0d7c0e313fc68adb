mod chatbot;
mod config;
mod corpus;
mod errors;
mod forecast;
mod llm_client;
mod prompt;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing GEMINI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pollsight API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = GeminiClient::new(config.gemini_api_key.clone(), config.safety_policy);
    info!(
        "LLM client initialized (model: {}, safety policy: {:?})",
        llm_client::MODEL,
        config.safety_policy
    );

    // Probe the question corpus once at startup. Informational only — every
    // request re-reads the directory.
    let probe = corpus::load(Path::new(&config.data_dir));
    info!(
        "Question corpus: {} questions from '{}' ({} issues)",
        probe.questions.len(),
        config.data_dir,
        probe.issues.len()
    );

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        config: config.clone(),
        sessions: SessionStore::new(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
