mod catalog;
mod chat;
mod config;
mod errors;
mod llm_client;
mod mailer;
mod pages;
mod routes;
mod signup;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::chat::store::SessionStore;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::mailer::EmailJsClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("nightshade_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting NightShade API v{}", env!("CARGO_PKG_VERSION"));

    // Build the static catalog once; everything else reads by reference.
    let catalog = Arc::new(Catalog::new());
    info!(
        "Catalog loaded: {} paths, {} members, {} roadmap entries, {} artifacts",
        catalog.paths().len(),
        catalog.members().len(),
        catalog.roadmap().len(),
        catalog.artifacts().len()
    );

    // Generation client. A missing key is not fatal: the chat surfaces
    // degrade to their fixed failure copy while the rest of the site serves.
    let llm = GeminiClient::new(config.gemini_api_key.clone())?;
    if llm.has_key() {
        info!("Generation client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("GEMINI_API_KEY not set — chat replies will report a failed link");
    }

    // Email delivery client
    let mailer = Arc::new(EmailJsClient::new(
        config.emailjs_service_id.clone(),
        config.emailjs_public_key.clone(),
    )?);
    info!("Email delivery client initialized");

    // Build app state
    let state = AppState {
        catalog,
        sessions: Arc::new(SessionStore::new()),
        llm,
        mailer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
