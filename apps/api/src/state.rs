use std::sync::Arc;

use crate::catalog::Catalog;
use crate::chat::store::SessionStore;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::mailer::Deliverer;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Static entity tables, built once at startup, read-only thereafter.
    pub catalog: Arc<Catalog>,
    /// Live conversation sessions (chamber + path guides).
    pub sessions: Arc<SessionStore>,
    pub llm: GeminiClient,
    /// Pluggable email delivery. Production: `EmailJsClient`.
    pub mailer: Arc<dyn Deliverer>,
    pub config: Config,
}
