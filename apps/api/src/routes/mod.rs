pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::pages::handlers as pages;
use crate::signup::handlers as signup;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Site pages
        .route("/", get(pages::handle_home))
        .route("/chamber", get(pages::handle_chamber))
        .route("/path/:path_id", get(pages::handle_path_detail))
        .route("/member/:member_id", get(pages::handle_member_detail))
        // Chat API
        .route("/api/v1/chat/sessions", post(chat::handle_create_session))
        .route(
            "/api/v1/chat/sessions/:id",
            get(chat::handle_get_session).delete(chat::handle_delete_session),
        )
        .route(
            "/api/v1/chat/sessions/:id/messages",
            post(chat::handle_send_message),
        )
        // Initiation form
        .route("/api/v1/join", post(signup::handle_join))
        .fallback(pages::handle_fallback)
        .with_state(state)
}
