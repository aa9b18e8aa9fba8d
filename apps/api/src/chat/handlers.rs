//! Axum route handlers for the chat API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::chat::personas::{chamber_profile, path_guide_profile};
use crate::chat::store::{SessionStore, SessionView, SubmitOutcome};
use crate::errors::AppError;
use crate::llm_client::Generator;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Chamber,
    Path,
}

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub kind: SessionKind,
    pub path_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/chat/sessions
///
/// Opens a conversation session: the global Echo Chamber, or a path guide
/// keyed by `path_id`. The response carries the greeting transcript.
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let profile = match request.kind {
        SessionKind::Chamber => chamber_profile(),
        SessionKind::Path => {
            let path_id = request.path_id.as_deref().ok_or_else(|| {
                AppError::Validation("path_id is required for a path session".to_string())
            })?;
            let path = state
                .catalog
                .path(path_id)
                .ok_or_else(|| AppError::NotFound(format!("Path '{path_id}' not found")))?;
            path_guide_profile(path)
        }
    };

    let view = state.sessions.create(profile).await;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/chat/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .sessions
        .view(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(view))
}

/// POST /api/v1/chat/sessions/:id/messages
///
/// Runs one submit/generate/resolve cycle and returns the updated
/// transcript. Concurrent submits while a reply is outstanding get 409 and
/// change nothing.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = run_turn(&state.sessions, &state.llm, &id, &request.text).await?;
    Ok(Json(view))
}

/// DELETE /api/v1/chat/sessions/:id
///
/// Discards the session. An in-flight generation for it resolves into the
/// void.
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

/// One full turn: start it under the store lock, call the generator with the
/// lock released, then apply the outcome. Generation errors never surface
/// here — the session converts them into its fixed failure message.
async fn run_turn(
    sessions: &SessionStore,
    generator: &dyn Generator,
    id: &Uuid,
    text: &str,
) -> Result<SessionView, AppError> {
    let turn = match sessions.begin_turn(id, text).await {
        SubmitOutcome::Started(turn) => turn,
        SubmitOutcome::Busy => {
            return Err(AppError::Busy(
                "A reply is already pending for this session".to_string(),
            ))
        }
        SubmitOutcome::Blank => {
            return Err(AppError::Validation("text cannot be empty".to_string()))
        }
        SubmitOutcome::Missing => {
            return Err(AppError::NotFound(format!("Session {id} not found")))
        }
    };

    let outcome = generator
        .generate(turn.instruction, &turn.user_text, turn.temperature)
        .await;

    sessions
        .complete_turn(id, turn.id, outcome)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::chat::session::Role;
    use crate::llm_client::GenerationError;

    enum FakeMode {
        Reply(&'static str),
        Fail,
        Silent,
    }

    struct FakeGenerator {
        mode: FakeMode,
        calls: AtomicUsize,
    }

    impl FakeGenerator {
        fn new(mode: FakeMode) -> Self {
            Self {
                mode,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Generator for FakeGenerator {
        async fn generate(
            &self,
            _instruction: &str,
            _user_text: &str,
            _temperature: f32,
        ) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                FakeMode::Reply(text) => Ok(text.to_string()),
                FakeMode::Fail => Err(GenerationError::Api {
                    status: 500,
                    message: "upstream unavailable".to_string(),
                }),
                FakeMode::Silent => Ok("  ".to_string()),
            }
        }
    }

    async fn chamber(store: &SessionStore) -> Uuid {
        store.create(chamber_profile()).await.id
    }

    #[tokio::test]
    async fn test_turn_appends_user_then_assistant() {
        let store = SessionStore::new();
        let generator = FakeGenerator::new(FakeMode::Reply("The Order is not a community."));
        let id = chamber(&store).await;

        let view = run_turn(&store, &generator, &id, "What is NightShade?")
            .await
            .unwrap();

        assert_eq!(view.messages.len(), 3);
        assert_eq!(view.messages[1].role, Role::User);
        assert_eq!(view.messages[1].text, "What is NightShade?");
        assert_eq!(view.messages[2].role, Role::Assistant);
        assert_eq!(view.messages[2].text, "The Order is not a community.");
        assert!(!view.busy);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generation_failure_becomes_assistant_message() {
        let store = SessionStore::new();
        let generator = FakeGenerator::new(FakeMode::Fail);
        let id = chamber(&store).await;

        let view = run_turn(&store, &generator, &id, "speak").await.unwrap();

        assert_eq!(view.messages.len(), 3);
        assert_eq!(
            view.messages[2].text,
            "Error: Neural link unstable. The Signal has been interrupted."
        );
        assert!(!view.busy);
    }

    #[tokio::test]
    async fn test_silent_generator_yields_placeholder() {
        let store = SessionStore::new();
        let generator = FakeGenerator::new(FakeMode::Silent);
        let id = chamber(&store).await;

        let view = run_turn(&store, &generator, &id, "speak").await.unwrap();
        assert_eq!(view.messages[2].text, "...The void remains silent.");
    }

    #[tokio::test]
    async fn test_blank_text_rejected_without_dispatch() {
        let store = SessionStore::new();
        let generator = FakeGenerator::new(FakeMode::Reply("never"));
        let id = chamber(&store).await;

        let err = run_turn(&store, &generator, &id, "   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.view(&id).await.unwrap().messages.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let store = SessionStore::new();
        let generator = FakeGenerator::new(FakeMode::Reply("never"));

        let err = run_turn(&store, &generator, &Uuid::new_v4(), "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }
}
