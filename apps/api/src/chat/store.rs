//! Server-side session registry.
//!
//! Sessions are owned exclusively by this store; handlers interact through
//! short lock windows. The mutex is never held across the generation await:
//! a turn is started under the lock, the generation call runs unlocked, and
//! the completion re-acquires the lock and is dropped if the session was
//! deleted in the meantime (the user navigated away).

use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::chat::personas::SessionProfile;
use crate::chat::session::{Message, Session, Turn};
use crate::llm_client::GenerationError;

/// Snapshot of a session returned to HTTP clients.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub label: String,
    pub busy: bool,
    pub messages: Vec<Message>,
}

/// Result of attempting to start a turn.
pub enum SubmitOutcome {
    Started(Turn),
    /// A reply is already outstanding; nothing changed.
    Busy,
    /// Input trimmed to empty; nothing changed.
    Blank,
    /// No such session.
    Missing,
}

#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session seeded with its greeting and returns the snapshot.
    pub async fn create(&self, profile: SessionProfile) -> SessionView {
        let id = Uuid::new_v4();
        let session = Session::new(profile);
        let view = snapshot(id, &session);
        self.sessions.lock().await.insert(id, session);
        view
    }

    pub async fn view(&self, id: &Uuid) -> Option<SessionView> {
        let sessions = self.sessions.lock().await;
        sessions.get(id).map(|s| snapshot(*id, s))
    }

    /// Buffers `text` as the session's pending input and submits it.
    pub async fn begin_turn(&self, id: &Uuid, text: &str) -> SubmitOutcome {
        let mut sessions = self.sessions.lock().await;
        let Some(session) = sessions.get_mut(id) else {
            return SubmitOutcome::Missing;
        };
        if session.busy() {
            return SubmitOutcome::Busy;
        }
        session.set_input(text);
        match session.submit() {
            Some(turn) => SubmitOutcome::Started(turn),
            None => SubmitOutcome::Blank,
        }
    }

    /// Applies a generation outcome to the turn that produced it. Returns
    /// `None` when the session no longer exists — the completion is simply
    /// discarded, per the navigation-away contract.
    pub async fn complete_turn(
        &self,
        id: &Uuid,
        turn_id: u64,
        outcome: Result<String, GenerationError>,
    ) -> Option<SessionView> {
        let mut sessions = self.sessions.lock().await;
        let Some(session) = sessions.get_mut(id) else {
            debug!("Discarding completion for torn-down session {id}");
            return None;
        };
        session.apply_reply(turn_id, outcome);
        Some(snapshot(*id, session))
    }

    /// Discards a session. Any in-flight completion for it will be dropped.
    pub async fn remove(&self, id: &Uuid) -> bool {
        self.sessions.lock().await.remove(id).is_some()
    }
}

fn snapshot(id: Uuid, session: &Session) -> SessionView {
    SessionView {
        id,
        label: session.profile().label.clone(),
        busy: session.busy(),
        messages: session.transcript().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::personas::chamber_profile;

    #[tokio::test]
    async fn test_create_view_remove() {
        let store = SessionStore::new();
        let view = store.create(chamber_profile()).await;
        assert_eq!(view.messages.len(), 1);
        assert!(!view.busy);

        let again = store.view(&view.id).await.unwrap();
        assert_eq!(again.messages.len(), 1);

        assert!(store.remove(&view.id).await);
        assert!(store.view(&view.id).await.is_none());
        assert!(!store.remove(&view.id).await);
    }

    #[tokio::test]
    async fn test_second_submit_while_busy_is_rejected() {
        let store = SessionStore::new();
        let view = store.create(chamber_profile()).await;

        let first = store.begin_turn(&view.id, "one").await;
        assert!(matches!(first, SubmitOutcome::Started(_)));

        let second = store.begin_turn(&view.id, "two").await;
        assert!(matches!(second, SubmitOutcome::Busy));

        // The rejected submit changed nothing.
        let snapshot = store.view(&view.id).await.unwrap();
        assert_eq!(snapshot.messages.len(), 2);
    }

    #[tokio::test]
    async fn test_completion_after_removal_is_discarded() {
        let store = SessionStore::new();
        let view = store.create(chamber_profile()).await;

        let SubmitOutcome::Started(turn) = store.begin_turn(&view.id, "query").await else {
            panic!("expected a started turn");
        };

        assert!(store.remove(&view.id).await);
        let result = store
            .complete_turn(&view.id, turn.id, Ok("late reply".to_string()))
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.create(chamber_profile()).await;
        let b = store.create(chamber_profile()).await;

        let SubmitOutcome::Started(turn) = store.begin_turn(&a.id, "hello").await else {
            panic!("expected a started turn");
        };
        store
            .complete_turn(&a.id, turn.id, Ok("echo".to_string()))
            .await
            .unwrap();

        assert_eq!(store.view(&a.id).await.unwrap().messages.len(), 3);
        assert_eq!(store.view(&b.id).await.unwrap().messages.len(), 1);
    }
}
