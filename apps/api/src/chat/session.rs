//! Conversation session state machine.
//!
//! A session is either idle or awaiting exactly one reply. `submit` starts a
//! turn (append user message, clear the input buffer, mark busy);
//! `apply_reply` finishes it (append exactly one assistant message, mark
//! idle). Generation failures are swallowed here: they become a fixed
//! assistant message, never an error that escapes the session. The
//! transcript is append-only for the life of the session.

use serde::Serialize;

use crate::chat::personas::SessionProfile;
use crate::llm_client::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// Per-session monotonic id; ordering matches transcript order.
    pub id: u64,
    pub role: Role,
    pub text: String,
}

/// Descriptor of one outstanding generation turn, handed to the caller by
/// `submit`. The turn id keys the matching `apply_reply` so completions for
/// a superseded or torn-down session are discarded.
#[derive(Debug)]
pub struct Turn {
    pub id: u64,
    pub instruction: &'static str,
    pub user_text: String,
    pub temperature: f32,
}

pub struct Session {
    profile: SessionProfile,
    transcript: Vec<Message>,
    input: String,
    busy: bool,
    turn: u64,
    next_message_id: u64,
}

impl Session {
    /// Creates an idle session seeded with the profile's greeting. The
    /// greeting is synthesized copy, never generator output.
    pub fn new(profile: SessionProfile) -> Self {
        let greeting = Message {
            id: 0,
            role: Role::Assistant,
            text: profile.greeting.clone(),
        };
        Self {
            profile,
            transcript: vec![greeting],
            input: String::new(),
            busy: false,
            turn: 0,
            next_message_id: 1,
        }
    }

    pub fn profile(&self) -> &SessionProfile {
        &self.profile
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the pending input buffer. Allowed in any state; only
    /// `submit` consumes it.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Starts a turn. No-op (returns `None`) while a reply is outstanding or
    /// when the buffer trims to empty; a busy no-op leaves the buffer
    /// untouched so nothing the user typed is lost.
    pub fn submit(&mut self) -> Option<Turn> {
        if self.busy {
            return None;
        }
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.push(Role::User, text.clone());
        self.input.clear();
        self.busy = true;
        self.turn += 1;

        Some(Turn {
            id: self.turn,
            instruction: self.profile.instruction,
            user_text: text,
            temperature: self.profile.temperature,
        })
    }

    /// Finishes the turn identified by `turn_id`. Stale completions (wrong
    /// turn id, or no turn outstanding) are ignored and return `false`.
    ///
    /// A successful reply is appended trimmed; a whitespace-only reply is
    /// replaced by the fixed placeholder; any generation error is replaced
    /// by the fixed failure copy. The session is idle and usable afterwards
    /// in every case.
    pub fn apply_reply(&mut self, turn_id: u64, outcome: Result<String, GenerationError>) -> bool {
        if !self.busy || turn_id != self.turn {
            return false;
        }

        let text = match outcome {
            Ok(reply) => {
                let reply = reply.trim().to_string();
                if reply.is_empty() {
                    self.profile.empty_reply.to_string()
                } else {
                    reply
                }
            }
            Err(err) => {
                tracing::warn!("Generation failed for session turn {turn_id}: {err}");
                self.profile.failure_reply.to_string()
            }
        };

        self.push(Role::Assistant, text);
        self.busy = false;
        true
    }

    fn push(&mut self, role: Role, text: String) {
        self.transcript.push(Message {
            id: self.next_message_id,
            role,
            text,
        });
        self.next_message_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::personas::chamber_profile;

    fn chamber_session() -> Session {
        Session::new(chamber_profile())
    }

    #[test]
    fn test_starts_with_greeting_only() {
        let session = chamber_session();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, Role::Assistant);
        assert!(session.transcript()[0].text.starts_with("Connection established"));
        assert!(!session.busy());
    }

    #[test]
    fn test_happy_path_round_trip() {
        let mut session = chamber_session();
        session.set_input("What is NightShade?");
        let turn = session.submit().unwrap();

        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1].role, Role::User);
        assert_eq!(session.transcript()[1].text, "What is NightShade?");
        assert!(session.busy());
        assert_eq!(session.input(), "");

        let applied =
            session.apply_reply(turn.id, Ok("The Order is not a community.".to_string()));
        assert!(applied);
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.transcript()[2].role, Role::Assistant);
        assert_eq!(session.transcript()[2].text, "The Order is not a community.");
        assert!(!session.busy());
    }

    #[test]
    fn test_submit_trims_input() {
        let mut session = chamber_session();
        session.set_input("  hello void  ");
        let turn = session.submit().unwrap();
        assert_eq!(turn.user_text, "hello void");
        assert_eq!(session.transcript()[1].text, "hello void");
    }

    #[test]
    fn test_blank_input_is_a_noop() {
        let mut session = chamber_session();
        session.set_input("   ");
        assert!(session.submit().is_none());
        assert_eq!(session.transcript().len(), 1);
        assert!(!session.busy());
    }

    #[test]
    fn test_submit_while_busy_is_a_noop() {
        let mut session = chamber_session();
        session.set_input("first");
        session.submit().unwrap();

        session.set_input("second");
        assert!(session.submit().is_none());
        // Transcript and buffer are unchanged by the rejected submit.
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.input(), "second");
        assert!(session.busy());
    }

    #[test]
    fn test_failure_appends_fixed_error_copy() {
        let mut session = chamber_session();
        session.set_input("speak");
        let turn = session.submit().unwrap();

        session.apply_reply(turn.id, Err(GenerationError::MissingKey));
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(
            session.transcript()[2].text,
            "Error: Neural link unstable. The Signal has been interrupted."
        );
        assert!(!session.busy());

        // The session stays usable for further attempts.
        session.set_input("again");
        assert!(session.submit().is_some());
    }

    #[test]
    fn test_empty_reply_uses_placeholder_not_error_copy() {
        let mut session = chamber_session();
        session.set_input("speak");
        let turn = session.submit().unwrap();

        session.apply_reply(turn.id, Ok("   \n".to_string()));
        assert_eq!(session.transcript()[2].text, "...The void remains silent.");
    }

    #[test]
    fn test_stale_turn_is_ignored() {
        let mut session = chamber_session();
        session.set_input("one");
        let turn = session.submit().unwrap();

        assert!(!session.apply_reply(turn.id + 1, Ok("wrong turn".to_string())));
        assert!(session.busy());
        assert_eq!(session.transcript().len(), 2);

        assert!(session.apply_reply(turn.id, Ok("right turn".to_string())));
        // A second completion for the same turn has no effect.
        assert!(!session.apply_reply(turn.id, Ok("duplicate".to_string())));
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn test_transcript_grows_by_two_per_cycle() {
        let mut session = chamber_session();
        for i in 0..4 {
            let before = session.transcript().len();
            session.set_input(&format!("query {i}"));
            let turn = session.submit().unwrap();
            assert_eq!(session.transcript().len(), before + 1);
            session.apply_reply(turn.id, Ok(format!("reply {i}")));
            assert_eq!(session.transcript().len(), before + 2);
        }
        // Message ids are strictly increasing.
        let ids: Vec<u64> = session.transcript().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
