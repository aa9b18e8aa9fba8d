// Conversation sessions: one state machine, two configurations (the global
// Echo Chamber and the per-path guides). All generation traffic goes through
// llm_client — no direct API calls here.

pub mod handlers;
pub mod personas;
pub mod session;
pub mod store;
