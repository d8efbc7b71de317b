//! Session-scoped conversational memory.
//!
//! Each session is an ordered, append-only list of turns keyed by a string
//! session identifier. Sessions are created lazily on first reference and
//! cleared in place — the identifier stays valid for the process lifetime.

use std::collections::HashMap;
use std::sync::Mutex;

use dossier_core::types::Turn;

use crate::error::ChatError;

/// Owns every session's conversation history.
///
/// One store is instantiated per process and shared by handle; sessions are
/// isolated from one another by key. The interior mutex serializes mutation,
/// so concurrent turns against the same session cannot interleave partial
/// exchanges.
#[derive(Debug, Default)]
pub struct SessionMemoryStore {
    sessions: Mutex<HashMap<String, Vec<Turn>>>,
}

impl SessionMemoryStore {
    /// Create a store with no sessions.
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Return a snapshot of the session's history, creating the session if
    /// this is the first reference to the identifier.
    pub fn get_or_create(&self, session_id: &str) -> Result<Vec<Turn>, ChatError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| ChatError::Session(format!("session lock poisoned: {}", e)))?;
        Ok(sessions.entry(session_id.to_string()).or_default().clone())
    }

    /// Append a single turn to a session.
    pub fn append(&self, session_id: &str, turn: Turn) -> Result<(), ChatError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| ChatError::Session(format!("session lock poisoned: {}", e)))?;
        sessions.entry(session_id.to_string()).or_default().push(turn);
        Ok(())
    }

    /// Append a completed question/answer exchange as a user turn followed
    /// by an assistant turn, under one lock acquisition.
    pub fn append_exchange(
        &self,
        session_id: &str,
        question: &str,
        answer: &str,
    ) -> Result<(), ChatError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| ChatError::Session(format!("session lock poisoned: {}", e)))?;
        let history = sessions.entry(session_id.to_string()).or_default();
        history.push(Turn::user(question));
        history.push(Turn::assistant(answer));
        Ok(())
    }

    /// Empty a session's history in place.
    ///
    /// The identifier remains valid (and listed); the next turn starts from
    /// empty context. Clearing an unseen identifier creates it empty.
    pub fn clear(&self, session_id: &str) -> Result<(), ChatError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| ChatError::Session(format!("session lock poisoned: {}", e)))?;
        sessions.entry(session_id.to_string()).or_default().clear();
        Ok(())
    }

    /// All known session identifiers, unordered.
    pub fn list(&self) -> Vec<String> {
        match self.sessions.lock() {
            Ok(sessions) => sessions.keys().cloned().collect(),
            Err(_) => vec![],
        }
    }

    /// Number of turns currently held for a session (0 for unseen ids,
    /// without creating them).
    pub fn turn_count(&self, session_id: &str) -> usize {
        self.sessions
            .lock()
            .ok()
            .and_then(|s| s.get(session_id).map(|h| h.len()))
            .unwrap_or(0)
    }
}
