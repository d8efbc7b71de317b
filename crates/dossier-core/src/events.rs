use serde::{Deserialize, Serialize};

/// Progress events emitted while answering a question.
///
/// Events are ordered per ask and consumed by UI layers that want to show
/// intermediate status ("searching", "generating") while the model runs.
/// Emission is fire-and-forget: a consumer that stops listening simply stops
/// receiving, and the answer path is unaffected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AskEvent {
    /// The question is being embedded.
    EmbeddingQuery { session_id: String },

    /// The vector index is being searched.
    Searching { session_id: String },

    /// The language model is generating an answer over the retrieved context.
    Generating {
        session_id: String,
        context_chunks: usize,
    },

    /// Follow-up suggestions are being extracted from the answer.
    ExtractingFollowups { session_id: String },

    /// The ask completed and a displayable answer is available.
    Answered {
        session_id: String,
        suggestion_count: usize,
    },
}

impl AskEvent {
    /// The session this event belongs to.
    pub fn session_id(&self) -> &str {
        match self {
            AskEvent::EmbeddingQuery { session_id }
            | AskEvent::Searching { session_id }
            | AskEvent::Generating { session_id, .. }
            | AskEvent::ExtractingFollowups { session_id }
            | AskEvent::Answered { session_id, .. } => session_id,
        }
    }
}
