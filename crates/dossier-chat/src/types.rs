use serde::{Deserialize, Serialize};

use dossier_core::types::Chunk;

/// The result of asking one question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AskOutcome {
    /// The answer text. Always displayable: sentinel answers and model
    /// failures arrive here as text, never as errors.
    pub answer: String,
    /// Up to three cleaned follow-up suggestions, in model output order.
    pub suggestions: Vec<String>,
    /// The chunks the answer was grounded in, nearest first.
    pub sources: Vec<Chunk>,
}
