//! Answer orchestration: context assembly, bounded prompts, and the
//! never-crash policy around the external model.
//!
//! The orchestrator turns retrieved chunks plus an optional session history
//! into one bounded prompt, invokes the model, and commits the exchange to
//! session memory only after the model succeeds. Every path returns
//! displayable text; model failures become error strings, not faults.

use std::sync::Arc;

use tracing::{debug, warn};

use dossier_core::config::{RetrievalConfig, SummaryConfig};
use dossier_core::types::{Chunk, Role, Turn};

use crate::memory::SessionMemoryStore;
use crate::model::LanguageModel;
use crate::prompt::{truncate_chars, CONTEXTUAL_PROMPT, MEMORY_PROMPT, SUMMARY_PROMPT};

/// Fixed answer returned when retrieval produced no chunks.
pub const NO_CONTEXT_ANSWER: &str =
    "No relevant context was found in the indexed documents for this question.";

/// Separator between chunks in the assembled context block.
const CONTEXT_SEPARATOR: &str = "\n---\n";

/// Marker appended to a context block cut at the character budget.
const TRUNCATION_MARKER: &str = "\n[context truncated]";

/// Assembles prompts and invokes the external language model.
pub struct AnswerOrchestrator {
    model: Arc<dyn LanguageModel>,
    memory: Arc<SessionMemoryStore>,
    max_context_chars: usize,
    max_summary_input_chars: usize,
}

impl AnswerOrchestrator {
    /// Create an orchestrator over the given model and session store.
    pub fn new(
        model: Arc<dyn LanguageModel>,
        memory: Arc<SessionMemoryStore>,
        retrieval: &RetrievalConfig,
        summary: &SummaryConfig,
    ) -> Self {
        Self {
            model,
            memory,
            max_context_chars: retrieval.max_context_chars,
            max_summary_input_chars: summary.max_input_chars,
        }
    }

    /// Answer a question over retrieved chunks.
    ///
    /// With `session_id`, the prompt includes the session's prior turns and
    /// a successful exchange is appended to the session afterwards
    /// (stateless otherwise). Empty retrieval short-circuits to the fixed
    /// sentinel without invoking the model. This method never fails: model
    /// errors come back as a descriptive answer string and leave session
    /// history untouched.
    pub async fn answer(
        &self,
        chunks: &[Chunk],
        question: &str,
        session_id: Option<&str>,
    ) -> String {
        if chunks.is_empty() {
            debug!("Empty retrieval; returning sentinel answer");
            return NO_CONTEXT_ANSWER.to_string();
        }

        let context = self.build_context(chunks);

        let prompt = match session_id {
            None => CONTEXTUAL_PROMPT.render(&[("context", &context), ("question", question)]),
            Some(sid) => {
                let history = match self.memory.get_or_create(sid) {
                    Ok(history) => history,
                    Err(e) => {
                        warn!(session_id = sid, error = %e, "Session history unavailable");
                        return format!("Session state is unavailable: {}", e);
                    }
                };
                if history.is_empty() {
                    CONTEXTUAL_PROMPT.render(&[("context", &context), ("question", question)])
                } else {
                    let rendered = render_history(&history);
                    MEMORY_PROMPT.render(&[
                        ("history", &rendered),
                        ("context", &context),
                        ("question", question),
                    ])
                }
            }
        };

        match self.model.invoke(&prompt).await {
            Ok(answer) => {
                if let Some(sid) = session_id {
                    if let Err(e) = self.memory.append_exchange(sid, question, &answer) {
                        warn!(session_id = sid, error = %e, "Failed to record exchange");
                    }
                }
                answer
            }
            Err(e) => {
                warn!(error = %e, "Model invocation failed");
                format!("The language model could not produce an answer: {}", e)
            }
        }
    }

    /// Summarize a document's text.
    ///
    /// The input is cut to the configured character budget before
    /// submission; a truncated input is marked in the output together with
    /// the document's full length. Model failures become an error string.
    pub async fn summarize(&self, text: &str) -> String {
        let total_chars = text.chars().count();
        let (short, truncated) = truncate_chars(text, self.max_summary_input_chars);
        let prompt = SUMMARY_PROMPT.render(&[("text", &short)]);

        match self.model.invoke(&prompt).await {
            Ok(summary) => {
                if truncated {
                    format!(
                        "[summary of the first {} of {} characters]\n{}",
                        self.max_summary_input_chars, total_chars, summary
                    )
                } else {
                    summary
                }
            }
            Err(e) => {
                warn!(error = %e, "Model invocation failed during summarization");
                format!("The language model could not summarize the document: {}", e)
            }
        }
    }

    /// Join chunk texts with the separator, enforcing the character budget.
    fn build_context(&self, chunks: &[Chunk]) -> String {
        let joined = chunks
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR);
        let (bounded, truncated) = truncate_chars(&joined, self.max_context_chars);
        if truncated {
            format!("{}{}", bounded, TRUNCATION_MARKER)
        } else {
            bounded
        }
    }
}

/// Render session turns as labelled lines for the memory-aware prompt.
fn render_history(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|turn| match turn.role {
            Role::User => format!("User: {}", turn.content),
            Role::Assistant => format!("Assistant: {}", turn.content),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
