//! Conversational question answering for Dossier.
//!
//! Provides session-scoped conversational memory, prompt assembly over
//! retrieved chunks, answer orchestration against an external language
//! model, follow-up-suggestion extraction, session export, and the
//! `DocumentAssistant` facade consumed by UI/CLI layers.

pub mod assistant;
pub mod error;
pub mod export;
pub mod followup;
pub mod memory;
pub mod model;
pub mod orchestrator;
pub mod prompt;
pub mod types;

pub use assistant::{DocumentAssistant, NOT_READY_ANSWER};
pub use error::ChatError;
pub use export::SessionExporter;
pub use followup::FollowupExtractor;
pub use memory::SessionMemoryStore;
pub use model::{FailingModel, LanguageModel, MockModel};
pub use orchestrator::{AnswerOrchestrator, NO_CONTEXT_ANSWER};
pub use prompt::{
    PromptTemplate, CONTEXTUAL_PROMPT, FOLLOWUP_PROMPT, MEMORY_PROMPT, SUMMARY_PROMPT,
};
pub use types::AskOutcome;
