//! The document assistant facade consumed by UI/CLI layers.
//!
//! Wires the whole pipeline together: ingest (summarize -> chunk -> embed ->
//! index) and ask (embed -> search -> answer -> follow-ups), plus session
//! reset/listing and export. The vector index is created lazily from the
//! first embedding batch, so the embedding dimension is discovered rather
//! than configured.

use std::path::Path;
use std::sync::{Arc, RwLock};

use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use dossier_core::config::DossierConfig;
use dossier_core::events::AskEvent;
use dossier_core::types::{Chunk, Document, DocumentSummary, Turn};
use dossier_ingest::chunker::Chunker;
use dossier_vector::embedding::EmbeddingProvider;
use dossier_vector::index::VectorIndex;

use crate::error::ChatError;
use crate::export::SessionExporter;
use crate::followup::FollowupExtractor;
use crate::memory::SessionMemoryStore;
use crate::model::LanguageModel;
use crate::orchestrator::AnswerOrchestrator;
use crate::types::AskOutcome;

/// Fixed answer returned when a question arrives before any ingestion.
pub const NOT_READY_ANSWER: &str =
    "No documents have been ingested yet. Ingest documents before asking questions.";

/// Retrieval-augmented conversational assistant over a set of documents.
///
/// One instance owns the index, the session store, and the orchestration
/// around the injected model and embedding provider. Ingestion must complete
/// before questions are asked against the ingested content; the index is
/// read-only under normal query traffic.
pub struct DocumentAssistant<E: EmbeddingProvider> {
    embedder: E,
    chunker: Chunker,
    orchestrator: AnswerOrchestrator,
    followups: FollowupExtractor,
    memory: Arc<SessionMemoryStore>,
    exporter: SessionExporter,
    index: RwLock<Option<VectorIndex>>,
    top_k: usize,
    max_question_chars: usize,
    memory_enabled: bool,
    events: Option<UnboundedSender<AskEvent>>,
}

impl<E: EmbeddingProvider> DocumentAssistant<E> {
    /// Build an assistant from configuration, a model, and an embedder.
    pub fn new(
        config: &DossierConfig,
        model: Arc<dyn LanguageModel>,
        embedder: E,
    ) -> Result<Self, ChatError> {
        let chunker = Chunker::from_config(&config.chunking)?;
        let memory = Arc::new(SessionMemoryStore::new());
        let orchestrator = AnswerOrchestrator::new(
            Arc::clone(&model),
            Arc::clone(&memory),
            &config.retrieval,
            &config.summary,
        );
        let followups = FollowupExtractor::new(model, &config.followup);

        Ok(Self {
            embedder,
            chunker,
            orchestrator,
            followups,
            memory,
            exporter: SessionExporter,
            index: RwLock::new(None),
            top_k: config.retrieval.top_k,
            max_question_chars: config.chat.max_question_chars,
            memory_enabled: config.chat.memory_enabled,
            events: None,
        })
    }

    /// Attach a progress-event sender for ask-time status updates.
    ///
    /// Emission is fire-and-forget: a dropped receiver is ignored.
    pub fn with_event_sender(mut self, sender: UnboundedSender<AskEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    /// Ingest documents: summarize, chunk, embed, and index each one.
    ///
    /// Documents with no text are skipped with a warning. Returns the
    /// per-document summaries in input order.
    pub async fn ingest(
        &self,
        documents: &[Document],
    ) -> Result<Vec<DocumentSummary>, ChatError> {
        let mut summaries = Vec::new();
        for doc in documents {
            if doc.text.trim().is_empty() {
                warn!(doc_id = %doc.id, "Skipping document with no text");
                continue;
            }

            let summary = self.orchestrator.summarize(&doc.text).await;
            let chunks = self.chunker.chunk_document(doc);
            let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
            let embeddings = self.embedder.embed(&texts).await?;

            let Some(first) = embeddings.first() else {
                warn!(doc_id = %doc.id, "Embedding provider returned no vectors; skipping");
                continue;
            };
            let index = self.index_handle(first.len())?;
            index.add(embeddings, chunks)?;

            info!(doc_id = %doc.id, chunks = texts.len(), "Document indexed");
            summaries.push(DocumentSummary {
                doc_id: doc.id.clone(),
                summary,
            });
        }
        Ok(summaries)
    }

    /// Answer a question against the ingested documents.
    ///
    /// Validates the question, retrieves the nearest chunks, answers
    /// (memory-aware unless disabled), and extracts follow-up suggestions.
    /// Asking before any ingestion returns the not-ready sentinel without
    /// touching session state.
    pub async fn ask(&self, question: &str, session_id: &str) -> Result<AskOutcome, ChatError> {
        if question.trim().is_empty() {
            return Err(ChatError::EmptyQuestion);
        }
        if question.chars().count() > self.max_question_chars {
            return Err(ChatError::QuestionTooLong(self.max_question_chars));
        }

        let index = {
            let guard = self
                .index
                .read()
                .map_err(|e| ChatError::Index(format!("index lock poisoned: {}", e)))?;
            guard.clone()
        };
        let Some(index) = index else {
            return Ok(AskOutcome {
                answer: NOT_READY_ANSWER.to_string(),
                suggestions: Vec::new(),
                sources: Vec::new(),
            });
        };

        self.emit(AskEvent::EmbeddingQuery {
            session_id: session_id.to_string(),
        });
        let query_batch = vec![question.to_string()];
        let mut embeddings = self.embedder.embed(&query_batch).await?;
        if embeddings.is_empty() {
            return Err(ChatError::Embedding(
                "provider returned no vector for the question".to_string(),
            ));
        }
        let query = embeddings.remove(0);

        self.emit(AskEvent::Searching {
            session_id: session_id.to_string(),
        });
        let hits = index.search(&query, self.top_k)?;
        let sources: Vec<Chunk> = hits.into_iter().map(|hit| hit.chunk).collect();

        self.emit(AskEvent::Generating {
            session_id: session_id.to_string(),
            context_chunks: sources.len(),
        });
        let sid = self.memory_enabled.then_some(session_id);
        let answer = self.orchestrator.answer(&sources, question, sid).await;

        self.emit(AskEvent::ExtractingFollowups {
            session_id: session_id.to_string(),
        });
        let suggestions = self.followups.extract(question, &answer).await;

        self.emit(AskEvent::Answered {
            session_id: session_id.to_string(),
            suggestion_count: suggestions.len(),
        });
        Ok(AskOutcome {
            answer,
            suggestions,
            sources,
        })
    }

    /// Empty a session's history in place; the id remains valid.
    pub fn reset_session(&self, session_id: &str) -> Result<(), ChatError> {
        self.memory.clear(session_id)
    }

    /// All known session identifiers.
    pub fn list_sessions(&self) -> Vec<String> {
        self.memory.list()
    }

    /// Snapshot of a session's ordered history.
    pub fn session_history(&self, session_id: &str) -> Result<Vec<Turn>, ChatError> {
        self.memory.get_or_create(session_id)
    }

    /// Export a session's history as the JSON artifact.
    pub fn export_session(
        &self,
        session_id: &str,
        summary: &str,
        path: &Path,
    ) -> Result<(), ChatError> {
        let turns = self.memory.get_or_create(session_id)?;
        self.exporter.export_json(summary, &turns, session_id, path)
    }

    /// Number of chunks currently indexed (0 before ingestion).
    pub fn indexed_chunks(&self) -> usize {
        self.index
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|index| index.len()))
            .unwrap_or(0)
    }

    /// Get the shared index handle, creating the index on first use.
    fn index_handle(&self, dimensions: usize) -> Result<VectorIndex, ChatError> {
        let mut guard = self
            .index
            .write()
            .map_err(|e| ChatError::Index(format!("index lock poisoned: {}", e)))?;
        Ok(guard
            .get_or_insert_with(|| {
                info!(dimensions, "Vector index created");
                VectorIndex::new(dimensions)
            })
            .clone())
    }

    fn emit(&self, event: AskEvent) {
        if let Some(sender) = &self.events {
            let _ = sender.send(event);
        }
    }
}
