//! Error types for the conversational layer.

use dossier_core::error::DossierError;
use dossier_ingest::error::IngestError;
use dossier_vector::error::VectorError;

/// Errors from the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("question cannot be empty")]
    EmptyQuestion,
    #[error("question exceeds maximum length of {0} characters")]
    QuestionTooLong(usize),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("session error: {0}")]
    Session(String),
    #[error("model error: {0}")]
    Model(String),
    #[error("embedding error: {0}")]
    Embedding(String),
    #[error("index error: {0}")]
    Index(String),
    #[error("export error: {0}")]
    Export(String),
}

impl From<VectorError> for ChatError {
    fn from(err: VectorError) -> Self {
        match err {
            VectorError::Embedding(msg) => ChatError::Embedding(msg),
            other => ChatError::Index(other.to_string()),
        }
    }
}

impl From<IngestError> for ChatError {
    fn from(err: IngestError) -> Self {
        ChatError::Config(err.to_string())
    }
}

impl From<ChatError> for DossierError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Config(msg) => DossierError::Config(msg),
            ChatError::Session(msg) => DossierError::Session(msg),
            ChatError::Model(msg) => DossierError::Model(msg),
            ChatError::Index(msg) | ChatError::Embedding(msg) => DossierError::Index(msg),
            ChatError::Export(msg) => DossierError::Export(msg),
            other => DossierError::Session(other.to_string()),
        }
    }
}
