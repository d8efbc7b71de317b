//! Error types for embedding and indexing.

use dossier_core::error::DossierError;

/// Errors from the vector subsystem.
#[derive(Debug, thiserror::Error)]
pub enum VectorError {
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("embedding/chunk count mismatch: {embeddings} embeddings, {chunks} chunks")]
    LengthMismatch { embeddings: usize, chunks: usize },
    #[error("embedding error: {0}")]
    Embedding(String),
    #[error("index lock poisoned: {0}")]
    LockPoisoned(String),
}

impl From<VectorError> for DossierError {
    fn from(err: VectorError) -> Self {
        DossierError::Index(err.to_string())
    }
}
