//! Error types for document ingestion.

use dossier_core::error::DossierError;

/// Errors from extraction and chunking.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("chunk overlap {overlap} must be smaller than chunk size {chunk_size}")]
    InvalidChunking { chunk_size: usize, overlap: usize },
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),
    #[error("failed to read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

impl From<IngestError> for DossierError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::InvalidChunking { .. } => DossierError::Chunking(err.to_string()),
            IngestError::UnsupportedExtension(_) | IngestError::Unreadable { .. } => {
                DossierError::Extraction(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_error_display() {
        let err = IngestError::InvalidChunking {
            chunk_size: 10,
            overlap: 10,
        };
        assert_eq!(
            err.to_string(),
            "chunk overlap 10 must be smaller than chunk size 10"
        );

        let err = IngestError::UnsupportedExtension("exe".to_string());
        assert_eq!(err.to_string(), "unsupported file extension: exe");

        let err = IngestError::Unreadable {
            path: "/tmp/x.txt".to_string(),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read /tmp/x.txt: permission denied"
        );
    }

    #[test]
    fn test_chunking_error_maps_to_chunking_variant() {
        let err = IngestError::InvalidChunking {
            chunk_size: 5,
            overlap: 7,
        };
        let top: DossierError = err.into();
        assert!(matches!(top, DossierError::Chunking(_)));
    }

    #[test]
    fn test_extraction_errors_map_to_extraction_variant() {
        let err = IngestError::UnsupportedExtension("bin".to_string());
        let top: DossierError = err.into();
        assert!(matches!(top, DossierError::Extraction(_)));

        let err = IngestError::Unreadable {
            path: "a".to_string(),
            reason: "b".to_string(),
        };
        let top: DossierError = err.into();
        assert!(matches!(top, DossierError::Extraction(_)));
        assert!(top.to_string().contains("failed to read a"));
    }
}
