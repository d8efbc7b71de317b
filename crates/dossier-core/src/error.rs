use thiserror::Error;

/// Top-level error type for the Dossier system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for DossierError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DossierError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Chunking error: {0}")]
    Chunking(String),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for DossierError {
    fn from(err: toml::de::Error) -> Self {
        DossierError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for DossierError {
    fn from(err: toml::ser::Error) -> Self {
        DossierError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DossierError {
    fn from(err: serde_json::Error) -> Self {
        DossierError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Dossier operations.
pub type Result<T> = std::result::Result<T, DossierError>;
