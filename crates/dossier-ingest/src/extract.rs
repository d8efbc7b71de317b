//! Document text extraction behind a registered-extension table.
//!
//! Extraction is polymorphic over file variants: each lowercase extension
//! maps to one [`TextExtractor`]. Unknown extensions fail closed — a single
//! extraction returns an error, while batch extraction skips the file and
//! keeps going. Only the plain-text extractor ships in this crate; pdf, docx,
//! and csv handlers are collaborators registered by the host.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use dossier_core::types::Document;

use crate::error::IngestError;

/// Extracts the full text of one file.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String, IngestError>;
}

/// Reads a file as UTF-8 text, replacing invalid sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, IngestError> {
        let bytes = std::fs::read(path).map_err(|e| IngestError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Maps lowercase file extensions to their extractors.
#[derive(Default)]
pub struct ExtractorRegistry {
    handlers: HashMap<String, Box<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create an empty registry with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for an extension (stored lowercase, no dot).
    ///
    /// Overwrites any existing handler for the same extension.
    pub fn register(&mut self, extension: &str, handler: Box<dyn TextExtractor>) {
        self.handlers
            .insert(extension.to_ascii_lowercase(), handler);
    }

    /// Whether a handler is registered for the extension.
    pub fn supports(&self, extension: &str) -> bool {
        self.handlers.contains_key(&extension.to_ascii_lowercase())
    }

    /// Registered extensions, unordered.
    pub fn extensions(&self) -> Vec<&str> {
        self.handlers.keys().map(|k| k.as_str()).collect()
    }

    /// Extract text from one file, failing on unknown extensions.
    pub fn extract(&self, path: &Path) -> Result<String, IngestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let handler = self
            .handlers
            .get(&ext)
            .ok_or(IngestError::UnsupportedExtension(ext))?;
        handler.extract(path)
    }

    /// Extract a batch of files into documents.
    ///
    /// Unsupported extensions and unreadable files are skipped with a
    /// warning; a bad file never aborts the batch. Document order follows
    /// the input order of the paths that succeeded.
    pub fn extract_all(&self, paths: &[PathBuf]) -> Vec<Document> {
        let mut documents = Vec::new();
        for path in paths {
            match self.extract(path) {
                Ok(text) => {
                    debug!(path = %path.display(), chars = text.chars().count(), "Extracted document");
                    documents.push(Document::new(path.display().to_string(), text));
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping document");
                }
            }
        }
        documents
    }
}

/// Registry with the built-in plain-text handler installed for `txt`.
pub fn default_registry() -> ExtractorRegistry {
    let mut registry = ExtractorRegistry::new();
    registry.register("txt", Box::new(PlainTextExtractor));
    registry
}
