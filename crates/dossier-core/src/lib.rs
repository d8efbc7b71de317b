//! Shared types, errors, configuration, and events for the Dossier system.
//!
//! Dossier is a retrieval-augmented conversational document assistant:
//! documents are split into overlapping chunks, indexed by embedding, and
//! queried through a session-aware answer orchestrator. This crate holds the
//! pieces every other crate depends on.

pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use config::DossierConfig;
pub use error::{DossierError, Result};
pub use events::AskEvent;
pub use types::{Chunk, Document, DocumentSummary, Role, SessionExport, Turn};
