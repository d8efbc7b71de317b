//! Session export to persisted artifacts.
//!
//! Two formats: the JSON export schema consumed by other tooling, and a
//! plain-text Q&A log for humans. Both take the document summary and the
//! session's ordered turns; ordering is preserved verbatim.

use std::path::Path;

use chrono::Utc;
use tracing::info;

use dossier_core::types::{Role, SessionExport, Turn};

use crate::error::ChatError;

/// Writes session artifacts to disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionExporter;

impl SessionExporter {
    /// Write the JSON export schema:
    /// `{ summary, chat_history: [{role, content}], timestamp, session_id }`.
    pub fn export_json(
        &self,
        summary: &str,
        turns: &[Turn],
        session_id: &str,
        path: &Path,
    ) -> Result<(), ChatError> {
        let export = SessionExport {
            summary: summary.to_string(),
            chat_history: turns.to_vec(),
            timestamp: Utc::now().to_rfc3339(),
            session_id: session_id.to_string(),
        };
        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| ChatError::Export(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| ChatError::Export(e.to_string()))?;
        info!(path = %path.display(), turns = turns.len(), "Session exported as JSON");
        Ok(())
    }

    /// Write the plain-text Q&A log.
    pub fn export_text(
        &self,
        summary: &str,
        turns: &[Turn],
        path: &Path,
    ) -> Result<(), ChatError> {
        let mut out = String::new();
        out.push_str("Summary:\n");
        out.push_str(summary);
        out.push_str("\n\nQ&A Log:\n");
        for turn in turns {
            match turn.role {
                Role::User => {
                    out.push_str("Q: ");
                    out.push_str(&turn.content);
                    out.push('\n');
                }
                Role::Assistant => {
                    out.push_str("A: ");
                    out.push_str(&turn.content);
                    out.push_str("\n\n");
                }
            }
        }
        std::fs::write(path, out).map_err(|e| ChatError::Export(e.to_string()))?;
        info!(path = %path.display(), turns = turns.len(), "Session exported as text");
        Ok(())
    }
}
