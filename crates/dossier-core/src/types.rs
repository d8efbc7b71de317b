use serde::{Deserialize, Serialize};

// =============================================================================
// Documents and chunks
// =============================================================================

/// A source document submitted for ingestion.
///
/// Produced by a text extractor outside the core; immutable once constructed.
/// The `id` is the source path or display name and is carried through to the
/// chunks derived from the document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Source identifier (path or name).
    pub id: String,
    /// Full extracted text.
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A bounded-length substring of a document, the unit of retrieval.
///
/// `offset` is a character offset (not a byte offset) into the source
/// document. Chunks from one document, ordered by offset, cover the full text
/// with overlapping boundaries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Identifier of the source document.
    pub doc_id: String,
    /// Character offset of this chunk within the source document.
    pub offset: usize,
    /// The chunk text, at most `chunk_size` characters.
    pub text: String,
}

/// A per-document summary produced during ingestion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub doc_id: String,
    pub summary: String,
}

// =============================================================================
// Conversation turns
// =============================================================================

/// The speaker of a conversation turn.
///
/// Serialized lowercase so exports produce `"user"` / `"assistant"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single conversation turn within a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// =============================================================================
// Export
// =============================================================================

/// Persisted export artifact for a Q&A session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionExport {
    pub summary: String,
    pub chat_history: Vec<Turn>,
    /// RFC 3339 timestamp of the export.
    pub timestamp: String,
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new("notes.txt", "some text");
        assert_eq!(doc.id, "notes.txt");
        assert_eq!(doc.text, "some text");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_role_deserializes_lowercase() {
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
        let role: Role = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, Role::Assistant);
    }

    #[test]
    fn test_turn_constructors() {
        let t = Turn::user("hello");
        assert_eq!(t.role, Role::User);
        assert_eq!(t.content, "hello");

        let t = Turn::assistant("hi there");
        assert_eq!(t.role, Role::Assistant);
        assert_eq!(t.content, "hi there");
    }

    #[test]
    fn test_chunk_round_trip() {
        let chunk = Chunk {
            doc_id: "report.txt".to_string(),
            offset: 450,
            text: "the chunk body".to_string(),
        };
        let json = serde_json::to_string(&chunk).unwrap();
        let back: Chunk = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chunk);
    }

    #[test]
    fn test_session_export_schema_field_names() {
        let export = SessionExport {
            summary: "a summary".to_string(),
            chat_history: vec![Turn::user("q"), Turn::assistant("a")],
            timestamp: "2025-01-01T00:00:00+00:00".to_string(),
            session_id: "default".to_string(),
        };
        let json = serde_json::to_value(&export).unwrap();
        assert!(json.get("summary").is_some());
        assert!(json.get("chat_history").is_some());
        assert!(json.get("timestamp").is_some());
        assert!(json.get("session_id").is_some());
        assert_eq!(json["chat_history"][0]["role"], "user");
        assert_eq!(json["chat_history"][1]["role"], "assistant");
    }
}
