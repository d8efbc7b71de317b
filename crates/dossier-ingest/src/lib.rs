//! Document ingestion for Dossier: text extraction and chunking.
//!
//! Turns files into [`Document`]s through a registered-extension extractor
//! table, and documents into overlapping fixed-size [`Chunk`]s ready for
//! embedding.
//!
//! [`Document`]: dossier_core::Document
//! [`Chunk`]: dossier_core::Chunk

pub mod chunker;
pub mod error;
pub mod extract;

pub use chunker::{ChunkIter, Chunker};
pub use error::IngestError;
pub use extract::{default_registry, ExtractorRegistry, PlainTextExtractor, TextExtractor};
