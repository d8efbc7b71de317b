//! Vector indexing for Dossier - embedding provider trait and brute-force
//! nearest-neighbor index.
//!
//! The index stores embeddings alongside their source chunks in parallel
//! append-only arrays and answers top-k queries by exact squared Euclidean
//! distance. Correctness over scale: the corpus is a modest in-memory
//! document set, so a linear scan beats the complexity of an approximate
//! structure.

pub mod embedding;
pub mod error;
pub mod index;

pub use embedding::{DynEmbeddingProvider, EmbeddingProvider, HashEmbedding};
pub use error::VectorError;
pub use index::{SearchHit, VectorIndex};
