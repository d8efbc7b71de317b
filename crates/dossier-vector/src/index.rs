//! In-memory vector index with brute-force squared-Euclidean search.
//!
//! Entries are stored as parallel append-only arrays of embeddings and
//! chunks; there is no deletion or update. Search is an exact O(n*d) scan,
//! which is the right trade for a modest in-memory corpus.

use std::sync::{Arc, RwLock};

use tracing::debug;

use dossier_core::types::Chunk;

use crate::error::VectorError;

/// A single hit returned from a vector search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Squared Euclidean distance to the query (0.0 for an exact match).
    pub distance: f64,
    /// The chunk whose embedding matched.
    pub chunk: Chunk,
}

#[derive(Debug, Default)]
struct IndexInner {
    embeddings: Vec<Vec<f32>>,
    chunks: Vec<Chunk>,
}

/// In-memory vector index over (embedding, chunk) pairs.
///
/// The dimension is fixed at creation; every vector added or queried must
/// match it exactly. Thread-safe via interior RwLock: a single writer during
/// ingestion, any number of readers afterward.
#[derive(Debug, Clone)]
pub struct VectorIndex {
    dimensions: usize,
    inner: Arc<RwLock<IndexInner>>,
}

impl VectorIndex {
    /// Create a new empty index for vectors of the given dimension.
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            inner: Arc::new(RwLock::new(IndexInner::default())),
        }
    }

    /// The fixed embedding dimension of this index.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Append a batch of (embedding, chunk) pairs in call order.
    ///
    /// The batch is validated before any mutation: a count mismatch or a
    /// vector of the wrong dimension rejects the whole batch and leaves the
    /// index unchanged.
    pub fn add(&self, embeddings: Vec<Vec<f32>>, chunks: Vec<Chunk>) -> Result<(), VectorError> {
        if embeddings.len() != chunks.len() {
            return Err(VectorError::LengthMismatch {
                embeddings: embeddings.len(),
                chunks: chunks.len(),
            });
        }
        for embedding in &embeddings {
            if embedding.len() != self.dimensions {
                return Err(VectorError::DimensionMismatch {
                    expected: self.dimensions,
                    actual: embedding.len(),
                });
            }
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|e| VectorError::LockPoisoned(e.to_string()))?;
        inner.embeddings.extend(embeddings);
        inner.chunks.extend(chunks);
        debug!(total = inner.chunks.len(), "Indexed embedding batch");
        Ok(())
    }

    /// Return the `k` stored chunks nearest to the query vector.
    ///
    /// Results are ordered by ascending squared Euclidean distance; ties
    /// keep insertion order (first-inserted wins). An empty index yields an
    /// empty result, and `k` larger than the index returns every entry.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>, VectorError> {
        if query.len() != self.dimensions {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            });
        }

        let inner = self
            .inner
            .read()
            .map_err(|e| VectorError::LockPoisoned(e.to_string()))?;

        let mut scored: Vec<(f64, usize)> = inner
            .embeddings
            .iter()
            .enumerate()
            .map(|(i, embedding)| (squared_euclidean(query, embedding), i))
            .collect();

        // Stable sort keeps insertion order among equal distances.
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        Ok(scored
            .into_iter()
            .map(|(distance, i)| SearchHit {
                distance,
                chunk: inner.chunks[i].clone(),
            })
            .collect())
    }

    /// Return the number of entries currently stored in the index.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.chunks.len()).unwrap_or(0)
    }

    /// Return true if the index contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute squared Euclidean distance between two equal-length vectors.
fn squared_euclidean(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = (*x as f64) - (*y as f64);
            d * d
        })
        .sum()
}
