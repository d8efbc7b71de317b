//! Embedding provider trait and test implementation.
//!
//! The real provider (sentence-transformer inference, remote API, etc.) lives
//! outside the core and is injected at composition time. `HashEmbedding`
//! provides deterministic hash-based vectors so retrieval can be tested
//! without a model.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::VectorError;

/// Service for generating text embeddings in batches.
///
/// Implementations convert texts into fixed-dimensional vectors capturing
/// semantic content. The dimension is a property of the provider and must
/// stay constant for the lifetime of any index built from it.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of texts, one vector per input, in input order.
    fn embed(
        &self,
        texts: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<Vec<f32>>, VectorError>> + Send;

    /// Return the dimensionality of vectors produced by this provider.
    fn dimensions(&self) -> usize;
}

/// Object-safe version of [`EmbeddingProvider`] for dynamic dispatch.
///
/// Because `EmbeddingProvider::embed` returns `impl Future` it is not
/// object-safe. This trait uses a boxed future instead, allowing
/// `Box<dyn DynEmbeddingProvider>` to be stored in structs without generics.
///
/// A blanket implementation is provided so that every `EmbeddingProvider`
/// automatically implements `DynEmbeddingProvider`.
pub trait DynEmbeddingProvider: Send + Sync {
    /// Embed a batch of texts (boxed future).
    fn embed_boxed<'a>(
        &'a self,
        texts: &'a [String],
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<Vec<f32>>, VectorError>> + Send + 'a>,
    >;

    /// Return the dimensionality of vectors produced by this provider.
    fn dimensions(&self) -> usize;
}

/// Blanket impl: any `EmbeddingProvider` automatically implements
/// `DynEmbeddingProvider`.
impl<T: EmbeddingProvider> DynEmbeddingProvider for T {
    fn embed_boxed<'a>(
        &'a self,
        texts: &'a [String],
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<Vec<f32>>, VectorError>> + Send + 'a>,
    > {
        Box::pin(self.embed(texts))
    }

    fn dimensions(&self) -> usize {
        EmbeddingProvider::dimensions(self)
    }
}

// ---------------------------------------------------------------------------
// HashEmbedding - deterministic hash-based vectors for testing
// ---------------------------------------------------------------------------

/// Embedding provider returning deterministic 384-dimensional vectors.
///
/// The output is derived from a hash of the input text, so identical inputs
/// always produce identical outputs and the identical-text query retrieves
/// its own chunk at distance zero. Vectors are L2-normalized.
#[derive(Debug, Clone, Default)]
pub struct HashEmbedding;

impl HashEmbedding {
    pub fn new() -> Self {
        Self
    }

    fn hash_to_vector(text: &str) -> Vec<f32> {
        let mut result = Vec::with_capacity(384);
        for i in 0..384 {
            let mut hasher = DefaultHasher::new();
            text.hash(&mut hasher);
            i.hash(&mut hasher);
            let h = hasher.finish();
            let val = ((h as f64) / (u64::MAX as f64)) * 2.0 - 1.0;
            result.push(val as f32);
        }

        // L2-normalize to unit vectors, matching production sentence
        // transformer output.
        let norm: f32 = result.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for val in &mut result {
                *val /= norm;
            }
        }

        result
    }
}

impl EmbeddingProvider for HashEmbedding {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, VectorError> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            if text.is_empty() {
                return Err(VectorError::Embedding(
                    "cannot embed empty text".to_string(),
                ));
            }
            vectors.push(Self::hash_to_vector(text));
        }
        Ok(vectors)
    }

    fn dimensions(&self) -> usize {
        384
    }
}
