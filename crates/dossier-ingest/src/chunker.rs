//! Sliding-window text chunking.
//!
//! Splits document text into overlapping fixed-size windows at character
//! offsets `0, s, 2s, ...` where `s = chunk_size - overlap`. Generation stops
//! with the first chunk that reaches the end of the text, so every character
//! is covered exactly once outside the overlaps and no fully-redundant tail
//! chunk is produced.

use dossier_core::config::ChunkingConfig;
use dossier_core::types::{Chunk, Document};

use crate::error::IngestError;

/// Splits text into overlapping chunks of at most `chunk_size` characters.
///
/// Construction validates `overlap < chunk_size`; with `overlap >=
/// chunk_size` the window start would never advance, so the configuration is
/// rejected up front rather than looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    chunk_size: usize,
    overlap: usize,
}

impl Chunker {
    /// Create a chunker, rejecting degenerate window parameters.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self, IngestError> {
        if overlap >= chunk_size {
            return Err(IngestError::InvalidChunking {
                chunk_size,
                overlap,
            });
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Create a chunker from the configuration section.
    pub fn from_config(config: &ChunkingConfig) -> Result<Self, IngestError> {
        Self::new(config.chunk_size, config.overlap)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Lazily chunk `text`, labelling each chunk with `doc_id`.
    ///
    /// The iterator is finite and restartable: calling `chunks` again yields
    /// a fresh pass over the same text. Offsets are character offsets, so
    /// multi-byte text never splits inside a code point.
    pub fn chunks<'a>(&self, doc_id: &'a str, text: &'a str) -> ChunkIter<'a> {
        // Byte offset of every character, for O(1) slicing per chunk.
        let char_starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        ChunkIter {
            doc_id,
            text,
            char_starts,
            chunk_size: self.chunk_size,
            step: self.chunk_size - self.overlap,
            next_start: 0,
            done: false,
        }
    }

    /// Chunk a whole document into a vector.
    pub fn chunk_document(&self, doc: &Document) -> Vec<Chunk> {
        self.chunks(&doc.id, &doc.text).collect()
    }
}

/// Iterator over the chunks of one text.
#[derive(Debug)]
pub struct ChunkIter<'a> {
    doc_id: &'a str,
    text: &'a str,
    char_starts: Vec<usize>,
    chunk_size: usize,
    step: usize,
    next_start: usize,
    done: bool,
}

impl ChunkIter<'_> {
    /// Number of chunks remaining, by the closed-form window count.
    fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }
        let total = self.char_starts.len();
        if total == 0 {
            return 0;
        }
        let left = total - self.next_start;
        if left <= self.chunk_size {
            1
        } else {
            // ceil((left - overlap) / step), with overlap = chunk_size - step.
            (left - (self.chunk_size - self.step)).div_ceil(self.step)
        }
    }
}

impl Iterator for ChunkIter<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.done {
            return None;
        }
        let total = self.char_starts.len();
        if total == 0 {
            self.done = true;
            return None;
        }

        let start = self.next_start;
        let end = (start + self.chunk_size).min(total);
        let byte_start = self.char_starts[start];
        let byte_end = if end == total {
            self.text.len()
        } else {
            self.char_starts[end]
        };

        if end == total {
            self.done = true;
        } else {
            self.next_start = start + self.step;
        }

        Some(Chunk {
            doc_id: self.doc_id.to_string(),
            offset: start,
            text: self.text[byte_start..byte_end].to_string(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for ChunkIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_texts(chunker: &Chunker, text: &str) -> Vec<String> {
        chunker
            .chunks("doc", text)
            .map(|c| c.text)
            .collect()
    }

    /// Reassemble the original text from chunks by dropping each chunk's
    /// leading overlap.
    fn reconstruct(chunks: &[String], overlap: usize) -> String {
        let mut out = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                out.push_str(chunk);
            } else {
                out.extend(chunk.chars().skip(overlap));
            }
        }
        out
    }

    fn expected_count(chars: usize, chunk_size: usize, overlap: usize) -> usize {
        if chars == 0 {
            0
        } else if chars <= chunk_size {
            1
        } else {
            (chars - overlap).div_ceil(chunk_size - overlap)
        }
    }

    // ---- Construction ----

    #[test]
    fn test_overlap_equal_to_chunk_size_rejected() {
        let result = Chunker::new(10, 10);
        assert!(matches!(
            result,
            Err(IngestError::InvalidChunking {
                chunk_size: 10,
                overlap: 10
            })
        ));
    }

    #[test]
    fn test_overlap_greater_than_chunk_size_rejected() {
        assert!(Chunker::new(10, 15).is_err());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        assert!(Chunker::new(0, 0).is_err());
    }

    #[test]
    fn test_zero_overlap_accepted() {
        let chunker = Chunker::new(10, 0).unwrap();
        assert_eq!(chunker.chunk_size(), 10);
        assert_eq!(chunker.overlap(), 0);
    }

    #[test]
    fn test_from_config_defaults() {
        let chunker = Chunker::from_config(&ChunkingConfig::default()).unwrap();
        assert_eq!(chunker.chunk_size(), 500);
        assert_eq!(chunker.overlap(), 50);
    }

    // ---- Basic chunking ----

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunker = Chunker::new(20, 5).unwrap();
        assert!(chunk_texts(&chunker, "").is_empty());
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunker = Chunker::new(20, 5).unwrap();
        let chunks = chunk_texts(&chunker, "short");
        assert_eq!(chunks, vec!["short".to_string()]);
    }

    #[test]
    fn test_text_exactly_chunk_size_single_chunk() {
        let chunker = Chunker::new(5, 2).unwrap();
        let chunks = chunk_texts(&chunker, "abcde");
        assert_eq!(chunks, vec!["abcde".to_string()]);
    }

    #[test]
    fn test_offsets_advance_by_step() {
        let chunker = Chunker::new(20, 5).unwrap();
        let text = "a".repeat(50);
        let offsets: Vec<usize> = chunker.chunks("doc", &text).map(|c| c.offset).collect();
        assert_eq!(offsets, vec![0, 15, 30]);
    }

    #[test]
    fn test_final_chunk_may_be_short() {
        let chunker = Chunker::new(20, 5).unwrap();
        let text = "a".repeat(42);
        let chunks = chunk_texts(&chunker, &text);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 20);
        assert_eq!(chunks[1].len(), 20);
        assert_eq!(chunks[2].len(), 12);
    }

    #[test]
    fn test_no_redundant_tail_chunk() {
        // 31 chars, window 20, overlap 5: a naive loop would emit a third
        // chunk at offset 30 that lies entirely inside the second chunk's
        // span. Coverage is complete after two chunks.
        let chunker = Chunker::new(20, 5).unwrap();
        let text = "a".repeat(31);
        let chunks: Vec<Chunk> = chunker.chunks("doc", &text).collect();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].offset, 15);
        assert_eq!(chunks[1].text.len(), 16);
    }

    #[test]
    fn test_doc_id_carried_through() {
        let chunker = Chunker::new(10, 2).unwrap();
        for chunk in chunker.chunks("report.txt", "some text that spans chunks") {
            assert_eq!(chunk.doc_id, "report.txt");
        }
    }

    // ---- Reconstruction and count properties ----

    #[test]
    fn test_reconstruction_round_trip() {
        let cases = [
            (20usize, 5usize, 7usize),
            (20, 5, 20),
            (20, 5, 21),
            (20, 5, 100),
            (10, 0, 35),
            (7, 6, 40),
            (500, 50, 1234),
        ];
        for (chunk_size, overlap, len) in cases {
            let text: String = ('a'..='z').cycle().take(len).collect();
            let chunker = Chunker::new(chunk_size, overlap).unwrap();
            let chunks = chunk_texts(&chunker, &text);
            assert_eq!(
                reconstruct(&chunks, overlap),
                text,
                "round trip failed for chunk_size={} overlap={} len={}",
                chunk_size,
                overlap,
                len
            );
            assert_eq!(
                chunks.len(),
                expected_count(len, chunk_size, overlap),
                "count mismatch for chunk_size={} overlap={} len={}",
                chunk_size,
                overlap,
                len
            );
        }
    }

    #[test]
    fn test_consecutive_chunks_share_overlap() {
        let chunker = Chunker::new(20, 5).unwrap();
        let text: String = ('a'..='z').cycle().take(60).collect();
        let chunks = chunk_texts(&chunker, &text);
        for pair in chunks.windows(2) {
            let tail: String = pair[0].chars().skip(pair[0].chars().count() - 5).collect();
            let head: String = pair[1].chars().take(5).collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn test_spec_example_cat_mat() {
        // "The cat sat on the mat. The dog ran fast." is 41 characters.
        let text = "The cat sat on the mat. The dog ran fast.";
        let chunker = Chunker::new(20, 5).unwrap();
        let chunks: Vec<Chunk> = chunker.chunks("pets.txt", text).collect();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].offset, 0);
        assert_eq!(chunks[1].offset, 15);
        assert_eq!(chunks[2].offset, 30);
        assert_eq!(chunks[0].text, "The cat sat on the m");
        assert_eq!(chunks[1].text, "he mat. The dog ran ");
        assert_eq!(chunks[2].text, "an fast.");

        let texts: Vec<String> = chunks.into_iter().map(|c| c.text).collect();
        assert_eq!(reconstruct(&texts, 5), text);
    }

    // ---- Laziness and restartability ----

    #[test]
    fn test_iterator_is_restartable() {
        let chunker = Chunker::new(20, 5).unwrap();
        let text = "a".repeat(50);
        let first: Vec<Chunk> = chunker.chunks("doc", &text).collect();
        let second: Vec<Chunk> = chunker.chunks("doc", &text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_size_hint_matches_yielded_count() {
        let chunker = Chunker::new(20, 5).unwrap();
        for len in [0usize, 1, 19, 20, 21, 31, 42, 100] {
            let text = "a".repeat(len);
            let iter = chunker.chunks("doc", &text);
            let hint = iter.len();
            let actual = iter.count();
            assert_eq!(hint, actual, "size hint wrong for len={}", len);
        }
    }

    #[test]
    fn test_partial_consumption() {
        let chunker = Chunker::new(20, 5).unwrap();
        let text = "a".repeat(100);
        let mut iter = chunker.chunks("doc", &text);
        let first = iter.next().unwrap();
        assert_eq!(first.offset, 0);
        let second = iter.next().unwrap();
        assert_eq!(second.offset, 15);
        // Remaining hint shrinks as chunks are consumed.
        assert_eq!(iter.len(), expected_count(100, 20, 5) - 2);
    }

    // ---- Unicode ----

    #[test]
    fn test_multibyte_text_splits_on_char_boundaries() {
        let text = "héllo wörld ünïcode tèxt çôntent hére";
        let chunker = Chunker::new(10, 3).unwrap();
        let chunks = chunk_texts(&chunker, text);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 10);
        }
        assert_eq!(reconstruct(&chunks, 3), text);
    }

    #[test]
    fn test_offsets_are_character_offsets() {
        // Each 'é' is two bytes; offsets must count characters.
        let text = "éééééééééé"; // 10 chars, 20 bytes
        let chunker = Chunker::new(4, 1).unwrap();
        let offsets: Vec<usize> = chunker.chunks("doc", text).map(|c| c.offset).collect();
        assert_eq!(offsets, vec![0, 3, 6]);
    }

    // ---- Document helper ----

    #[test]
    fn test_chunk_document() {
        let doc = Document::new("notes.txt", "a".repeat(42));
        let chunker = Chunker::new(20, 5).unwrap();
        let chunks = chunker.chunk_document(&doc);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.doc_id == "notes.txt"));
    }
}
