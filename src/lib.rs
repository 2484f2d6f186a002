//! # strata
//!
//! Recursive text chunking for retrieval-augmented generation (RAG) pipelines.
//!
//! ## The Problem
//!
//! Embedding models have input limits. Documents don't fit. They have to be
//! cut into chunks small enough to embed, but a cut in the middle of a word
//! or a sentence produces garbage embeddings. And a fact that straddles a
//! boundary is lost to both sides unless adjacent chunks share some context.
//!
//! ## The Approach
//!
//! Text has natural boundaries at several levels: paragraphs, lines, words,
//! characters. `strata` tries them in order, from the most natural down:
//!
//! ```text
//! Tiers: ["\n\n", "\n", " ", ""]
//!
//! 1. Split on the coarsest tier present ("\n\n": paragraphs)
//! 2. Pack consecutive small paragraphs into chunks up to chunk_size
//! 3. Any paragraph still too big? Recurse into it with ["\n", " ", ""]
//! 4. ... down to "" (single characters), which always fits
//! ```
//!
//! Packing is greedy with trailing retention: once a chunk is full, its last
//! few fragments (up to `chunk_overlap`) seed the next one.
//!
//! ```text
//! chunk_size = 20, chunk_overlap = 8
//!
//! "The quick brown fox jumps over the lazy dog."
//!
//! Chunk 0: "The quick brown fox"
//! Chunk 1: "fox jumps over the"      <- " fox" carried over
//! Chunk 2: "the lazy dog."
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use strata::{Chunker, ChunkerConfig, LengthFunction, RecursiveChunker};
//!
//! let config = ChunkerConfig::builder(20, 8)
//!     .length_function(LengthFunction::chars())
//!     .build()
//!     .unwrap();
//! let chunker = RecursiveChunker::new(config);
//!
//! let chunks = chunker.chunk("The quick brown fox jumps over the lazy dog.");
//! assert_eq!(chunks[0].content, "The quick brown fox");
//! assert_eq!(chunks[1].content, "fox jumps over the");
//! assert_eq!(chunks[2].content, "the lazy dog.");
//! ```
//!
//! ## Size Guarantees
//!
//! Every chunk fits `chunk_size`, with one exception: a piece produced by the
//! last tier that is already too large on its own. It cannot be subdivided,
//! so it is emitted whole, logged with `tracing::warn!`, and listed in
//! [`ChunkReport::oversized`].
//!
//! ## Building Blocks
//!
//! The stages are public for callers that need a custom pipeline:
//!
//! | Stage | Item |
//! |-------|------|
//! | Tier resolution | [`resolve`] |
//! | Boundary splitting | [`split`] |
//! | Overlap-aware merging | [`merge`] |
//! | Recursive assembly | [`RecursiveChunker`] |

mod chunk;
mod config;
mod error;
mod length;
mod merge;
mod recursive;
mod split;
mod tier;

pub use chunk::{Chunk, ChunkReport};
pub use config::{ChunkerConfig, ChunkerConfigBuilder, DEFAULT_SEPARATORS, MARKDOWN_SEPARATORS};
pub use error::{Error, Result};
pub use length::LengthFunction;
pub use merge::merge;
pub use recursive::RecursiveChunker;
pub use split::{split, Fragment};
pub use tier::{resolve, SeparatorTier};

/// A text chunking strategy.
///
/// Chunkers are immutable once built, so one instance can serve any number
/// of threads:
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
///
/// use strata::{Chunk, Chunker, RecursiveChunker};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<Chunk> {
///     chunker.chunk(text)
/// }
///
/// let chunker = Arc::new(RecursiveChunker::prose(100, 20).unwrap());
/// let handles: Vec<_> = ["first document", "second document"]
///     .into_iter()
///     .map(|doc| {
///         let chunker = Arc::clone(&chunker);
///         thread::spawn(move || chunk_document(chunker.as_ref(), doc))
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap().len(), 1);
/// }
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks, in document order.
    fn chunk(&self, text: &str) -> Vec<Chunk>;

    /// Estimate the number of chunks for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize;
}
