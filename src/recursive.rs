//! Recursive chunk assembly.
//!
//! Tries progressively finer separators until every piece fits.
//!
//! ## The Algorithm
//!
//! Given tiers `["\n\n", "\n", " ", ""]` and `chunk_size = 100`:
//!
//! ```text
//! 1. Resolve the coarsest tier present in the text, e.g. "\n\n"
//! 2. Split on it into fragments
//! 3. Runs of fragments under 100 are merged with overlap
//! 4. A fragment of 100 or more is recursed into with the remaining
//!    tiers ["\n", " ", ""]
//! 5. At the "" tier every fragment is a single character; one that
//!    is still too large is emitted on its own
//! ```
//!
//! Results are concatenated in document order. Recursion depth is bounded by
//! the number of tiers.
//!
//! ## Why Recursive?
//!
//! A paragraph boundary is better than a line boundary, which is better
//! than a word boundary. Recursing only into the fragments that don't fit
//! keeps every other part of the document at the highest structural level
//! available.

use tracing::{debug, trace};

use crate::{
    merge, resolve, split, Chunk, ChunkReport, Chunker, ChunkerConfig, Result, SeparatorTier,
};

/// Recursive separator-tier chunker with overlap.
///
/// ## Example
///
/// ```rust
/// use strata::{Chunker, ChunkerConfig, RecursiveChunker};
///
/// let chunker = RecursiveChunker::new(ChunkerConfig::new(40, 10).unwrap());
/// let text = "Paragraph one.\n\nParagraph two is longer and needs to be split up.";
/// let chunks = chunker.chunk(text);
///
/// assert_eq!(chunks[0].content, "Paragraph one.");
/// assert!(chunks.iter().all(|c| c.len <= 40));
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    config: ChunkerConfig,
}

impl RecursiveChunker {
    /// Create a chunker from a validated configuration.
    #[must_use]
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Create a chunker with default prose tiers.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_overlap >= chunk_size` or `chunk_size == 0`.
    pub fn prose(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        ChunkerConfig::prose(chunk_size, chunk_overlap).map(Self::new)
    }

    /// Create a chunker with heading-aware Markdown tiers.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_overlap >= chunk_size` or `chunk_size == 0`.
    pub fn markdown(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        ChunkerConfig::markdown(chunk_size, chunk_overlap).map(Self::new)
    }

    /// The configuration this chunker runs with.
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Chunk `text`, also reporting which chunks exceed the size budget.
    ///
    /// With edge stripping on, the input is trimmed first so that surrounding
    /// whitespace never counts against the budget. Start offsets still refer
    /// to the untrimmed input.
    pub fn chunk_with_report(&self, text: &str) -> ChunkReport {
        let mut report = ChunkReport::default();
        let (span, base) = if self.config.strip_edges() {
            let trimmed = text.trim_start();
            (trimmed.trim_end(), text.len() - trimmed.len())
        } else {
            (text, 0)
        };
        if span.is_empty() {
            return report;
        }

        self.assemble(span, base, self.config.tiers(), &mut report);

        debug!(
            input = text.len(),
            chunks = report.chunks.len(),
            oversized = report.oversized.len(),
            "chunked text"
        );
        report
    }

    /// Chunk `text` and return only the chunk contents.
    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.chunk(text).into_iter().map(|c| c.content).collect()
    }

    /// Chunk one span against one tier list, appending to `out`.
    ///
    /// `base` is the byte offset of `text` in the original document.
    fn assemble(&self, text: &str, base: usize, tiers: &[SeparatorTier], out: &mut ChunkReport) {
        let config = &self.config;
        let (tier, remaining) = resolve(text, tiers);
        trace!(
            tier = tier.pattern(),
            remaining = remaining.len(),
            span = text.len(),
            "resolved separator tier"
        );

        let fragments = split(text, base, tier, config.keep_separator(), config.length());

        let mut run_start = 0;
        for (i, fragment) in fragments.iter().enumerate() {
            if fragment.len < config.chunk_size() {
                continue;
            }

            merge(&fragments[run_start..i], config, out);
            run_start = i + 1;

            if remaining.is_empty() {
                out.push(fragment.text, fragment.offset, config);
            } else {
                self.assemble(fragment.text, fragment.offset, remaining, out);
            }
        }
        merge(&fragments[run_start..], config, out);
    }
}

impl Default for RecursiveChunker {
    fn default() -> Self {
        Self::new(ChunkerConfig::default())
    }
}

impl Chunker for RecursiveChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        self.chunk_with_report(text).chunks
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        let step = self.config.chunk_size() - self.config.chunk_overlap();
        text_len.div_ceil(step).max(1)
    }
}
