//! Chunker configuration.
//!
//! ## Size and Overlap
//!
//! `chunk_size` is the budget every chunk must fit; `chunk_overlap` is how
//! much trailing context carries into the next chunk. Overlap must be
//! strictly smaller than size, otherwise the window could never advance.
//!
//! | Overlap | Storage | Retrieval | Risk |
//! |---------|---------|-----------|------|
//! | 0% | Minimal | Poor at boundaries | Info loss |
//! | 10-20% | Low | Good | Sweet spot |
//! | 50%+ | High | Redundant | Wasted compute |
//!
//! ## Separator Tiers
//!
//! Tiers are tried most natural first. The defaults cover prose:
//!
//! ```text
//! ["\n\n", "\n", " ", ""]
//! ```
//!
//! For Markdown, split on headings before paragraphs:
//!
//! ```text
//! ["\n## ", "\n### ", "\n\n", "\n", " ", ""]
//! ```
//!
//! Keep the empty tier last: it is the character-level fallback that lets
//! any text be packed, and without it an unsplittable span is emitted whole.

use crate::{Error, LengthFunction, Result, SeparatorTier};

/// Default separator tiers: paragraph, line, word, character.
pub const DEFAULT_SEPARATORS: &[&str] = &["\n\n", "\n", " ", ""];

/// Heading-aware separator tiers for Markdown.
pub const MARKDOWN_SEPARATORS: &[&str] = &["\n## ", "\n### ", "\n\n", "\n", " ", ""];

/// Validated settings for a [`RecursiveChunker`](crate::RecursiveChunker).
///
/// ## Example
///
/// ```rust
/// use strata::{ChunkerConfig, LengthFunction};
///
/// let config = ChunkerConfig::builder(500, 50)
///     .separators(&["\n\n", "\n", ". ", " ", ""])
///     .length_function(LengthFunction::bytes())
///     .add_start_index(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.chunk_size(), 500);
/// assert_eq!(config.tiers().len(), 5);
///
/// // Overlap must be smaller than size
/// assert!(ChunkerConfig::new(3, 5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    chunk_size: usize,
    chunk_overlap: usize,
    length: LengthFunction,
    keep_separator: bool,
    strip_edges: bool,
    add_start_index: bool,
    separator_is_regex: bool,
    tiers: Vec<SeparatorTier>,
}

impl ChunkerConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder(chunk_size: usize, chunk_overlap: usize) -> ChunkerConfigBuilder {
        ChunkerConfigBuilder::new(chunk_size, chunk_overlap)
    }

    /// A configuration with default tiers and settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size == 0` or `chunk_overlap >= chunk_size`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        Self::builder(chunk_size, chunk_overlap).build()
    }

    /// Default tiers for prose: paragraphs, lines, words, characters.
    ///
    /// # Errors
    ///
    /// Same as [`ChunkerConfig::new`].
    pub fn prose(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        Self::builder(chunk_size, chunk_overlap)
            .separators(DEFAULT_SEPARATORS)
            .build()
    }

    /// Heading-aware tiers for Markdown.
    ///
    /// # Errors
    ///
    /// Same as [`ChunkerConfig::new`].
    pub fn markdown(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        Self::builder(chunk_size, chunk_overlap)
            .separators(MARKDOWN_SEPARATORS)
            .build()
    }

    /// Maximum size of a chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Maximum size carried from one chunk into the next.
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// The size metric.
    pub fn length(&self) -> &LengthFunction {
        &self.length
    }

    /// Measure `text` with the configured metric.
    #[inline]
    pub fn measure(&self, text: &str) -> usize {
        self.length.measure(text)
    }

    /// Whether delimiters are reattached to the fragment that follows them.
    pub fn keep_separator(&self) -> bool {
        self.keep_separator
    }

    /// Whether chunks are trimmed of leading and trailing whitespace.
    pub fn strip_edges(&self) -> bool {
        self.strip_edges
    }

    /// Whether chunks record their start offset.
    pub fn add_start_index(&self) -> bool {
        self.add_start_index
    }

    /// Whether separator patterns are regular expressions.
    pub fn separator_is_regex(&self) -> bool {
        self.separator_is_regex
    }

    /// The separator tiers, most natural first.
    pub fn tiers(&self) -> &[SeparatorTier] {
        &self.tiers
    }
}

impl Default for ChunkerConfig {
    /// 4000 characters per chunk, 200 of overlap, prose tiers.
    fn default() -> Self {
        Self {
            chunk_size: 4000,
            chunk_overlap: 200,
            length: LengthFunction::chars(),
            keep_separator: true,
            strip_edges: true,
            add_start_index: false,
            separator_is_regex: false,
            tiers: DEFAULT_SEPARATORS
                .iter()
                .map(|&s| SeparatorTier::literal(s))
                .collect(),
        }
    }
}

/// Builder for [`ChunkerConfig`].
///
/// Validation happens once, in [`build`](ChunkerConfigBuilder::build).
#[derive(Debug, Clone)]
pub struct ChunkerConfigBuilder {
    chunk_size: usize,
    chunk_overlap: usize,
    length: LengthFunction,
    keep_separator: bool,
    strip_edges: bool,
    add_start_index: bool,
    separator_is_regex: bool,
    separators: Vec<String>,
}

impl ChunkerConfigBuilder {
    fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            length: LengthFunction::chars(),
            keep_separator: true,
            strip_edges: true,
            add_start_index: false,
            separator_is_regex: false,
            separators: DEFAULT_SEPARATORS.iter().map(|&s| s.to_string()).collect(),
        }
    }

    /// Use a different size metric.
    #[must_use]
    pub fn length_function(mut self, length: LengthFunction) -> Self {
        self.length = length;
        self
    }

    /// Reattach delimiters to the following fragment (default `true`).
    #[must_use]
    pub fn keep_separator(mut self, keep: bool) -> Self {
        self.keep_separator = keep;
        self
    }

    /// Trim whitespace from both ends of every chunk (default `true`).
    #[must_use]
    pub fn strip_edges(mut self, strip: bool) -> Self {
        self.strip_edges = strip;
        self
    }

    /// Record each chunk's start offset (default `false`).
    #[must_use]
    pub fn add_start_index(mut self, add: bool) -> Self {
        self.add_start_index = add;
        self
    }

    /// Treat separators as regular expressions (default `false`).
    #[must_use]
    pub fn separator_is_regex(mut self, is_regex: bool) -> Self {
        self.separator_is_regex = is_regex;
        self
    }

    /// Replace the separator tiers. An empty list restores the defaults.
    #[must_use]
    pub fn separators<S: AsRef<str>>(mut self, separators: &[S]) -> Self {
        self.separators = if separators.is_empty() {
            DEFAULT_SEPARATORS.iter().map(|&s| s.to_string()).collect()
        } else {
            separators.iter().map(|s| s.as_ref().to_string()).collect()
        };
        self
    }

    /// Validate and compile the configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidChunkSize`] if `chunk_size == 0`
    /// - [`Error::OverlapNotLessThanSize`] if `chunk_overlap >= chunk_size`
    /// - [`Error::InvalidPattern`] if a regex separator does not compile
    pub fn build(self) -> Result<ChunkerConfig> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidChunkSize(self.chunk_size));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(Error::OverlapNotLessThanSize {
                size: self.chunk_size,
                overlap: self.chunk_overlap,
            });
        }

        let tiers = if self.separator_is_regex {
            self.separators
                .into_iter()
                .map(SeparatorTier::regex)
                .collect::<Result<Vec<_>>>()?
        } else {
            self.separators
                .into_iter()
                .map(SeparatorTier::literal)
                .collect()
        };

        Ok(ChunkerConfig {
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
            length: self.length,
            keep_separator: self.keep_separator,
            strip_edges: self.strip_edges,
            add_start_index: self.add_start_index,
            separator_is_regex: self.separator_is_regex,
            tiers,
        })
    }
}
