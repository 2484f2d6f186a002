//! Chunk records: the unit of output.

use tracing::warn;

use crate::ChunkerConfig;

/// A bounded piece of text, ready for embedding or indexing.
///
/// ## Overlap
///
/// Adjacent chunks may share text. The tail of one chunk reappears at the
/// head of the next, bounded by the configured overlap:
///
/// ```text
/// Original: "supercalifragilistic"    size 10, overlap 2
/// Chunk 0:  "supercalif"
/// Chunk 1:          "ifragilist"      <- "if" carried over
/// Chunk 2:                  "stic"
/// ```
///
/// ## Start Offsets
///
/// When start-index tracking is on, `start` is the byte offset in the
/// original document where the chunk's first fragment begins. It is taken
/// before edge stripping, so it may point at whitespace that `content` no
/// longer contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk text.
    pub content: String,
    /// Size of `content` under the configured length function.
    pub len: usize,
    /// Byte offset of the chunk in the original document, if tracked.
    pub start: Option<usize>,
    /// Zero-based position of this chunk in the output sequence.
    pub index: usize,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(content: impl Into<String>, len: usize, start: Option<usize>, index: usize) -> Self {
        Self {
            content: content.into(),
            len,
            start,
            index,
        }
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chunk {{ index: {}, len: {}", self.index, self.len)?;
        if let Some(start) = self.start {
            write!(f, ", start: {start}")?;
        }
        write!(f, " }}")
    }
}

/// Chunks plus the size-budget violations encountered producing them.
///
/// A chunk only exceeds `chunk_size` when it holds a single piece that could
/// not be subdivided further. Each such chunk is listed in `oversized` and
/// logged at warn level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkReport {
    /// The chunks, in document order.
    pub chunks: Vec<Chunk>,
    /// Indices into `chunks` of every chunk larger than `chunk_size`.
    pub oversized: Vec<usize>,
}

impl ChunkReport {
    /// Whether every chunk fits the size budget.
    #[must_use]
    pub fn within_budget(&self) -> bool {
        self.oversized.is_empty()
    }

    /// Iterate over the oversized chunks.
    pub fn oversized_chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.oversized.iter().filter_map(|&i| self.chunks.get(i))
    }

    /// Append `content` as the next chunk.
    ///
    /// Strips edges when configured and drops the chunk if nothing is left.
    /// `start` is the pre-strip byte offset of `content` in the document.
    pub(crate) fn push(&mut self, content: &str, start: usize, config: &ChunkerConfig) {
        let content = if config.strip_edges() {
            content.trim()
        } else {
            content
        };
        if content.is_empty() {
            return;
        }

        let index = self.chunks.len();
        let len = config.measure(content);
        if len > config.chunk_size() {
            warn!(
                size = len,
                chunk_size = config.chunk_size(),
                index,
                "created a chunk larger than the configured size"
            );
            self.oversized.push(index);
        }

        let start = config.add_start_index().then_some(start);
        self.chunks.push(Chunk::new(content, len, start, index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let chunk = Chunk::new("hello", 5, None, 3);
        assert_eq!(chunk.to_string(), "Chunk { index: 3, len: 5 }");

        let chunk = Chunk::new("hello", 5, Some(42), 0);
        assert_eq!(chunk.to_string(), "Chunk { index: 0, len: 5, start: 42 }");
    }

    #[test]
    fn test_push_strips_and_drops_empty() {
        let config = ChunkerConfig::new(10, 0).unwrap();
        let mut report = ChunkReport::default();
        report.push("  \n ", 0, &config);
        assert!(report.chunks.is_empty());

        report.push("  hi  ", 4, &config);
        assert_eq!(report.chunks[0].content, "hi");
        assert_eq!(report.chunks[0].len, 2);
        assert_eq!(report.chunks[0].start, None);
    }

    #[test]
    fn test_push_records_start_and_oversize() {
        let config = ChunkerConfig::builder(3, 0)
            .add_start_index(true)
            .strip_edges(false)
            .build()
            .unwrap();
        let mut report = ChunkReport::default();
        report.push(" ab", 7, &config);
        report.push("abcd", 10, &config);

        assert_eq!(report.chunks[0].content, " ab");
        assert_eq!(report.chunks[0].start, Some(7));
        assert_eq!(report.chunks[1].index, 1);
        assert_eq!(report.oversized, vec![1]);
    }

    #[test]
    fn test_report_oversized() {
        let report = ChunkReport {
            chunks: vec![Chunk::new("ok", 2, None, 0), Chunk::new("toolong", 7, None, 1)],
            oversized: vec![1],
        };
        assert!(!report.within_budget());
        let big: Vec<_> = report.oversized_chunks().map(|c| c.content.as_str()).collect();
        assert_eq!(big, ["toolong"]);
    }
}
