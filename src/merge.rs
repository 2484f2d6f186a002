//! Overlap-aware merging.
//!
//! Greedily packs small fragments into chunks, carrying a trailing window of
//! each chunk forward as the start of the next.
//!
//! ## The Window
//!
//! ```text
//! size = 10, overlap = 4, fragments: "aa" " bb" " cc" " dd" " ee"
//!
//! window           total   next    action
//! [aa, bb, cc]       8     " dd"   8 + 3 > 10: emit "aa bb cc"
//! [cc]               3             drop "aa", " bb" until total <= 4
//! [cc, dd, ee]       9     (end)   emit "cc dd ee"
//! ```
//!
//! ## Join Cost
//!
//! The running total counts each gap between fragments as the size of the
//! text that sat there in the source (the fragment's `joiner`). Fragments
//! aren't concatenated until the window is emitted, but the gap is charged
//! as soon as the fragment joins the window.
//!
//! ## Backtracking
//!
//! After an emit, leading fragments are dropped while the window is larger
//! than the overlap, and also while the window plus the incoming fragment
//! would still overflow. Dropping more only ever shrinks the carried context,
//! so the overlap bound still holds.

use std::collections::VecDeque;

use tracing::trace;

use crate::{ChunkReport, ChunkerConfig, Fragment};

/// Window of fragments being packed into the next chunk.
struct Window<'a, 'c> {
    fragments: VecDeque<Fragment<'a>>,
    total: usize,
    config: &'c ChunkerConfig,
}

impl<'a, 'c> Window<'a, 'c> {
    fn new(config: &'c ChunkerConfig) -> Self {
        Self {
            fragments: VecDeque::new(),
            total: 0,
            config,
        }
    }

    /// What adding `fragment` would add to the total.
    fn cost_of(&self, fragment: &Fragment<'_>) -> usize {
        if self.fragments.is_empty() {
            fragment.len
        } else {
            fragment.len + self.config.measure(fragment.joiner)
        }
    }

    fn push(&mut self, fragment: Fragment<'a>) {
        self.total += self.cost_of(&fragment);
        self.fragments.push_back(fragment);
    }

    fn pop_front(&mut self) {
        let Some(front) = self.fragments.pop_front() else {
            return;
        };
        let gap = self
            .fragments
            .front()
            .map_or(0, |next| self.config.measure(next.joiner));
        self.total = self.total.saturating_sub(front.len + gap);
        if self.fragments.is_empty() {
            self.total = 0;
        }
    }

    /// Concatenate the window, re-inserting each fragment's joiner.
    fn join(&self) -> Option<(String, usize)> {
        let first = self.fragments.front()?;
        let mut content = String::from(first.text);
        for fragment in self.fragments.iter().skip(1) {
            content.push_str(fragment.joiner);
            content.push_str(fragment.text);
        }
        Some((content, first.offset))
    }

    fn emit(&self, out: &mut ChunkReport) {
        if let Some((content, start)) = self.join() {
            out.push(&content, start, self.config);
        }
    }
}

/// Pack `fragments` into chunks no larger than `chunk_size`, appending to `out`.
///
/// Fragments are expected in document order, each already smaller than the
/// chunk size. A fragment that is larger on its own is still emitted, as a
/// single chunk, and reported as oversized.
///
/// ```rust
/// use strata::{merge, split, ChunkReport, ChunkerConfig};
///
/// let config = ChunkerConfig::new(10, 4).unwrap();
/// let tier = &config.tiers()[2]; // " "
/// let fragments = split("aa bb cc dd ee", 0, tier, true, config.length());
///
/// let mut report = ChunkReport::default();
/// merge(&fragments, &config, &mut report);
///
/// let chunks: Vec<_> = report.chunks.iter().map(|c| c.content.as_str()).collect();
/// assert_eq!(chunks, ["aa bb cc", "cc dd ee"]);
/// ```
pub fn merge(fragments: &[Fragment<'_>], config: &ChunkerConfig, out: &mut ChunkReport) {
    let chunk_size = config.chunk_size();
    let chunk_overlap = config.chunk_overlap();
    let mut window = Window::new(config);

    for &fragment in fragments {
        let overflows = window.total + window.cost_of(&fragment) > chunk_size;
        if overflows && !window.fragments.is_empty() {
            window.emit(out);

            while window.total > chunk_overlap
                || (window.total > 0 && window.total + window.cost_of(&fragment) > chunk_size)
            {
                window.pop_front();
            }
            trace!(
                carried = window.fragments.len(),
                total = window.total,
                "window slid"
            );
        }
        window.push(fragment);
    }

    window.emit(out);
}
