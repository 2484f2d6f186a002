//! Pluggable length metrics.
//!
//! Every size decision the chunker makes (is this fragment small enough, does
//! the window still fit, how much overlap is retained) goes through a single
//! [`LengthFunction`]. Swapping the metric changes what "size" means without
//! touching the algorithm:
//!
//! | Metric | Counts | Typical use |
//! |--------|--------|-------------|
//! | [`LengthFunction::chars`] | Unicode scalar values | Default, model-agnostic |
//! | [`LengthFunction::bytes`] | UTF-8 bytes | Storage limits |
//! | [`LengthFunction::graphemes`] | User-perceived characters | Display budgets |
//! | [`LengthFunction::words`] | UAX #29 words | Rough token proxy |
//!
//! For a real tokenizer, wrap it with [`LengthFunction::new`].

use std::fmt;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

/// A shared, thread-safe function mapping a text span to its size.
///
/// ```rust
/// use strata::LengthFunction;
///
/// let chars = LengthFunction::chars();
/// assert_eq!(chars.measure("héllo"), 5);
///
/// let bytes = LengthFunction::bytes();
/// assert_eq!(bytes.measure("héllo"), 6);
///
/// // Anything that maps &str to usize works
/// let tokens = LengthFunction::new(|s: &str| s.split_whitespace().count());
/// assert_eq!(tokens.measure("one two three"), 3);
/// ```
#[derive(Clone)]
pub struct LengthFunction {
    name: &'static str,
    measure: Arc<dyn Fn(&str) -> usize + Send + Sync>,
}

impl LengthFunction {
    /// Wrap an arbitrary measuring function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        Self {
            name: "custom",
            measure: Arc::new(f),
        }
    }

    /// Count Unicode scalar values.
    #[must_use]
    pub fn chars() -> Self {
        Self {
            name: "chars",
            measure: Arc::new(|s: &str| s.chars().count()),
        }
    }

    /// Count UTF-8 bytes.
    #[must_use]
    pub fn bytes() -> Self {
        Self {
            name: "bytes",
            measure: Arc::new(str::len),
        }
    }

    /// Count extended grapheme clusters.
    #[must_use]
    pub fn graphemes() -> Self {
        Self {
            name: "graphemes",
            measure: Arc::new(|s: &str| s.graphemes(true).count()),
        }
    }

    /// Count words per UAX #29, ignoring punctuation and whitespace.
    ///
    /// Whitespace-only spans measure zero, so separators are free under this
    /// metric.
    #[must_use]
    pub fn words() -> Self {
        Self {
            name: "words",
            measure: Arc::new(|s: &str| s.unicode_words().count()),
        }
    }

    /// Measure a span.
    #[inline]
    pub fn measure(&self, text: &str) -> usize {
        (self.measure)(text)
    }

    /// Short name of the metric, used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LengthFunction {
    fn default() -> Self {
        Self::chars()
    }
}

impl fmt::Debug for LengthFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LengthFunction").field(&self.name).finish()
    }
}
