//! Separator tiers and tier resolution.
//!
//! A tier list orders boundary patterns from most to least natural:
//!
//! ```text
//! ["\n\n", "\n", " ", ""]
//!   para   line  word  char
//! ```
//!
//! Resolution picks the first tier that actually occurs in a span. The tiers
//! after it are the fallback for any fragment that is still too large. The
//! empty pattern is terminal: it means "split into single characters" and
//! nothing comes after it.

use std::ops::Range;

use regex::Regex;

use crate::{Error, Result};

#[derive(Debug, Clone)]
enum Matcher {
    /// Split into single characters.
    Atomic,
    Literal(String),
    Regex(Regex),
}

/// One level of the separator hierarchy.
#[derive(Debug, Clone)]
pub struct SeparatorTier {
    pattern: String,
    matcher: Matcher,
}

impl SeparatorTier {
    /// A tier matching `pattern` verbatim.
    pub fn literal(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let matcher = if pattern.is_empty() {
            Matcher::Atomic
        } else {
            Matcher::Literal(pattern.clone())
        };
        Self { pattern, matcher }
    }

    /// A tier matching `pattern` as a regular expression.
    ///
    /// Only non-empty matches are boundaries. A pattern like `x*` splits on
    /// runs of one or more `x` and never between characters; use the empty
    /// tier for per-character splitting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the pattern does not compile.
    pub fn regex(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Ok(Self::literal(pattern));
        }
        let re = Regex::new(&pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        Ok(Self {
            pattern,
            matcher: Matcher::Regex(re),
        })
    }

    /// The pattern as configured.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether this is the terminal "split into characters" tier.
    pub fn is_atomic(&self) -> bool {
        matches!(self.matcher, Matcher::Atomic)
    }

    /// Whether the pattern occurs at least once in `text`.
    ///
    /// The atomic tier matches any non-empty text.
    pub fn occurs_in(&self, text: &str) -> bool {
        match &self.matcher {
            Matcher::Atomic => !text.is_empty(),
            Matcher::Literal(lit) => text.contains(lit.as_str()),
            Matcher::Regex(re) => re.find_iter(text).any(|m| !m.is_empty()),
        }
    }

    /// Byte ranges of every delimiter occurrence in `text`, left to right.
    ///
    /// Zero-width regex matches are skipped. The atomic tier has no
    /// delimiters.
    pub(crate) fn delimiters(&self, text: &str) -> Vec<Range<usize>> {
        match &self.matcher {
            Matcher::Atomic => Vec::new(),
            Matcher::Literal(lit) => text
                .match_indices(lit.as_str())
                .map(|(start, m)| start..start + m.len())
                .collect(),
            Matcher::Regex(re) => re
                .find_iter(text)
                .filter(|m| !m.is_empty())
                .map(|m| m.range())
                .collect(),
        }
    }
}

/// Pick the finest usable tier for `text`.
///
/// Returns the first tier whose pattern occurs in `text` together with the
/// tiers after it. Reaching the atomic tier, or running out of tiers, yields
/// that last tier with an empty remainder.
///
/// ```rust
/// use strata::{resolve, SeparatorTier};
///
/// let tiers = [
///     SeparatorTier::literal("\n\n"),
///     SeparatorTier::literal(" "),
///     SeparatorTier::literal(""),
/// ];
///
/// let (tier, rest) = resolve("two words", &tiers);
/// assert_eq!(tier.pattern(), " ");
/// assert_eq!(rest.len(), 1);
///
/// let (tier, rest) = resolve("oneword", &tiers);
/// assert!(tier.is_atomic());
/// assert!(rest.is_empty());
/// ```
///
/// # Panics
///
/// Panics if `tiers` is empty. Configurations never hold an empty tier list.
pub fn resolve<'t>(
    text: &str,
    tiers: &'t [SeparatorTier],
) -> (&'t SeparatorTier, &'t [SeparatorTier]) {
    assert!(!tiers.is_empty(), "tier list must not be empty");

    for (i, tier) in tiers.iter().enumerate() {
        if tier.is_atomic() {
            return (tier, &[]);
        }
        if tier.occurs_in(text) {
            return (tier, &tiers[i + 1..]);
        }
    }
    (&tiers[tiers.len() - 1], &[])
}
