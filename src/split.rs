//! Boundary splitting.
//!
//! Splits a span at every occurrence of one separator tier.
//!
//! ## Delimiter Placement
//!
//! With `keep_separator`, each delimiter is glued to the front of the fragment
//! that follows it, never the back of the one before:
//!
//! ```text
//! text:       "alpha beta gamma"     separator " "
//!
//! tokens:     ("alpha", " ") ("beta", " ") ("gamma", -)
//!
//! keep:       "alpha" | " beta" | " gamma"
//! drop:       "alpha" | "beta"  | "gamma"
//! ```
//!
//! A chunk therefore never ends in the separator it was split on, and a
//! leading separator always belongs to the chunk that follows.
//!
//! When delimiters are dropped, each fragment remembers the source text that
//! sat between it and the previous fragment (its `joiner`), so merging can
//! put back exactly what was removed.

use std::ops::Range;

use crate::{LengthFunction, SeparatorTier};

/// An intermediate piece of text produced by splitting on one tier.
///
/// Borrowed from the input; fragments never outlive a single chunking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// The fragment text.
    pub text: &'a str,
    /// Byte offset of `text` in the original document.
    pub offset: usize,
    /// Source text between the previous fragment and this one.
    ///
    /// Empty for the first fragment of a span and whenever delimiters are
    /// kept, since the delimiter is then part of `text`.
    pub joiner: &'a str,
    /// `text` measured with the configured length function.
    pub len: usize,
}

/// One `(content, following delimiter)` pair of a span.
///
/// The last token of a span has no delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    content: Range<usize>,
    delimiter: Option<Range<usize>>,
}

fn tokenize(text: &str, tier: &SeparatorTier) -> Vec<Token> {
    let delimiters = tier.delimiters(text);
    let mut tokens = Vec::with_capacity(delimiters.len() + 1);
    let mut cursor = 0;

    for delimiter in delimiters {
        tokens.push(Token {
            content: cursor..delimiter.start,
            delimiter: Some(delimiter.clone()),
        });
        cursor = delimiter.end;
    }
    tokens.push(Token {
        content: cursor..text.len(),
        delimiter: None,
    });

    tokens
}

/// Split `text` on `tier` into fragments, in order.
///
/// `base` is the byte offset of `text` within the original document, so
/// fragment offsets stay absolute across recursive calls. Empty fragments
/// are dropped. The atomic tier yields one fragment per character.
///
/// ```rust
/// use strata::{split, LengthFunction, SeparatorTier};
///
/// let tier = SeparatorTier::literal(" ");
/// let len = LengthFunction::chars();
///
/// let kept: Vec<_> = split("a b c", 0, &tier, true, &len).iter().map(|f| f.text).collect();
/// assert_eq!(kept, ["a", " b", " c"]);
///
/// let dropped: Vec<_> = split("a b c", 0, &tier, false, &len).iter().map(|f| f.text).collect();
/// assert_eq!(dropped, ["a", "b", "c"]);
/// ```
pub fn split<'a>(
    text: &'a str,
    base: usize,
    tier: &SeparatorTier,
    keep_separator: bool,
    length: &LengthFunction,
) -> Vec<Fragment<'a>> {
    let fragment = |range: Range<usize>, joiner: &'a str| {
        let piece = &text[range.clone()];
        Fragment {
            text: piece,
            offset: base + range.start,
            joiner,
            len: length.measure(piece),
        }
    };

    if tier.is_atomic() {
        return text
            .char_indices()
            .map(|(i, c)| fragment(i..i + c.len_utf8(), ""))
            .collect();
    }

    let tokens = tokenize(text, tier);
    let mut fragments = Vec::with_capacity(tokens.len());

    if keep_separator {
        let mut pending: Option<Range<usize>> = None;
        for token in tokens {
            let start = pending.map_or(token.content.start, |d| d.start);
            let range = start..token.content.end;
            if !range.is_empty() {
                fragments.push(fragment(range, ""));
            }
            pending = token.delimiter;
        }
    } else {
        let mut last_end: Option<usize> = None;
        for token in tokens {
            if token.content.is_empty() {
                continue;
            }
            let joiner = last_end.map_or("", |end| &text[end..token.content.start]);
            last_end = Some(token.content.end);
            fragments.push(fragment(token.content, joiner));
        }
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(fragments: &[Fragment<'a>]) -> Vec<&'a str> {
        fragments.iter().map(|f| f.text).collect()
    }

    #[test]
    fn test_tokenize_pairs() {
        let tier = SeparatorTier::literal(", ");
        let tokens = tokenize("a, b, c", &tier);
        assert_eq!(
            tokens,
            vec![
                Token { content: 0..1, delimiter: Some(1..3) },
                Token { content: 3..4, delimiter: Some(4..6) },
                Token { content: 6..7, delimiter: None },
            ]
        );
    }

    #[test]
    fn test_tokenize_trailing_delimiter() {
        let tier = SeparatorTier::literal(";");
        let tokens = tokenize("a;", &tier);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].content, 2..2);
        assert!(tokens[1].delimiter.is_none());
    }

    #[test]
    fn test_keep_glues_forward() {
        let tier = SeparatorTier::literal("\n");
        let frags = split("one\ntwo\nthree", 0, &tier, true, &LengthFunction::chars());
        assert_eq!(texts(&frags), ["one", "\ntwo", "\nthree"]);
        assert_eq!(frags[1].offset, 3);
        assert!(frags.iter().all(|f| f.joiner.is_empty()));
    }

    #[test]
    fn test_keep_leading_and_trailing_delimiters() {
        let tier = SeparatorTier::literal(" ");
        let frags = split(" a b ", 0, &tier, true, &LengthFunction::chars());
        // The leading delimiter glues onto "a"; the trailing one stands alone.
        assert_eq!(texts(&frags), [" a", " b", " "]);
        assert_eq!(frags.iter().map(|f| f.text).collect::<String>(), " a b ");
    }

    #[test]
    fn test_keep_adjacent_delimiters() {
        let tier = SeparatorTier::literal("\n\n");
        let frags = split("a\n\n\n\nb", 0, &tier, true, &LengthFunction::chars());
        assert_eq!(texts(&frags), ["a", "\n\n", "\n\nb"]);
    }

    #[test]
    fn test_drop_records_joiners() {
        let tier = SeparatorTier::literal(" ");
        let frags = split("a  b c", 10, &tier, false, &LengthFunction::chars());
        assert_eq!(texts(&frags), ["a", "b", "c"]);
        assert_eq!(frags[0].joiner, "");
        // Empty fragment between the two spaces is dropped, both spaces kept as joiner
        assert_eq!(frags[1].joiner, "  ");
        assert_eq!(frags[2].joiner, " ");
        assert_eq!(frags[1].offset, 13);
    }

    #[test]
    fn test_regex_delimiters() {
        let tier = SeparatorTier::regex(r"[.!?]\s+").unwrap();
        let frags = split("Hi there. How are you? Fine.", 0, &tier, true, &LengthFunction::chars());
        assert_eq!(texts(&frags), ["Hi there", ". How are you", "? Fine."]);
    }

    #[test]
    fn test_atomic_splits_characters() {
        let tier = SeparatorTier::literal("");
        let frags = split("a日b", 5, &tier, true, &LengthFunction::bytes());
        assert_eq!(texts(&frags), ["a", "日", "b"]);
        assert_eq!(frags[1].offset, 6);
        assert_eq!(frags[1].len, 3);
        assert_eq!(frags[2].offset, 9);
    }

    #[test]
    fn test_no_delimiter_single_fragment() {
        let tier = SeparatorTier::literal("|");
        let frags = split("abc", 0, &tier, false, &LengthFunction::chars());
        assert_eq!(texts(&frags), ["abc"]);
    }

    #[test]
    fn test_empty_text() {
        let tier = SeparatorTier::literal(" ");
        assert!(split("", 0, &tier, true, &LengthFunction::chars()).is_empty());
        assert!(split("", 0, &tier, false, &LengthFunction::chars()).is_empty());
    }
}
