//! Read-only view over the token stream for rule evaluation
//!
//! A `SegmentContext` is bound to one content token's position. It is
//! rebuilt per token and never mutates the stream, which is what keeps
//! every rule a pure predicate.

use super::stream::Token;

/// Context handed to each syntax rule when classifying one token
pub struct SegmentContext<'a> {
    source: &'a str,
    tokens: &'a [Token],
    index: usize,
}

impl<'a> SegmentContext<'a> {
    /// Bind a context to the content token at `index`.
    ///
    /// `tokens` must be the stream produced from `source`.
    pub fn new(source: &'a str, tokens: &'a [Token], index: usize) -> Self {
        debug_assert!(!tokens[index].is_whitespace());
        Self {
            source,
            tokens,
            index,
        }
    }

    /// Text of the token being classified
    pub fn current(&self) -> &'a str {
        self.tokens[self.index].text(self.source)
    }

    /// Text of the next content token, skipping intervening whitespace
    pub fn next(&self) -> Option<&'a str> {
        self.tokens[self.index + 1..]
            .iter()
            .find(|t| !t.is_whitespace())
            .map(|t| t.text(self.source))
    }

    /// Content-token texts on the current token's physical line, in order
    pub fn tokens_on_line(&self) -> impl Iterator<Item = &'a str> + '_ {
        let line = self.tokens[self.index].line;
        self.tokens
            .iter()
            .filter(move |t| !t.is_whitespace() && t.line == line)
            .map(|t| t.text(self.source))
    }

    /// Content-token texts preceding the current token on its line
    pub fn preceding_on_line(&self) -> impl Iterator<Item = &'a str> + '_ {
        let line = self.tokens[self.index].line;
        self.tokens[..self.index]
            .iter()
            .filter(move |t| !t.is_whitespace() && t.line == line)
            .map(|t| t.text(self.source))
    }

    /// Occurrences of `needle` in the source scanned so far, up to and
    /// including the current token.
    ///
    /// This is the count-parity primitive behind block-comment (and
    /// triple-quote) detection: unequal `/*` and `*/` counts mean the
    /// scan position is inside an unterminated block.
    pub fn count_of(&self, needle: &str) -> usize {
        let end = self.tokens[self.index].end;
        self.source[..end].matches(needle).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::stream::{tokenize, DelimiterSet};

    const DELIMITERS: DelimiterSet = DelimiterSet::new(&['_', '.']);

    fn context_at<'a>(source: &'a str, tokens: &'a [Token], word: &str) -> SegmentContext<'a> {
        let index = tokens
            .iter()
            .position(|t| t.text(source) == word)
            .unwrap_or_else(|| panic!("token {word:?} not found"));
        SegmentContext::new(source, tokens, index)
    }

    #[test]
    fn test_current_and_next() {
        let source = "foo (bar)";
        let tokens = tokenize(source, &DELIMITERS);
        let seg = context_at(source, &tokens, "foo");
        assert_eq!(seg.current(), "foo");
        // whitespace is skipped; the paren run is not
        assert_eq!(seg.next(), Some("("));
    }

    #[test]
    fn test_next_at_end() {
        let source = "lonely";
        let tokens = tokenize(source, &DELIMITERS);
        let seg = context_at(source, &tokens, "lonely");
        assert_eq!(seg.next(), None);
    }

    #[test]
    fn test_tokens_on_line() {
        let source = "a b\nc d e\nf";
        let tokens = tokenize(source, &DELIMITERS);
        let seg = context_at(source, &tokens, "d");
        let on_line: Vec<_> = seg.tokens_on_line().collect();
        assert_eq!(on_line, vec!["c", "d", "e"]);
        let before: Vec<_> = seg.preceding_on_line().collect();
        assert_eq!(before, vec!["c"]);
    }

    #[test]
    fn test_count_of_includes_current() {
        let source = "/* one\ntwo */ three";
        let tokens = tokenize(source, &DELIMITERS);

        let seg = context_at(source, &tokens, "two");
        assert_eq!(seg.count_of("/*"), 1);
        assert_eq!(seg.count_of("*/"), 0);

        let seg = context_at(source, &tokens, "three");
        assert_eq!(seg.count_of("/*"), 1);
        assert_eq!(seg.count_of("*/"), 1);
    }
}
