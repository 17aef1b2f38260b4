//! Per-language grammars
//!
//! A grammar is nothing more than a delimiter set and an ordered rule
//! list. Evaluation is first-match-wins, and deliberately so: a token
//! inside a string or comment span is still *evaluated* against later
//! rules, but the earlier string/comment rule has already claimed it.

use super::context::SegmentContext;
use super::rules::SyntaxRule;
use super::stream::DelimiterSet;
use super::tokens::TokenType;

/// A language's delimiter set plus its ordered classification rules
pub struct Grammar {
    name: &'static str,
    delimiters: DelimiterSet,
    rules: Vec<Box<dyn SyntaxRule>>,
}

impl Grammar {
    /// Create a grammar with no rules, re-admitting the given word
    /// characters into tokens
    pub fn new(name: &'static str, word_chars: &'static [char]) -> Self {
        Self {
            name,
            delimiters: DelimiterSet::new(word_chars),
            rules: Vec::new(),
        }
    }

    /// The no-op grammar: every token stays plain
    pub fn plain_text() -> Self {
        Self::new("Plain Text", &['_'])
    }

    /// Builder: append a rule at the end of the evaluation order
    pub fn with_rule(mut self, rule: impl SyntaxRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Grammar display name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The delimiter set tokens are split with
    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    /// Classify one token: the first matching rule's type, or `None`
    /// for plain text
    pub fn classify(&self, segment: &SegmentContext) -> Option<TokenType> {
        self.rules
            .iter()
            .find(|rule| rule.matches(segment))
            .map(|rule| rule.token_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::{KeywordRule, NumberRule};
    use crate::syntax::stream::tokenize;

    fn classify_word(grammar: &Grammar, source: &str, word: &str) -> Option<TokenType> {
        let tokens = tokenize(source, grammar.delimiters());
        let index = tokens
            .iter()
            .position(|t| t.text(source) == word)
            .unwrap_or_else(|| panic!("token {word:?} not found"));
        grammar.classify(&SegmentContext::new(source, &tokens, index))
    }

    #[test]
    fn test_plain_text_classifies_nothing() {
        let grammar = Grammar::plain_text();
        assert_eq!(classify_word(&grammar, "def f pass", "def"), None);
        assert_eq!(classify_word(&grammar, "42", "42"), None);
    }

    #[test]
    fn test_first_match_wins() {
        // A keyword that would also satisfy a later rule keeps the
        // earlier rule's type.
        let grammar = Grammar::new("Test", &['_'])
            .with_rule(KeywordRule::new(&["42"]))
            .with_rule(NumberRule);
        assert_eq!(classify_word(&grammar, "x 42", "42"), Some(TokenType::Keyword));

        let flipped = Grammar::new("Test", &['_'])
            .with_rule(NumberRule)
            .with_rule(KeywordRule::new(&["42"]));
        assert_eq!(classify_word(&flipped, "x 42", "42"), Some(TokenType::Number));
    }

    #[test]
    fn test_no_match_is_plain() {
        let grammar = Grammar::new("Test", &['_']).with_rule(NumberRule);
        assert_eq!(classify_word(&grammar, "hello", "hello"), None);
    }
}
