//! Classification rules
//!
//! Every rule is a pure predicate over a [`SegmentContext`]: same
//! context, same answer. Grammars hold rules as boxed trait objects in
//! evaluation order; the first rule that matches decides the token's
//! type, and later rules are never consulted for that token.

use std::collections::HashSet;

use super::context::SegmentContext;
use super::tokens::TokenType;

/// A single classification rule
pub trait SyntaxRule {
    /// The token type assigned when the rule matches
    fn token_type(&self) -> TokenType;

    /// Decide whether the current token belongs to this rule
    fn matches(&self, segment: &SegmentContext) -> bool;
}

/// Numeric literals: `42`, `1_000`, `3.14`, `.5`
pub struct NumberRule;

impl SyntaxRule for NumberRule {
    fn token_type(&self) -> TokenType {
        TokenType::Number
    }

    fn matches(&self, segment: &SegmentContext) -> bool {
        let stripped: String = segment
            .current()
            .chars()
            .filter(|&ch| ch != '_')
            .collect();
        let mut chars = stripped.chars();
        match chars.next() {
            Some(ch) if ch.is_ascii_digit() => true,
            Some('.') => {
                let rest = chars.as_str();
                !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_digit())
            }
            _ => false,
        }
    }
}

/// A name directly followed by an opening parenthesis.
///
/// One-token lookahead only; it does not verify the parenthesis closes
/// a call, so keyword rules must run earlier or `if (...)` would tag
/// `if` as a call.
pub struct CallRule;

impl SyntaxRule for CallRule {
    fn token_type(&self) -> TokenType {
        TokenType::Call
    }

    fn matches(&self, segment: &SegmentContext) -> bool {
        let starts_like_name = segment
            .current()
            .chars()
            .next()
            .map_or(false, |ch| ch.is_alphabetic() || ch == '_');
        starts_like_name
            && segment
                .next()
                .map_or(false, |next| next.starts_with('('))
    }
}

/// C-style comments: `//` to end of line and `/* ... */` blocks.
///
/// Block membership is decided by count parity over the scanned prefix
/// (unequal `/*` and `*/` counts), not a stored scanner flag, so the
/// check stays local to the context.
pub struct CStyleCommentRule;

impl SyntaxRule for CStyleCommentRule {
    fn token_type(&self) -> TokenType {
        TokenType::Comment
    }

    fn matches(&self, segment: &SegmentContext) -> bool {
        let current = segment.current();
        if current.starts_with("/*") || current.starts_with("//") || current.ends_with("*/") {
            return true;
        }
        if segment.preceding_on_line().any(|t| t.starts_with("//")) {
            return true;
        }
        segment.count_of("/*") != segment.count_of("*/")
    }
}

/// Line comments introduced by a fixed marker (`#`, `--`)
pub struct LineCommentRule {
    marker: &'static str,
}

impl LineCommentRule {
    pub fn new(marker: &'static str) -> Self {
        Self { marker }
    }
}

impl SyntaxRule for LineCommentRule {
    fn token_type(&self) -> TokenType {
        TokenType::Comment
    }

    fn matches(&self, segment: &SegmentContext) -> bool {
        segment.current().starts_with(self.marker)
            || segment.preceding_on_line().any(|t| t.starts_with(self.marker))
    }
}

/// Quoted string literals, scoped to one line.
///
/// A token is part of a string when it starts with the quote or when
/// the quote count over the earlier tokens on its line is odd.
pub struct QuotedStringRule {
    quote: char,
}

impl QuotedStringRule {
    pub fn new(quote: char) -> Self {
        Self { quote }
    }
}

impl SyntaxRule for QuotedStringRule {
    fn token_type(&self) -> TokenType {
        TokenType::String
    }

    fn matches(&self, segment: &SegmentContext) -> bool {
        if segment.current().starts_with(self.quote) {
            return true;
        }
        let before: usize = segment
            .preceding_on_line()
            .map(|t| t.matches(self.quote).count())
            .sum();
        before % 2 == 1
    }
}

/// Multi-line delimited spans: `/* */`, `<!-- -->`, `\"\"\"`, backtick
/// fences.
///
/// Uses stream-wide count parity, so a span opened on an earlier line
/// still claims tokens on this one.
pub struct BlockSpanRule {
    open: &'static str,
    close: &'static str,
    token_type: TokenType,
}

impl BlockSpanRule {
    pub fn new(open: &'static str, close: &'static str, token_type: TokenType) -> Self {
        Self {
            open,
            close,
            token_type,
        }
    }
}

impl SyntaxRule for BlockSpanRule {
    fn token_type(&self) -> TokenType {
        self.token_type
    }

    fn matches(&self, segment: &SegmentContext) -> bool {
        let current = segment.current();
        if current.starts_with(self.open) || current.ends_with(self.close) {
            return true;
        }
        let opens = segment.count_of(self.open);
        if self.open == self.close {
            opens % 2 == 1
        } else {
            opens != segment.count_of(self.close)
        }
    }
}

/// Preprocessor directives: any token starting with `#`
pub struct PreprocessorRule;

impl SyntaxRule for PreprocessorRule {
    fn token_type(&self) -> TokenType {
        TokenType::Preprocessing
    }

    fn matches(&self, segment: &SegmentContext) -> bool {
        segment.current().starts_with('#')
    }
}

/// Fixed-set keyword membership; exact match, optionally case-folded
/// (SQL).
pub struct KeywordRule {
    keywords: HashSet<&'static str>,
    case_insensitive: bool,
}

impl KeywordRule {
    /// Case-sensitive keyword set
    pub fn new(keywords: &'static [&'static str]) -> Self {
        Self {
            keywords: keywords.iter().copied().collect(),
            case_insensitive: false,
        }
    }

    /// Case-insensitive keyword set; entries must be lowercase
    pub fn case_insensitive(keywords: &'static [&'static str]) -> Self {
        debug_assert!(keywords.iter().all(|k| *k == k.to_ascii_lowercase()));
        Self {
            keywords: keywords.iter().copied().collect(),
            case_insensitive: true,
        }
    }
}

impl SyntaxRule for KeywordRule {
    fn token_type(&self) -> TokenType {
        TokenType::Keyword
    }

    fn matches(&self, segment: &SegmentContext) -> bool {
        let current = segment.current();
        if self.case_insensitive {
            self.keywords
                .contains(current.to_ascii_lowercase().as_str())
        } else {
            self.keywords.contains(current)
        }
    }
}

/// Capitalized identifiers (`String`, `Vec`)
pub struct TypeNameRule;

impl SyntaxRule for TypeNameRule {
    fn token_type(&self) -> TokenType {
        TokenType::Type
    }

    fn matches(&self, segment: &SegmentContext) -> bool {
        let mut chars = segment.current().chars();
        match chars.next() {
            Some(first) if first.is_ascii_uppercase() => {
                chars.all(|ch| ch.is_alphanumeric() || ch == '_')
            }
            _ => false,
        }
    }
}

/// Leading-dot member access (`.count`, `.map`)
pub struct DotAccessRule;

impl SyntaxRule for DotAccessRule {
    fn token_type(&self) -> TokenType {
        TokenType::DotAccess
    }

    fn matches(&self, segment: &SegmentContext) -> bool {
        let current = segment.current();
        current.starts_with('.')
            && current
                .chars()
                .nth(1)
                .map_or(false, |ch| ch.is_alphabetic() || ch == '_')
    }
}
