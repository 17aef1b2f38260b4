//! Go grammar

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{
    CStyleCommentRule, CallRule, KeywordRule, NumberRule, QuotedStringRule,
};

const KEYWORDS: &[&str] = &[
    "func", "package", "import", "var", "const", "type", "struct", "interface", "if", "else",
    "for", "range", "return", "break", "continue", "switch", "case", "default", "defer", "go",
    "chan", "select", "map", "true", "false", "nil",
];

/// Create the Go grammar.
///
/// The backtick is re-admitted so raw string literals tokenize like
/// ordinary quoted strings.
pub fn go() -> Grammar {
    Grammar::new("Go", &['_', '.', '"', '\'', '`'])
        .with_rule(CStyleCommentRule)
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(QuotedStringRule::new('`'))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::new(KEYWORDS))
        .with_rule(CallRule)
}
