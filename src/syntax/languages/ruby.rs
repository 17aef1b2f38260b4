//! Ruby and Perl grammars

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{CallRule, KeywordRule, LineCommentRule, NumberRule, QuotedStringRule};

const RUBY_KEYWORDS: &[&str] = &[
    "def", "class", "module", "if", "elsif", "else", "unless", "case", "when", "for", "while",
    "until", "begin", "end", "rescue", "ensure", "return", "break", "next", "yield", "true",
    "false", "nil", "self", "super", "require", "include", "extend", "attr_accessor",
];

/// Create the Ruby grammar
pub fn ruby() -> Grammar {
    Grammar::new("Ruby", &['_', '.', '"', '\'', '@', '$'])
        .with_rule(LineCommentRule::new("#"))
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::new(RUBY_KEYWORDS))
        .with_rule(CallRule)
}

/// Create the Perl grammar.
///
/// Perl carries no keyword set; it gets the generic comment, string,
/// number, and call passes only.
pub fn perl() -> Grammar {
    Grammar::new("Perl", &['_', '.', '"', '\'', '$', '@'])
        .with_rule(LineCommentRule::new("#"))
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(NumberRule)
        .with_rule(CallRule)
}
