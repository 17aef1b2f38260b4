//! Swift grammar

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{
    CStyleCommentRule, CallRule, DotAccessRule, KeywordRule, NumberRule, PreprocessorRule,
    QuotedStringRule, TypeNameRule,
};

const KEYWORDS: &[&str] = &[
    "class", "struct", "enum", "protocol", "extension", "func", "var", "let", "if", "else",
    "switch", "case", "default", "for", "while", "repeat", "return", "break", "continue",
    "import", "public", "private", "internal", "fileprivate", "static", "final", "override",
    "init", "deinit", "self", "super", "nil", "true", "false", "try", "catch", "throw",
    "throws", "guard", "defer", "async", "await", "actor",
];

/// Create the Swift grammar.
///
/// Swift additionally classifies capitalized identifiers as types and
/// leading-dot members (`.red`) as dot access; both sit between the
/// keyword and call rules.
pub fn swift() -> Grammar {
    Grammar::new("Swift", &['_', '.', '"', '#', '@', '$'])
        .with_rule(PreprocessorRule)
        .with_rule(CStyleCommentRule)
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::new(KEYWORDS))
        .with_rule(TypeNameRule)
        .with_rule(DotAccessRule)
        .with_rule(CallRule)
}
