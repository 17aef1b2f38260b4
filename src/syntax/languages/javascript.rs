//! JavaScript and TypeScript grammars

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{
    CStyleCommentRule, CallRule, KeywordRule, NumberRule, QuotedStringRule,
};

const KEYWORDS: &[&str] = &[
    "function", "const", "let", "var", "if", "else", "for", "while", "return", "break",
    "continue", "switch", "case", "default", "try", "catch", "finally", "throw", "new",
    "class", "extends", "super", "this", "import", "export", "from", "async", "await",
    "yield", "typeof", "instanceof", "null", "undefined", "true", "false",
];

/// Create the JavaScript grammar
pub fn javascript() -> Grammar {
    base("JavaScript")
}

/// Create the TypeScript grammar (shares the JavaScript rule set)
pub fn typescript() -> Grammar {
    base("TypeScript")
}

// `$` is identifier-legal; the backtick carries template literals.
fn base(name: &'static str) -> Grammar {
    Grammar::new(name, &['_', '.', '"', '\'', '`', '$'])
        .with_rule(CStyleCommentRule)
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(QuotedStringRule::new('`'))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::new(KEYWORDS))
        .with_rule(CallRule)
}
