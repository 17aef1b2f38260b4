//! Java and Kotlin grammars

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{
    CStyleCommentRule, CallRule, KeywordRule, NumberRule, QuotedStringRule,
};

const KEYWORDS: &[&str] = &[
    "public", "private", "protected", "class", "interface", "extends", "implements", "new",
    "if", "else", "for", "while", "do", "switch", "case", "default", "return", "break",
    "continue", "try", "catch", "finally", "throw", "throws", "static", "final", "abstract",
    "void", "boolean", "int", "long", "float", "double", "String", "true", "false", "null",
];

/// Create the Java grammar
pub fn java() -> Grammar {
    base("Java")
}

/// Create the Kotlin grammar (shares the Java rule set)
pub fn kotlin() -> Grammar {
    base("Kotlin")
}

fn base(name: &'static str) -> Grammar {
    Grammar::new(name, &['_', '.', '"', '\'', '@', '$'])
        .with_rule(CStyleCommentRule)
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::new(KEYWORDS))
        .with_rule(CallRule)
}
