//! PHP grammar

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{
    CStyleCommentRule, CallRule, KeywordRule, LineCommentRule, NumberRule, QuotedStringRule,
};

const KEYWORDS: &[&str] = &[
    "function", "class", "interface", "trait", "namespace", "use", "if", "else", "elseif",
    "for", "foreach", "while", "do", "switch", "case", "default", "return", "break",
    "continue", "try", "catch", "finally", "throw", "new", "public", "private", "protected",
    "static", "final", "abstract", "true", "false", "null",
];

/// Create the PHP grammar.
///
/// PHP comments come in both C flavors and the shell flavor, and `$`
/// is identifier-legal so variables stay whole tokens.
pub fn php() -> Grammar {
    Grammar::new("PHP", &['_', '.', '"', '\'', '$'])
        .with_rule(CStyleCommentRule)
        .with_rule(LineCommentRule::new("#"))
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::new(KEYWORDS))
        .with_rule(CallRule)
}
