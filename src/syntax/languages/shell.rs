//! Shell grammar (bash, zsh, and friends)

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{CallRule, KeywordRule, LineCommentRule, NumberRule, QuotedStringRule};

const KEYWORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "case", "esac", "for", "while", "do", "done",
    "function", "return", "break", "continue", "exit", "export", "local", "readonly", "true",
    "false",
];

/// Create the shell grammar
pub fn shell() -> Grammar {
    Grammar::new("Shell", &['_', '.', '"', '\'', '$'])
        .with_rule(LineCommentRule::new("#"))
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::new(KEYWORDS))
        .with_rule(CallRule)
}
