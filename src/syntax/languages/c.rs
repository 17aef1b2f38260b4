//! C, C++, and C# grammars

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{
    CStyleCommentRule, CallRule, KeywordRule, NumberRule, PreprocessorRule, QuotedStringRule,
};

const C_KEYWORDS: &[&str] = &[
    "int", "char", "float", "double", "void", "if", "else", "for", "while", "do", "switch",
    "case", "default", "return", "break", "continue", "struct", "union", "enum", "typedef",
    "sizeof", "static", "const", "extern", "auto", "register", "volatile", "true", "false",
    "NULL",
];

const CSHARP_KEYWORDS: &[&str] = &[
    "public", "private", "protected", "class", "interface", "struct", "namespace", "using",
    "if", "else", "for", "foreach", "while", "do", "switch", "case", "default", "return",
    "break", "continue", "try", "catch", "finally", "throw", "new", "async", "await", "var",
    "const", "static", "readonly", "true", "false", "null",
];

/// Create the C grammar
pub fn c() -> Grammar {
    base("C", &['_', '.', '#', '"', '\''], C_KEYWORDS)
}

/// Create the C++ grammar (shares the C keyword set)
pub fn cpp() -> Grammar {
    base("C++", &['_', '.', '#', '"', '\''], C_KEYWORDS)
}

/// Create the C# grammar
pub fn csharp() -> Grammar {
    base("C#", &['_', '.', '#', '"', '\'', '@', '$'], CSHARP_KEYWORDS)
}

// `#` is re-admitted so directives (`#include`, `#region`) stay one
// token for the preprocessor rule.
fn base(name: &'static str, word_chars: &'static [char], keywords: &'static [&'static str]) -> Grammar {
    Grammar::new(name, word_chars)
        .with_rule(PreprocessorRule)
        .with_rule(CStyleCommentRule)
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::new(keywords))
        .with_rule(CallRule)
}

#[cfg(test)]
mod tests {
    use crate::highlight;
    use crate::syntax::TokenType;

    fn types_of(code: &str, lang: &str) -> Vec<(String, TokenType)> {
        highlight(code, Some(lang))
            .runs()
            .iter()
            .map(|r| (r.text.clone(), r.token_type))
            .collect()
    }

    #[test]
    fn test_c_preprocessor() {
        let runs = types_of("#include <stdio.h>", "c");
        assert!(runs.contains(&("#include".to_string(), TokenType::Preprocessing)));
    }

    #[test]
    fn test_c_block_comment_spans_lines() {
        let styled = highlight("/* start\nstill comment */\nint x;", Some("c"));
        for text in ["/*", "start", "still", "comment", "*/"] {
            let run = styled.runs().iter().find(|r| r.text == text).unwrap();
            assert_eq!(run.token_type, TokenType::Comment, "token {text:?}");
        }
        let after = styled.runs().iter().find(|r| r.text == "int").unwrap();
        assert_eq!(after.token_type, TokenType::Keyword);
    }

    #[test]
    fn test_c_line_comment_claims_rest_of_line() {
        let runs = types_of("x = 1; // trailing note\ny = 2;", "c");
        assert!(runs.contains(&("trailing".to_string(), TokenType::Comment)));
        // nothing on the next line is a comment
        assert!(runs
            .iter()
            .all(|(text, tt)| *tt != TokenType::Comment || !text.contains('y')));
    }
}
