//! Python grammar

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{
    BlockSpanRule, CallRule, KeywordRule, LineCommentRule, NumberRule, QuotedStringRule,
};
use crate::syntax::tokens::TokenType;

const KEYWORDS: &[&str] = &[
    "def", "class", "if", "elif", "else", "for", "while", "return", "import", "from", "as",
    "try", "except", "finally", "with", "lambda", "True", "False", "None", "and", "or", "not",
    "in", "is", "pass", "break", "continue", "yield", "async", "await", "raise", "assert",
];

/// Create the Python grammar.
///
/// Triple-quoted strings span lines via count parity; ordinary quotes
/// are line-scoped.
pub fn python() -> Grammar {
    Grammar::new("Python", &['_', '.', '"', '\'', '@'])
        .with_rule(LineCommentRule::new("#"))
        .with_rule(BlockSpanRule::new("\"\"\"", "\"\"\"", TokenType::String))
        .with_rule(BlockSpanRule::new("'''", "'''", TokenType::String))
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::new(KEYWORDS))
        .with_rule(CallRule)
}

#[cfg(test)]
mod tests {
    use crate::highlight;
    use crate::syntax::TokenType;

    fn type_of(code: &str, text: &str) -> TokenType {
        let styled = highlight(code, Some("python"));
        styled
            .runs()
            .iter()
            .find(|r| r.text == text)
            .map(|r| r.token_type)
            .unwrap_or_else(|| panic!("run {text:?} not found"))
    }

    #[test]
    fn test_python_keywords() {
        let code = "def foo():\n    pass";
        assert_eq!(type_of(code, "def"), TokenType::Keyword);
        assert_eq!(type_of(code, "pass"), TokenType::Keyword);
        assert_eq!(type_of(code, "foo"), TokenType::Call);
    }

    #[test]
    fn test_python_comment() {
        let code = "x = 1  # a note";
        assert_eq!(type_of(code, "#"), TokenType::Comment);
        assert_eq!(type_of(code, "note"), TokenType::Comment);
        // tokens before the marker are untouched
        assert_eq!(type_of(code, "1"), TokenType::Number);
    }

    #[test]
    fn test_python_docstring_spans_lines() {
        let code = "\"\"\"module\ndocs here\n\"\"\"\nx = 1";
        assert_eq!(type_of(code, "docs"), TokenType::String);
        // the line after the closing fence is back to normal
        assert_eq!(type_of(code, "1"), TokenType::Number);
    }

    #[test]
    fn test_python_case_sensitive_keywords() {
        let styled = highlight("True false", Some("python"));
        assert_eq!(type_of("True false", "True"), TokenType::Keyword);
        // lowercase `false` is not a Python keyword; it merges into the
        // surrounding plain run
        assert!(styled
            .runs()
            .iter()
            .all(|r| r.token_type != TokenType::Keyword || r.text == "True"));
    }
}
