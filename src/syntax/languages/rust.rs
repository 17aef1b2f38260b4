//! Rust grammar

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{
    CStyleCommentRule, CallRule, KeywordRule, NumberRule, QuotedStringRule,
};

const KEYWORDS: &[&str] = &[
    "fn", "let", "mut", "const", "struct", "enum", "impl", "trait", "if", "else", "match",
    "for", "while", "loop", "return", "break", "continue", "pub", "use", "mod", "crate",
    "self", "super", "async", "await", "true", "false", "Some", "None", "Ok", "Err",
];

/// Create the Rust grammar.
///
/// `!` is re-admitted so macro names (`println!`) stay one token and
/// classify as calls; `'` stays a delimiter because of lifetimes.
pub fn rust() -> Grammar {
    Grammar::new("Rust", &['_', '.', '"', '!'])
        .with_rule(CStyleCommentRule)
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::new(KEYWORDS))
        .with_rule(CallRule)
}

#[cfg(test)]
mod tests {
    use crate::highlight;
    use crate::syntax::TokenType;

    fn type_of(code: &str, text: &str) -> TokenType {
        let styled = highlight(code, Some("rust"));
        styled
            .runs()
            .iter()
            .find(|r| r.text == text)
            .map(|r| r.token_type)
            .unwrap_or_else(|| panic!("run {text:?} not found"))
    }

    #[test]
    fn test_rust_numbers_with_separators() {
        assert_eq!(type_of(".5 + 1_000", ".5"), TokenType::Number);
        assert_eq!(type_of(".5 + 1_000", "1_000"), TokenType::Number);
    }

    #[test]
    fn test_rust_macro_call() {
        assert_eq!(type_of("println!(\"hi\")", "println!"), TokenType::Call);
    }

    #[test]
    fn test_rust_keywords() {
        let code = "pub fn run() { let x = 1; }";
        assert_eq!(type_of(code, "pub"), TokenType::Keyword);
        assert_eq!(type_of(code, "fn"), TokenType::Keyword);
        assert_eq!(type_of(code, "let"), TokenType::Keyword);
        assert_eq!(type_of(code, "run"), TokenType::Call);
    }
}
