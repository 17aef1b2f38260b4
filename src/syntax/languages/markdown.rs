//! Markdown grammar
//!
//! Only backtick code is highlighted: inline spans and fenced blocks
//! both fall out of backtick count parity (a fence contributes three
//! backticks per side, keeping the parity arithmetic intact).

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::BlockSpanRule;
use crate::syntax::tokens::TokenType;

/// Create the Markdown grammar
pub fn markdown() -> Grammar {
    Grammar::new("Markdown", &['_', '`'])
        .with_rule(BlockSpanRule::new("`", "`", TokenType::String))
}

#[cfg(test)]
mod tests {
    use crate::highlight;
    use crate::syntax::TokenType;

    #[test]
    fn test_inline_code() {
        let styled = highlight("use `map` here", Some("markdown"));
        let code = styled.runs().iter().find(|r| r.text == "`map`").unwrap();
        assert_eq!(code.token_type, TokenType::String);
        assert!(styled
            .runs()
            .iter()
            .all(|r| r.token_type != TokenType::String || !r.text.contains("here")));
    }

    #[test]
    fn test_fenced_block() {
        let styled = highlight("```\nlet x = 1;\n```\nprose", Some("markdown"));
        let body = styled.runs().iter().find(|r| r.text.contains("let")).unwrap();
        assert_eq!(body.token_type, TokenType::String);
        assert!(styled
            .runs()
            .iter()
            .all(|r| r.token_type != TokenType::String || !r.text.contains("prose")));
    }
}
