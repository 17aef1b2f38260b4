//! HTML, XML, and CSS grammars
//!
//! Markup gets comments and attribute strings; CSS gets block comments,
//! strings, numbers, and function-like calls (`rgb(`, `var(`). None of
//! the three carries a keyword set.

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{BlockSpanRule, CallRule, NumberRule, QuotedStringRule};
use crate::syntax::tokens::TokenType;

/// Create the HTML grammar
pub fn html() -> Grammar {
    markup("HTML")
}

/// Create the XML grammar (shares the HTML rule set)
pub fn xml() -> Grammar {
    markup("XML")
}

fn markup(name: &'static str) -> Grammar {
    Grammar::new(name, &['_', '.', '"', '\''])
        .with_rule(BlockSpanRule::new("<!--", "-->", TokenType::Comment))
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(NumberRule)
}

/// Create the CSS grammar.
///
/// `-`, `#`, and `%` are identifier-legal so `font-size`, hex colors,
/// and percentages stay whole tokens.
pub fn css() -> Grammar {
    Grammar::new("CSS", &['_', '-', '.', '"', '\'', '#', '%'])
        .with_rule(BlockSpanRule::new("/*", "*/", TokenType::Comment))
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(NumberRule)
        .with_rule(CallRule)
}

#[cfg(test)]
mod tests {
    use crate::highlight;
    use crate::syntax::TokenType;

    #[test]
    fn test_html_comment_spans_lines() {
        let styled = highlight("<!-- a\nb -->\n<div>", Some("html"));
        for text in ["<!--", "a", "b", "-->"] {
            let run = styled.runs().iter().find(|r| r.text == text).unwrap();
            assert_eq!(run.token_type, TokenType::Comment, "token {text:?}");
        }
        assert!(styled
            .runs()
            .iter()
            .all(|r| r.token_type != TokenType::Comment || !r.text.contains("div")));
    }

    #[test]
    fn test_css_numbers_and_calls() {
        let styled = highlight("width: calc(100% - 2px);", Some("css"));
        let calc = styled.runs().iter().find(|r| r.text == "calc").unwrap();
        assert_eq!(calc.token_type, TokenType::Call);
        let pct = styled.runs().iter().find(|r| r.text == "100%").unwrap();
        assert_eq!(pct.token_type, TokenType::Number);
    }
}
