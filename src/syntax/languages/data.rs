//! JSON and YAML grammars

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{KeywordRule, LineCommentRule, NumberRule, QuotedStringRule};

const LITERALS: &[&str] = &["true", "false", "null"];

/// Create the JSON grammar
pub fn json() -> Grammar {
    Grammar::new("JSON", &['_', '.', '"'])
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::new(LITERALS))
}

/// Create the YAML grammar
pub fn yaml() -> Grammar {
    Grammar::new("YAML", &['_', '.', '"', '\''])
        .with_rule(LineCommentRule::new("#"))
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::new(LITERALS))
}

#[cfg(test)]
mod tests {
    use crate::highlight;
    use crate::syntax::TokenType;

    #[test]
    fn test_json_values() {
        let styled = highlight("{\"count\": 3, \"ok\": true}", Some("json"));
        let key = styled.runs().iter().find(|r| r.text == "\"count\"").unwrap();
        assert_eq!(key.token_type, TokenType::String);
        let num = styled.runs().iter().find(|r| r.text == "3").unwrap();
        assert_eq!(num.token_type, TokenType::Number);
        let lit = styled.runs().iter().find(|r| r.text == "true").unwrap();
        assert_eq!(lit.token_type, TokenType::Keyword);
    }
}
