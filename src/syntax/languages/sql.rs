//! SQL grammar

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{CallRule, KeywordRule, LineCommentRule, NumberRule, QuotedStringRule};

// Stored lowercase; matching is case-folded. The two-word forms
// (ORDER BY, GROUP BY) can never be a single token, so their parts are
// listed individually.
const KEYWORDS: &[&str] = &[
    "select", "from", "where", "insert", "update", "delete", "create", "drop", "alter",
    "table", "index", "view", "join", "inner", "left", "right", "on", "as", "and", "or",
    "not", "in", "like", "order", "group", "by", "having", "limit", "offset", "null", "true",
    "false",
];

/// Create the SQL grammar.
///
/// The one case-insensitive grammar: `select` and `SELECT` are both
/// keywords.
pub fn sql() -> Grammar {
    Grammar::new("SQL", &['_', '.', '"', '\''])
        .with_rule(LineCommentRule::new("--"))
        .with_rule(QuotedStringRule::new('\''))
        .with_rule(QuotedStringRule::new('"'))
        .with_rule(NumberRule)
        .with_rule(KeywordRule::case_insensitive(KEYWORDS))
        .with_rule(CallRule)
}

#[cfg(test)]
mod tests {
    use crate::highlight;
    use crate::syntax::TokenType;

    fn type_of(code: &str, text: &str) -> TokenType {
        let styled = highlight(code, Some("sql"));
        styled
            .runs()
            .iter()
            .find(|r| r.text == text)
            .map(|r| r.token_type)
            .unwrap_or_else(|| panic!("run {text:?} not found"))
    }

    #[test]
    fn test_sql_keywords_any_case() {
        let code = "SELECT name FROM users where id = 1";
        assert_eq!(type_of(code, "SELECT"), TokenType::Keyword);
        assert_eq!(type_of(code, "FROM"), TokenType::Keyword);
        assert_eq!(type_of(code, "where"), TokenType::Keyword);
    }

    #[test]
    fn test_sql_line_comment() {
        let code = "SELECT 1 -- fetch one";
        assert_eq!(type_of(code, "--"), TokenType::Comment);
        assert_eq!(type_of(code, "fetch"), TokenType::Comment);
    }

    #[test]
    fn test_sql_aggregate_call() {
        assert_eq!(type_of("COUNT(id)", "COUNT"), TokenType::Call);
    }
}
