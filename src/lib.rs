//! tinct - a rule-based source code syntax highlighter
//!
//! Given raw source text and an optional language hint, tinct splits
//! the text into tokens, classifies each token with the language's
//! ordered rule list (first match wins), and returns styled runs whose
//! concatenation reproduces the input exactly. Unknown languages are
//! not an error; they render as plain monospaced text.
//!
//! ```
//! use tinct::highlight;
//!
//! let styled = highlight("def f():\n    pass", Some("python"));
//! assert_eq!(styled.text(), "def f():\n    pass");
//! ```

pub mod error;
pub mod render;
pub mod syntax;
pub mod theme;

pub use error::{Result, TinctError};
pub use syntax::{
    Color, Grammar, Language, SegmentContext, Style, StyledRun, StyledText, SyntaxRule,
    TokenType,
};
pub use theme::{Font, Theme};

use syntax::{tokenize, OutputBuilder, TokenKind};

/// A syntax highlighter bound to a theme
pub struct Highlighter {
    theme: Theme,
}

impl Highlighter {
    /// Create a highlighter with the given theme
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Highlight code, resolving the language from an identifier or
    /// alias.
    ///
    /// `None`, empty, and unrecognized identifiers degrade to plain
    /// text; this call never fails.
    pub fn highlight(&self, code: &str, language: Option<&str>) -> StyledText {
        let language = Language::detect(language).unwrap_or(Language::PlainText);
        self.highlight_language(code, language)
    }

    /// Highlight code with an already-resolved language
    pub fn highlight_language(&self, code: &str, language: Language) -> StyledText {
        let grammar = language.grammar();
        let tokens = tokenize(code, grammar.delimiters());

        let mut builder = OutputBuilder::new(&self.theme);
        for (index, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Whitespace => builder.push(token.text(code), TokenType::Plain),
                TokenKind::Content => {
                    let segment = SegmentContext::new(code, &tokens, index);
                    let token_type = grammar.classify(&segment).unwrap_or(TokenType::Plain);
                    builder.push(token.text(code), token_type);
                }
            }
        }
        builder.finish()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// Highlight with the default theme
pub fn highlight(code: &str, language: Option<&str>) -> StyledText {
    Highlighter::default().highlight(code, language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lossless_reconstruction() {
        let samples = [
            ("fn main() {\n    let x = 1;\n}\n", Some("rust")),
            ("def f():\n    return 0  # done\n", Some("python")),
            ("SELECT * FROM t WHERE a = 'x';", Some("sql")),
            ("no language at all\n\ttabs too", None),
            ("unicode: héllo wörld 你好", Some("markdown")),
            ("", Some("go")),
        ];
        for (code, language) in samples {
            assert_eq!(highlight(code, language).text(), code, "input {code:?}");
        }
    }

    #[test]
    fn test_idempotent_classification() {
        let code = "func add(a: Int, b: Int) -> Int { a + b }";
        let first = highlight(code, Some("swift"));
        let second = highlight(code, Some("swift"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_language_single_plain_run() {
        let styled = highlight("def f(): pass", Some("brainfuck"));
        assert_eq!(styled.runs().len(), 1);
        assert_eq!(styled.runs()[0].token_type, TokenType::Plain);
        assert_eq!(styled.runs()[0].text, "def f(): pass");
    }

    #[test]
    fn test_none_language_is_plain() {
        let styled = highlight("let x = 1;", None);
        assert_eq!(styled.runs().len(), 1);
        assert_eq!(styled.runs()[0].token_type, TokenType::Plain);
    }

    #[test]
    fn test_python_keyword_detection() {
        let styled = highlight("def foo():\n    pass", Some("python"));
        for word in ["def", "pass"] {
            let run = styled.runs().iter().find(|r| r.text == word).unwrap();
            assert_eq!(run.token_type, TokenType::Keyword, "token {word:?}");
        }
    }

    #[test]
    fn test_javascript_call_detection() {
        let styled = highlight("foo(1, 2)", Some("javascript"));
        let foo = styled.runs().iter().find(|r| r.text == "foo").unwrap();
        assert_eq!(foo.token_type, TokenType::Call);
    }

    #[test]
    fn test_rust_number_edge_cases() {
        let styled = highlight(".5 + 1_000", Some("rust"));
        for number in [".5", "1_000"] {
            let run = styled.runs().iter().find(|r| r.text == number).unwrap();
            assert_eq!(run.token_type, TokenType::Number, "token {number:?}");
        }
    }

    #[test]
    fn test_unterminated_block_comment() {
        let styled = highlight("/* start\nstill comment */", Some("c"));
        // every content token, including those on the opening line, is
        // part of the comment
        for run in styled.runs() {
            if !run.text.chars().all(char::is_whitespace) {
                assert_eq!(run.token_type, TokenType::Comment, "run {:?}", run.text);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let styled = highlight("", Some("go"));
        assert!(styled.is_empty());
        assert_eq!(styled.text(), "");
    }

    #[test]
    fn test_theme_injection() {
        let mut theme = Theme::default();
        theme.keyword = Style::fg(Color::BrightRed);
        let styled = Highlighter::new(theme).highlight("fn x", Some("rust"));
        let keyword = styled.runs().iter().find(|r| r.text == "fn").unwrap();
        assert_eq!(keyword.style, Style::fg(Color::BrightRed));
    }

    #[test]
    fn test_single_font_throughout() {
        let styled = highlight("let x = 1", Some("rust"));
        assert_eq!(styled.font(), &Font::default());
    }
}
