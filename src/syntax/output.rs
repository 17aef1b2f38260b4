//! Styled output assembly
//!
//! The builder consumes (text, token type) pairs in stream order and
//! produces styled runs. Concatenating every run's text reproduces the
//! highlighted source exactly; adjacent runs of the same token type are
//! merged, so plain-text output of any input is a single run.

use crate::theme::{Font, Theme};

use super::style::Style;
use super::tokens::TokenType;

/// One contiguous piece of highlighted output
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    /// The run's text, verbatim from the source
    pub text: String,
    /// The semantic category the run was classified as
    pub token_type: TokenType,
    /// The resolved style for that category
    pub style: Style,
}

/// A complete highlighted text: ordered runs plus the single font the
/// whole text renders in
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    runs: Vec<StyledRun>,
    font: Font,
}

impl StyledText {
    /// The styled runs, in source order
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// The font applied throughout
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Reassemble the original source text
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check whether there are no runs at all
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Accumulates classified tokens into styled runs
pub struct OutputBuilder<'a> {
    theme: &'a Theme,
    runs: Vec<StyledRun>,
}

impl<'a> OutputBuilder<'a> {
    /// Create a builder resolving styles against the given theme
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            runs: Vec::new(),
        }
    }

    /// Append one token's text with its classification.
    ///
    /// Whitespace is pushed as [`TokenType::Plain`].
    pub fn push(&mut self, text: &str, token_type: TokenType) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.runs.last_mut() {
            if last.token_type == token_type {
                last.text.push_str(text);
                return;
            }
        }
        self.runs.push(StyledRun {
            text: text.to_string(),
            token_type,
            style: self.theme.style_for(token_type),
        });
    }

    /// Finish, attaching the theme's font to the whole text
    pub fn finish(self) -> StyledText {
        StyledText {
            runs: self.runs,
            font: self.theme.font.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_adjacent_same_type_runs_merge() {
        let theme = Theme::default();
        let mut builder = OutputBuilder::new(&theme);
        builder.push("a", TokenType::Plain);
        builder.push(" ", TokenType::Plain);
        builder.push("b", TokenType::Plain);
        builder.push("// c", TokenType::Comment);
        let styled = builder.finish();

        assert_eq!(styled.runs().len(), 2);
        assert_eq!(styled.runs()[0].text, "a b");
        assert_eq!(styled.runs()[1].token_type, TokenType::Comment);
        assert_eq!(styled.text(), "a b// c");
    }

    #[test]
    fn test_styles_come_from_theme() {
        let mut theme = Theme::default();
        theme.keyword = Style::fg(crate::syntax::Color::Red);
        let mut builder = OutputBuilder::new(&theme);
        builder.push("fn", TokenType::Keyword);
        let styled = builder.finish();
        assert_eq!(styled.runs()[0].style, Style::fg(crate::syntax::Color::Red));
    }

    #[test]
    fn test_empty_builder() {
        let theme = Theme::default();
        let styled = OutputBuilder::new(&theme).finish();
        assert!(styled.is_empty());
        assert_eq!(styled.text(), "");
    }

    #[test]
    fn test_empty_push_ignored() {
        let theme = Theme::default();
        let mut builder = OutputBuilder::new(&theme);
        builder.push("", TokenType::Keyword);
        assert!(builder.finish().is_empty());
    }
}
