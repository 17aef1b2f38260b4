//! Theme support
//!
//! A theme is the per-token-type style table plus the one font the
//! whole output renders in. It is plain data passed into the
//! highlighter by value; there is no global palette, so tests (and
//! embedders) can inject whatever they like.
//!
//! Themes load from TOML files:
//!
//! ```text
//! # ~/.tinct.toml
//! [colors]
//! keyword = "magenta bold"
//! string = "green"
//! comment = "gray italic"
//!
//! [font]
//! family = "JetBrains Mono"
//! size = 13.0
//! ```

use std::fs;
use std::path::Path;

use crate::error::{Result, TinctError};
use crate::syntax::{Color, Style, TokenType};

/// The single font applied to all highlighted output
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Font family name; meaningful to GUI embedders, ignored by the
    /// terminal renderer
    pub family: String,
    /// Point size
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "monospace".to_string(),
            size: 13.0,
        }
    }
}

/// Color table mapping token types to styles
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub plain: Style,
    pub keyword: Style,
    pub string: Style,
    pub number: Style,
    pub comment: Style,
    pub call: Style,
    pub type_name: Style,
    pub property: Style,
    pub dot_access: Style,
    pub preprocessing: Style,
    pub custom: Style,
    pub font: Font,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            plain: Style::default(),
            keyword: Style::fg(Color::Magenta).with_bold(),
            string: Style::fg(Color::Green),
            number: Style::fg(Color::Cyan),
            comment: Style::fg(Color::BrightBlack).with_italic(),
            call: Style::fg(Color::Blue),
            type_name: Style::fg(Color::Yellow),
            property: Style::fg(Color::BrightCyan),
            dot_access: Style::fg(Color::BrightBlack),
            preprocessing: Style::fg(Color::BrightMagenta),
            custom: Style::default(),
            font: Font::default(),
        }
    }
}

impl Theme {
    /// Look up the style for a token type
    pub fn style_for(&self, token_type: TokenType) -> Style {
        match token_type {
            TokenType::Plain => self.plain,
            TokenType::Keyword => self.keyword,
            TokenType::String => self.string,
            TokenType::Number => self.number,
            TokenType::Comment => self.comment,
            TokenType::Call => self.call,
            TokenType::Type => self.type_name,
            TokenType::Property => self.property,
            TokenType::DotAccess => self.dot_access,
            TokenType::Preprocessing => self.preprocessing,
            TokenType::Custom => self.custom,
        }
    }

    /// Replace the style for a token type
    pub fn set_style(&mut self, token_type: TokenType, style: Style) {
        match token_type {
            TokenType::Plain => self.plain = style,
            TokenType::Keyword => self.keyword = style,
            TokenType::String => self.string = style,
            TokenType::Number => self.number = style,
            TokenType::Comment => self.comment = style,
            TokenType::Call => self.call = style,
            TokenType::Type => self.type_name = style,
            TokenType::Property => self.property = style,
            TokenType::DotAccess => self.dot_access = style,
            TokenType::Preprocessing => self.preprocessing = style,
            TokenType::Custom => self.custom = style,
        }
    }

    /// Load a theme from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a theme from TOML text.
    ///
    /// Missing entries keep their defaults; unknown token types and
    /// color names are errors rather than silently ignored.
    pub fn parse(contents: &str) -> Result<Self> {
        let table: toml::Table = contents
            .parse()
            .map_err(|e: toml::de::Error| TinctError::InvalidTheme(e.to_string()))?;

        let mut theme = Theme::default();

        if let Some(colors) = table.get("colors") {
            let colors = colors
                .as_table()
                .ok_or_else(|| TinctError::InvalidTheme("[colors] must be a table".into()))?;
            for (key, value) in colors {
                let token_type = TokenType::from_name(key).ok_or_else(|| {
                    TinctError::InvalidTheme(format!("unknown token type: {key}"))
                })?;
                let spec = value.as_str().ok_or_else(|| {
                    TinctError::InvalidTheme(format!("color for {key} must be a string"))
                })?;
                theme.set_style(token_type, parse_style(spec)?);
            }
        }

        if let Some(font) = table.get("font") {
            let font = font
                .as_table()
                .ok_or_else(|| TinctError::InvalidTheme("[font] must be a table".into()))?;
            if let Some(family) = font.get("family").and_then(|v| v.as_str()) {
                theme.font.family = family.to_string();
            }
            if let Some(size) = font.get("size").and_then(|v| v.as_float()) {
                theme.font.size = size as f32;
            }
        }

        Ok(theme)
    }
}

/// Parse a style spec: a color name optionally followed by
/// `bold`/`italic`/`underline` modifiers
fn parse_style(spec: &str) -> Result<Style> {
    let mut words = spec.split_whitespace();
    let name = words
        .next()
        .ok_or_else(|| TinctError::InvalidTheme("empty color spec".into()))?;
    let color =
        Color::from_name(name).ok_or_else(|| TinctError::UnknownColor(name.to_string()))?;

    let mut style = Style::fg(color);
    for word in words {
        style = match word {
            "bold" => style.with_bold(),
            "italic" => style.with_italic(),
            "underline" => style.with_underline(),
            other => {
                return Err(TinctError::InvalidTheme(format!(
                    "unknown style modifier: {other}"
                )))
            }
        };
    }
    Ok(style)
}
