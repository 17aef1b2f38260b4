//! Token types for syntax highlighting
//!
//! This module defines the semantic categories a classified token can
//! carry. The set is closed: every content token gets exactly one of
//! these (or `Plain` when no rule matched).

/// Semantic token types for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Language keywords (if, else, fn, def, ...)
    Keyword,
    /// String literals and their interior tokens
    String,
    /// Numeric literals (integers, floats, `1_000`, `.5`)
    Number,
    /// Comments, line or block
    Comment,
    /// A name immediately followed by an opening parenthesis
    Call,
    /// Type names (capitalized identifiers, where a grammar opts in)
    Type,
    /// Properties; reserved for custom rules
    Property,
    /// Leading-dot member access (`.count`, `.red`)
    DotAccess,
    /// Preprocessor directives (#include, #if)
    Preprocessing,
    /// Escape hatch for embedder-defined rules
    Custom,
    /// Unclassified text
    Plain,
}

impl TokenType {
    /// Get a human-readable name for this token type.
    ///
    /// These double as the key names in TOML theme files.
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::String => "string",
            TokenType::Number => "number",
            TokenType::Comment => "comment",
            TokenType::Call => "call",
            TokenType::Type => "type",
            TokenType::Property => "property",
            TokenType::DotAccess => "dot_access",
            TokenType::Preprocessing => "preprocessing",
            TokenType::Custom => "custom",
            TokenType::Plain => "plain",
        }
    }

    /// Parse a token type from its name (for TOML theme loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "keyword" => Some(TokenType::Keyword),
            "string" => Some(TokenType::String),
            "number" => Some(TokenType::Number),
            "comment" => Some(TokenType::Comment),
            "call" => Some(TokenType::Call),
            "type" => Some(TokenType::Type),
            "property" => Some(TokenType::Property),
            "dot_access" => Some(TokenType::DotAccess),
            "preprocessing" => Some(TokenType::Preprocessing),
            "custom" => Some(TokenType::Custom),
            "plain" => Some(TokenType::Plain),
            _ => None,
        }
    }

    /// All token types, in a stable order
    pub fn all() -> [TokenType; 11] {
        [
            TokenType::Keyword,
            TokenType::String,
            TokenType::Number,
            TokenType::Comment,
            TokenType::Call,
            TokenType::Type,
            TokenType::Property,
            TokenType::DotAccess,
            TokenType::Preprocessing,
            TokenType::Custom,
            TokenType::Plain,
        ]
    }
}
