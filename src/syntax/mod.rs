//! Syntax classification module
//!
//! The pipeline: a language's [`Grammar`] supplies a delimiter set used
//! by [`tokenize`] to split source text into a token stream; each
//! content token is then classified by the grammar's ordered rules
//! through a [`SegmentContext`] view; the [`OutputBuilder`] turns the
//! classified stream into styled runs.

mod context;
mod grammar;
mod languages;
mod output;
mod registry;
mod rules;
mod stream;
mod style;
mod tokens;

pub use context::SegmentContext;
pub use grammar::Grammar;
pub use output::{OutputBuilder, StyledRun, StyledText};
pub use registry::Language;
pub use rules::{
    BlockSpanRule, CStyleCommentRule, CallRule, DotAccessRule, KeywordRule, LineCommentRule,
    NumberRule, PreprocessorRule, QuotedStringRule, SyntaxRule, TypeNameRule,
};
pub use stream::{tokenize, DelimiterSet, Token, TokenKind};
pub use style::{Color, Style};
pub use tokens::TokenType;
