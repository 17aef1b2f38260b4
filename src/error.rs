//! Error types for tinct
//!
//! Highlighting itself never fails: unknown languages degrade to plain
//! text and arbitrary input is always renderable. Errors only arise at
//! the edges, when loading theme files or doing CLI I/O.

use thiserror::Error;

/// Result type alias for tinct operations
pub type Result<T> = std::result::Result<T, TinctError>;

/// Error types for theme loading and the CLI
#[derive(Error, Debug)]
pub enum TinctError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid theme: {0}")]
    InvalidTheme(String),

    #[error("unknown color name: {0}")]
    UnknownColor(String),

    #[error("{0}")]
    Message(String),
}
