//! Token stream construction
//!
//! Splitting is purely lexical: characters are either whitespace,
//! delimiters, or word characters, and maximal runs of one class become
//! one token. Delimiter runs (`//`, `/*`, `(`, `<!--`) are content
//! tokens like word runs are; only true whitespace is exempt from
//! classification. Concatenating every token's text reproduces the
//! input exactly.

/// The per-language set of characters that terminate a token.
///
/// The set is "everything that is not alphanumeric", minus the
/// characters a language re-admits as identifier-legal (`_` always,
/// plus things like `.`, `"`, `#`, `$`, `@`, backtick). Whitespace is
/// always a delimiter and can never be re-admitted.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterSet {
    word_chars: &'static [char],
}

impl DelimiterSet {
    /// Create a delimiter set re-admitting the given word characters
    pub const fn new(word_chars: &'static [char]) -> Self {
        Self { word_chars }
    }

    /// Check whether a character splits tokens
    pub fn is_delimiter(&self, ch: char) -> bool {
        !ch.is_alphanumeric() && !self.word_chars.contains(&ch)
    }
}

/// Character classes driving the run splitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Space,
    Delimiter,
    Word,
}

fn classify_char(ch: char, delimiters: &DelimiterSet) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Space
    } else if delimiters.is_delimiter(ch) {
        CharClass::Delimiter
    } else {
        CharClass::Word
    }
}

/// Whether a token is classifiable content or plain whitespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of whitespace characters; may span lines
    Whitespace,
    /// A run of word characters or of non-whitespace delimiters;
    /// never spans lines
    Content,
}

/// A contiguous slice of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Byte offset where the token starts (inclusive)
    pub start: usize,
    /// Byte offset where the token ends (exclusive)
    pub end: usize,
    /// Physical line index (0-based) of the token's first character
    pub line: usize,
    /// Whitespace or content
    pub kind: TokenKind,
}

impl Token {
    /// Borrow the token's text out of the source it was built from
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Check whether this is a whitespace token
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

/// Split source text into an ordered whitespace/content token stream.
///
/// Pure function: identical input and delimiter set always yield the
/// identical sequence. No token is empty.
pub fn tokenize(source: &str, delimiters: &DelimiterSet) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line = 0usize;

    let mut run_start = 0usize;
    let mut run_line = 0usize;
    let mut run_class: Option<CharClass> = None;

    for (offset, ch) in source.char_indices() {
        let class = classify_char(ch, delimiters);
        match run_class {
            Some(current) if current == class => {}
            Some(current) => {
                tokens.push(Token {
                    start: run_start,
                    end: offset,
                    line: run_line,
                    kind: kind_of(current),
                });
                run_start = offset;
                run_line = line;
                run_class = Some(class);
            }
            None => {
                run_line = line;
                run_class = Some(class);
            }
        }
        if ch == '\n' {
            line += 1;
        }
    }

    if let Some(current) = run_class {
        tokens.push(Token {
            start: run_start,
            end: source.len(),
            line: run_line,
            kind: kind_of(current),
        });
    }

    tokens
}

fn kind_of(class: CharClass) -> TokenKind {
    match class {
        CharClass::Space => TokenKind::Whitespace,
        CharClass::Delimiter | CharClass::Word => TokenKind::Content,
    }
}
