//! Language identification and grammar dispatch
//!
//! Resolution never fails: an unknown identifier (or none at all)
//! degrades to the plain-text grammar. Highlighting is a presentation
//! enhancement, never a hard requirement.

use super::grammar::Grammar;
use super::languages;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Swift,
    Python,
    JavaScript,
    TypeScript,
    Java,
    Kotlin,
    Go,
    Rust,
    C,
    Cpp,
    CSharp,
    Php,
    Ruby,
    Perl,
    Bash,
    Shell,
    Sql,
    Html,
    Css,
    Json,
    Yaml,
    Markdown,
    Xml,
    PlainText,
}

impl Language {
    /// Detect a language from a string identifier or common alias.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// `None`, empty, and unrecognized identifiers all return `None`.
    pub fn detect(identifier: Option<&str>) -> Option<Self> {
        let id = identifier?.trim().to_lowercase();
        match id.as_str() {
            "swift" => Some(Language::Swift),
            "python" | "py" | "python3" => Some(Language::Python),
            "javascript" | "js" | "node" => Some(Language::JavaScript),
            "typescript" | "ts" => Some(Language::TypeScript),
            "java" => Some(Language::Java),
            "kotlin" | "kt" => Some(Language::Kotlin),
            "go" | "golang" => Some(Language::Go),
            "rust" | "rs" => Some(Language::Rust),
            "c" => Some(Language::C),
            "cpp" | "c++" | "cplusplus" => Some(Language::Cpp),
            "csharp" | "c#" | "cs" => Some(Language::CSharp),
            "php" => Some(Language::Php),
            "ruby" | "rb" => Some(Language::Ruby),
            "perl" | "pl" => Some(Language::Perl),
            "bash" => Some(Language::Bash),
            "shell" | "sh" | "zsh" | "fish" => Some(Language::Shell),
            "sql" => Some(Language::Sql),
            "html" | "htm" => Some(Language::Html),
            "css" => Some(Language::Css),
            "json" => Some(Language::Json),
            "yaml" | "yml" => Some(Language::Yaml),
            "markdown" | "md" => Some(Language::Markdown),
            "xml" => Some(Language::Xml),
            "plaintext" | "txt" | "text" => Some(Language::PlainText),
            _ => None,
        }
    }

    /// Detect a language from a file extension (without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "swift" => Some(Language::Swift),
            "py" | "pyw" | "pyi" => Some(Language::Python),
            "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "tsx" => Some(Language::TypeScript),
            "java" => Some(Language::Java),
            "kt" | "kts" => Some(Language::Kotlin),
            "go" => Some(Language::Go),
            "rs" => Some(Language::Rust),
            "c" | "h" => Some(Language::C),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => Some(Language::Cpp),
            "cs" => Some(Language::CSharp),
            "php" => Some(Language::Php),
            "rb" => Some(Language::Ruby),
            "pl" | "pm" => Some(Language::Perl),
            "bash" => Some(Language::Bash),
            "sh" | "zsh" => Some(Language::Shell),
            "sql" => Some(Language::Sql),
            "html" | "htm" => Some(Language::Html),
            "css" => Some(Language::Css),
            "json" => Some(Language::Json),
            "yaml" | "yml" => Some(Language::Yaml),
            "md" | "markdown" => Some(Language::Markdown),
            "xml" => Some(Language::Xml),
            "txt" | "text" => Some(Language::PlainText),
            _ => None,
        }
    }

    /// Display name for the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::Swift => "Swift",
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Java => "Java",
            Language::Kotlin => "Kotlin",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::Perl => "Perl",
            Language::Bash => "Bash",
            Language::Shell => "Shell",
            Language::Sql => "SQL",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Yaml => "YAML",
            Language::Markdown => "Markdown",
            Language::Xml => "XML",
            Language::PlainText => "Plain Text",
        }
    }

    /// All supported languages, in display order
    pub fn all() -> &'static [Language] {
        &[
            Language::Swift,
            Language::Python,
            Language::JavaScript,
            Language::TypeScript,
            Language::Java,
            Language::Kotlin,
            Language::Go,
            Language::Rust,
            Language::C,
            Language::Cpp,
            Language::CSharp,
            Language::Php,
            Language::Ruby,
            Language::Perl,
            Language::Bash,
            Language::Shell,
            Language::Sql,
            Language::Html,
            Language::Css,
            Language::Json,
            Language::Yaml,
            Language::Markdown,
            Language::Xml,
            Language::PlainText,
        ]
    }

    /// Build this language's grammar.
    ///
    /// Grammars are constructed fresh per call; nothing is cached or
    /// shared between highlight calls.
    pub fn grammar(&self) -> Grammar {
        match self {
            Language::Swift => languages::swift(),
            Language::Python => languages::python(),
            Language::JavaScript => languages::javascript(),
            Language::TypeScript => languages::typescript(),
            Language::Java => languages::java(),
            Language::Kotlin => languages::kotlin(),
            Language::Go => languages::go(),
            Language::Rust => languages::rust(),
            Language::C => languages::c(),
            Language::Cpp => languages::cpp(),
            Language::CSharp => languages::csharp(),
            Language::Php => languages::php(),
            Language::Ruby => languages::ruby(),
            Language::Perl => languages::perl(),
            Language::Bash | Language::Shell => languages::shell(),
            Language::Sql => languages::sql(),
            Language::Html => languages::html(),
            Language::Css => languages::css(),
            Language::Json => languages::json(),
            Language::Yaml => languages::yaml(),
            Language::Markdown => languages::markdown(),
            Language::Xml => languages::xml(),
            Language::PlainText => Grammar::plain_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_direct() {
        assert_eq!(Language::detect(Some("python")), Some(Language::Python));
        assert_eq!(Language::detect(Some("rust")), Some(Language::Rust));
        assert_eq!(Language::detect(Some("plaintext")), Some(Language::PlainText));
    }

    #[test]
    fn test_detect_aliases() {
        assert_eq!(Language::detect(Some("py")), Some(Language::Python));
        assert_eq!(Language::detect(Some("js")), Some(Language::JavaScript));
        assert_eq!(Language::detect(Some("c++")), Some(Language::Cpp));
        assert_eq!(Language::detect(Some("c#")), Some(Language::CSharp));
        assert_eq!(Language::detect(Some("zsh")), Some(Language::Shell));
        assert_eq!(Language::detect(Some("yml")), Some(Language::Yaml));
        assert_eq!(Language::detect(Some("rs")), Some(Language::Rust));
    }

    #[test]
    fn test_detect_case_insensitive() {
        assert_eq!(Language::detect(Some("Python")), Some(Language::Python));
        assert_eq!(Language::detect(Some("SQL")), Some(Language::Sql));
        assert_eq!(Language::detect(Some("  go  ")), Some(Language::Go));
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(Language::detect(Some("brainfuck")), None);
        assert_eq!(Language::detect(Some("")), None);
        assert_eq!(Language::detect(None), None);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("rs"), Some(Language::Rust));
        assert_eq!(Language::from_extension("PY"), Some(Language::Python));
        assert_eq!(Language::from_extension("hpp"), Some(Language::Cpp));
        assert_eq!(Language::from_extension("bin"), None);
    }

    #[test]
    fn test_every_language_builds_a_grammar() {
        for language in Language::all() {
            let grammar = language.grammar();
            assert!(!grammar.name().is_empty());
        }
    }
}
