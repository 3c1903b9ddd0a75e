//! # Micropad Syntax
//!
//! Tokenizing lexers for the highlighting pipeline.
//!
//! The one contract everything downstream relies on: for any input text and
//! any supported language, concatenating the returned token texts reproduces
//! the input exactly. No gaps, no overlaps, no reordering. The flattener
//! turns tokens into a per-character style sequence by repeating each token's
//! style once per character, so a single dropped or duplicated character
//! would shift every style after it.
//!
//! ## Learning: Closed Enums over String Keys
//!
//! Lexical categories are a closed `enum` rather than free-form strings.
//! Downstream style lookup is then total by construction: a `match` on
//! `TokenCategory` cannot miss a case the compiler knows about, and a theme
//! that omits a category degrades to a default style instead of failing a
//! string lookup at runtime.

mod lang;
mod lexer;
mod markup;

use serde::{Deserialize, Serialize};

/// Errors that can occur during tokenization.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Classification assigned to a token by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Keyword,
    Name,
    Builtin,
    Constant,
    Number,
    String,
    Comment,
    Operator,
    Punctuation,
    Tag,
    Attribute,
    Whitespace,
    Text,
}

impl TokenCategory {
    /// Every category any lexer can emit, in declaration order.
    pub const ALL: &'static [TokenCategory] = &[
        TokenCategory::Keyword,
        TokenCategory::Name,
        TokenCategory::Builtin,
        TokenCategory::Constant,
        TokenCategory::Number,
        TokenCategory::String,
        TokenCategory::Comment,
        TokenCategory::Operator,
        TokenCategory::Punctuation,
        TokenCategory::Tag,
        TokenCategory::Attribute,
        TokenCategory::Whitespace,
        TokenCategory::Text,
    ];
}

/// A (category, literal text) pair produced by lexing.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub category: TokenCategory,
    pub text: String,
}

impl Token {
    pub fn new(category: TokenCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    /// Length of the token's text in characters (not bytes).
    pub fn chars(&self) -> usize {
        self.text.chars().count()
    }
}

/// Tokenizes the complete document text for an explicitly named language.
///
/// The lexer is always invoked on the full text, never a partial slice;
/// multi-line constructs (block comments, triple-quoted strings) carry no
/// state between calls because there is nothing to carry it between.
pub fn tokenize(text: &str, language: &str) -> Result<Vec<Token>, SyntaxError> {
    tracing::trace!(language, bytes = text.len(), "tokenizing document");

    if let Some(config) = lang::config_for(language) {
        return Ok(lexer::lex_code(text, config));
    }
    if matches!(language, "html" | "xml") {
        return Ok(markup::lex_markup(text));
    }
    Err(SyntaxError::UnsupportedLanguage(language.to_string()))
}

/// Returns the languages a lexer exists for.
pub fn supported_languages() -> &'static [&'static str] {
    &["html", "javascript", "python", "rust", "xml"]
}

/// Returns true if `language` names a known lexer.
pub fn is_supported(language: &str) -> bool {
    lang::config_for(language).is_some() || matches!(language, "html" | "xml")
}

/// Fails with `UnsupportedLanguage` unless `language` names a known lexer.
pub fn ensure_supported(language: &str) -> Result<(), SyntaxError> {
    if is_supported(language) {
        Ok(())
    } else {
        Err(SyntaxError::UnsupportedLanguage(language.to_string()))
    }
}

/// Detects a language identifier from a filename.
///
/// Only used by UI glue when the user gave no explicit language; the core
/// pipeline always selects by identifier.
pub fn detect_language(filename: &str) -> Option<&'static str> {
    let ext = filename.rsplit('.').next().unwrap_or("");
    match ext {
        "rs" => Some("rust"),
        "py" | "pyw" | "pyi" => Some("python"),
        "js" | "mjs" | "cjs" | "jsx" => Some("javascript"),
        "html" | "htm" => Some("html"),
        "xml" | "xsl" | "svg" => Some("xml"),
        _ => None,
    }
}
