//! Table-driven lexer for code languages.
//!
//! ## Learning: Byte Positions, Char Boundaries
//!
//! The cursor tracks a byte offset into the input but only ever advances by
//! whole characters, so every slice it hands out is valid UTF-8. Classifying
//! on ASCII while consuming whole chars is what keeps the coverage contract
//! intact for arbitrary input.

use crate::lang::LangConfig;
use crate::{Token, TokenCategory};

const OPERATOR_CHARS: &str = "=!<>+-*/%&|^~?";
const PUNCTUATION_CHARS: &str = "(){}[];,.:@#$";

/// A cursor over `text`; `pos` is a byte offset, always on a char boundary.
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub(crate) fn eat_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Consumes up to and including the next occurrence of `s`, or the whole
    /// remaining input if `s` never occurs.
    pub(crate) fn eat_until_str(&mut self, s: &str) {
        match self.rest().find(s) {
            Some(idx) => self.pos += idx + s.len(),
            None => self.pos = self.text.len(),
        }
    }

    pub(crate) fn slice(&self, start: usize) -> &'a str {
        &self.text[start..self.pos]
    }
}

/// Lexes the full text of a code language into covering tokens.
pub(crate) fn lex_code(text: &str, config: &LangConfig) -> Vec<Token> {
    let mut cur = Cursor::new(text);
    let mut tokens = Vec::new();

    while let Some(c) = cur.peek() {
        let start = cur.pos();

        if c.is_whitespace() {
            cur.eat_while(char::is_whitespace);
            push(&mut tokens, &cur, start, TokenCategory::Whitespace);
            continue;
        }

        // Comments before operators: "//" must not lex as two divisions.
        if !config.line_comment.is_empty() && cur.rest().starts_with(config.line_comment) {
            cur.eat_while(|c| c != '\n');
            push(&mut tokens, &cur, start, TokenCategory::Comment);
            continue;
        }

        if let Some((open, close)) = config.block_comment {
            if cur.rest().starts_with(open) {
                cur.eat_str(open);
                cur.eat_until_str(close);
                push(&mut tokens, &cur, start, TokenCategory::Comment);
                continue;
            }
        }

        if config.triple_quote_strings && (c == '"' || c == '\'') {
            let delim = if c == '"' { "\"\"\"" } else { "'''" };
            if cur.rest().starts_with(delim) {
                cur.eat_str(delim);
                cur.eat_until_str(delim);
                push(&mut tokens, &cur, start, TokenCategory::String);
                continue;
            }
        }

        if c == '"' || (config.single_quote_strings && c == '\'') {
            cur.bump();
            eat_string_body(&mut cur, c);
            push(&mut tokens, &cur, start, TokenCategory::String);
            continue;
        }

        if config.backtick_strings && c == '`' {
            cur.bump();
            // template literals span lines
            while let Some(c) = cur.bump() {
                if c == '\\' {
                    cur.bump();
                } else if c == '`' {
                    break;
                }
            }
            push(&mut tokens, &cur, start, TokenCategory::String);
            continue;
        }

        if c.is_ascii_digit() {
            eat_number(&mut cur);
            push(&mut tokens, &cur, start, TokenCategory::Number);
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            cur.eat_while(|c| c.is_alphanumeric() || c == '_');
            let category = classify_word(cur.slice(start), config);
            push(&mut tokens, &cur, start, category);
            continue;
        }

        if OPERATOR_CHARS.contains(c) {
            eat_operator(&mut cur);
            push(&mut tokens, &cur, start, TokenCategory::Operator);
            continue;
        }

        if PUNCTUATION_CHARS.contains(c) {
            cur.bump();
            push(&mut tokens, &cur, start, TokenCategory::Punctuation);
            continue;
        }

        cur.bump();
        push(&mut tokens, &cur, start, TokenCategory::Text);
    }

    tokens
}

pub(crate) fn push(
    tokens: &mut Vec<Token>,
    cur: &Cursor<'_>,
    start: usize,
    category: TokenCategory,
) {
    tokens.push(Token::new(category, cur.slice(start)));
}

/// Consumes a quoted string body after the opening delimiter.
///
/// Stops after the closing delimiter, or at an (unescaped) newline so a
/// missing quote cannot repaint the rest of the document.
fn eat_string_body(cur: &mut Cursor<'_>, delim: char) {
    while let Some(c) = cur.peek() {
        if c == '\n' {
            break;
        }
        cur.bump();
        if c == '\\' {
            cur.bump();
        } else if c == delim {
            break;
        }
    }
}

fn eat_number(cur: &mut Cursor<'_>) {
    if cur.eat_str("0x") || cur.eat_str("0X") {
        cur.eat_while(|c| c.is_ascii_hexdigit() || c == '_');
        return;
    }
    if cur.eat_str("0b") || cur.eat_str("0B") {
        cur.eat_while(|c| matches!(c, '0' | '1' | '_'));
        return;
    }
    if cur.eat_str("0o") || cur.eat_str("0O") {
        cur.eat_while(|c| matches!(c, '0'..='7' | '_'));
        return;
    }

    cur.eat_while(|c| c.is_ascii_digit() || c == '_');
    if cur.peek() == Some('.') && second_char_is_digit(cur) {
        cur.bump();
        cur.eat_while(|c| c.is_ascii_digit() || c == '_');
    }

    // exponent, only when something actually follows the sign
    let mut lookahead = cur.rest().chars();
    if matches!(lookahead.next(), Some('e' | 'E')) {
        let mut to_consume = 1;
        let mut next = lookahead.next();
        if matches!(next, Some('+' | '-')) {
            to_consume += 1;
            next = lookahead.next();
        }
        if next.is_some_and(|c| c.is_ascii_digit()) {
            for _ in 0..to_consume {
                cur.bump();
            }
            cur.eat_while(|c| c.is_ascii_digit() || c == '_');
        }
    }

    // type suffixes (1u32, 2.5f64) stay part of the number token
    cur.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
}

fn second_char_is_digit(cur: &Cursor<'_>) -> bool {
    let mut chars = cur.rest().chars();
    chars.next();
    chars.next().is_some_and(|c| c.is_ascii_digit())
}

fn eat_operator(cur: &mut Cursor<'_>) {
    cur.bump();
    // multi-char operators: ==, !=, <=, >=, &&, ||, ->, =>, <<=, >>=
    if matches!(cur.peek(), Some('=' | '>' | '<' | '&' | '|')) {
        cur.bump();
        if cur.peek() == Some('=') {
            cur.bump();
        }
    }
}

fn classify_word(word: &str, config: &LangConfig) -> TokenCategory {
    if config.constants.contains(&word) {
        TokenCategory::Constant
    } else if config.keywords.contains(&word) {
        TokenCategory::Keyword
    } else if config.builtins.contains(&word) {
        TokenCategory::Builtin
    } else {
        TokenCategory::Name
    }
}
