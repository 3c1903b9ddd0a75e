//! Lexer for markup languages (HTML, XML).
//!
//! Two modes: outside tags everything is plain text until a `<`, inside a
//! tag the lexer distinguishes attribute names, `=`, and quoted values.
//! Comments use the `<!-- -->` form and may span lines.

use crate::lexer::{push, Cursor};
use crate::{Token, TokenCategory};

pub(crate) fn lex_markup(text: &str) -> Vec<Token> {
    let mut cur = Cursor::new(text);
    let mut tokens = Vec::new();

    while let Some(c) = cur.peek() {
        let start = cur.pos();

        if cur.rest().starts_with("<!--") {
            cur.eat_str("<!--");
            cur.eat_until_str("-->");
            push(&mut tokens, &cur, start, TokenCategory::Comment);
            continue;
        }

        if c == '<' {
            cur.bump();
            if !cur.eat_if('/') {
                cur.eat_if('!');
            }
            cur.eat_while(is_name_char);
            push(&mut tokens, &cur, start, TokenCategory::Tag);
            lex_tag_interior(&mut cur, &mut tokens);
            continue;
        }

        cur.eat_while(|c| c != '<');
        push(&mut tokens, &cur, start, TokenCategory::Text);
    }

    tokens
}

/// Lexes attributes between a tag name and the closing `>`.
fn lex_tag_interior(cur: &mut Cursor<'_>, tokens: &mut Vec<Token>) {
    while let Some(c) = cur.peek() {
        let start = cur.pos();

        if cur.eat_str("/>") || cur.eat_if('>') {
            push(tokens, cur, start, TokenCategory::Tag);
            return;
        }

        if c.is_whitespace() {
            cur.eat_while(char::is_whitespace);
            push(tokens, cur, start, TokenCategory::Whitespace);
            continue;
        }

        if c == '=' {
            cur.bump();
            push(tokens, cur, start, TokenCategory::Operator);
            continue;
        }

        if c == '"' || c == '\'' {
            cur.bump();
            // attribute values may span lines
            while let Some(body) = cur.bump() {
                if body == c {
                    break;
                }
            }
            push(tokens, cur, start, TokenCategory::String);
            continue;
        }

        if is_name_char(c) {
            cur.eat_while(is_name_char);
            push(tokens, cur, start, TokenCategory::Attribute);
            continue;
        }

        cur.bump();
        push(tokens, cur, start, TokenCategory::Text);
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | ':')
}
