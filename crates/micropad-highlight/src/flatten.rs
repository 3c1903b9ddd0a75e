//! Token stream to per-character style expansion.

use micropad_syntax::Token;

use crate::style::{StyleDescriptor, StyleTable};

/// Flattens a token stream into one style descriptor per character.
///
/// The result length equals the sum of per-token character counts, which by
/// the lexer's coverage contract equals the character count of the lexed
/// text. A category without a table entry degrades to the default style for
/// that token's characters; it never aborts the pass.
pub fn flatten(tokens: &[Token], table: &StyleTable) -> Vec<StyleDescriptor> {
    let total: usize = tokens.iter().map(Token::chars).sum();
    let mut styles = Vec::with_capacity(total);

    for token in tokens {
        let style = table.get(token.category).unwrap_or_else(|| {
            tracing::warn!(
                category = ?token.category,
                "style table has no entry for category, using the default style"
            );
            table.default_style()
        });
        styles.extend(std::iter::repeat(style).take(token.chars()));
    }

    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use micropad_syntax::{tokenize, TokenCategory};
    use proptest::prelude::*;

    use crate::theme::{CategoryStyle, Theme};

    #[test]
    fn test_length_matches_char_count() {
        let text = "x = 1 # café\n";
        let tokens = tokenize(text, "python").unwrap();
        let table = StyleTable::build(&Theme::dark());

        let styles = flatten(&tokens, &table);
        assert_eq!(styles.len(), text.chars().count());
    }

    #[test]
    fn test_styles_line_up_with_tokens() {
        let tokens = tokenize("x = 1\n", "python").unwrap();
        let table = StyleTable::build(&Theme::dark());
        let styles = flatten(&tokens, &table);

        assert_eq!(styles[0], table.get(TokenCategory::Name).unwrap());
        assert_eq!(styles[2], table.get(TokenCategory::Operator).unwrap());
        assert_eq!(styles[4], table.get(TokenCategory::Number).unwrap());
    }

    #[test]
    fn test_missing_category_degrades_to_default() {
        // a theme that only knows about names
        let theme = Theme {
            name: "names-only".into(),
            is_dark: true,
            styles: vec![CategoryStyle::new(TokenCategory::Name).color("#ffffff")],
        };
        let table = StyleTable::build(&theme);
        let tokens = tokenize("x = 1\n", "python").unwrap();

        let styles = flatten(&tokens, &table);
        assert_eq!(styles.len(), 6);
        assert_eq!(styles[0], table.get(TokenCategory::Name).unwrap());
        // operator and number positions fall back, rest of the pass intact
        assert_eq!(styles[2], table.default_style());
        assert_eq!(styles[4], table.default_style());
    }

    #[test]
    fn test_complete_theme_never_degrades() {
        let table = StyleTable::build(&Theme::dark());
        let tokens = tokenize("<a href='x'>hi</a> <!-- c -->", "html").unwrap();
        for (idx, token) in tokens.iter().enumerate() {
            assert!(
                table.get(token.category).is_some(),
                "token {idx} of category {:?} has no style",
                token.category
            );
        }
        let styles = flatten(&tokens, &table);
        assert!(!styles.is_empty());
    }

    proptest! {
        #[test]
        fn prop_length_property(text in any::<String>()) {
            let tokens = tokenize(&text, "python").unwrap();
            let table = StyleTable::build(&Theme::dark());
            let styles = flatten(&tokens, &table);
            let expected: usize = tokens.iter().map(|t| t.text.chars().count()).sum();
            prop_assert_eq!(styles.len(), expected);
            prop_assert_eq!(styles.len(), text.chars().count());
        }
    }
}
