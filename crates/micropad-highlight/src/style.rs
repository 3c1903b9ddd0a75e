//! Style descriptors and the category-to-style table.

use std::collections::HashMap;

use micropad_syntax::TokenCategory;

use crate::theme::{CategoryStyle, Color, Theme};

/// Immutable bundle of visual attributes for one character.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleDescriptor {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleDescriptor {
    /// "No special styling": the fallback for categories a theme omits.
    pub const PLAIN: StyleDescriptor = StyleDescriptor {
        foreground: None,
        background: None,
        bold: false,
        italic: false,
        underline: false,
    };

    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }

    fn from_entry(entry: &CategoryStyle) -> Self {
        Self {
            foreground: parse_color(&entry.color, entry),
            background: parse_color(&entry.bgcolor, entry),
            bold: entry.bold,
            italic: entry.italic,
            underline: entry.underline,
        }
    }
}

/// Colors are present only when the theme names one; an unparseable value is
/// treated as absent so one bad theme entry cannot take the table down.
fn parse_color(value: &str, entry: &CategoryStyle) -> Option<Color> {
    if value.is_empty() {
        return None;
    }
    let color = Color::from_hex(value);
    if color.is_none() {
        tracing::warn!(category = ?entry.category, value, "ignoring unparseable theme color");
    }
    color
}

/// Mapping from lexical category to style descriptor.
///
/// Built fresh whenever the active language or theme changes, then treated
/// as immutable; swapping the whole table replaces in-place mutation.
#[derive(Debug, Clone)]
pub struct StyleTable {
    entries: HashMap<TokenCategory, StyleDescriptor>,
    default: StyleDescriptor,
}

impl StyleTable {
    /// Builds the table from a theme. Deterministic and side-effect free;
    /// later duplicate entries for a category win.
    pub fn build(theme: &Theme) -> Self {
        let mut entries = HashMap::with_capacity(theme.styles.len());
        for entry in &theme.styles {
            entries.insert(entry.category, StyleDescriptor::from_entry(entry));
        }
        Self {
            entries,
            default: StyleDescriptor::PLAIN,
        }
    }

    pub fn get(&self, category: TokenCategory) -> Option<StyleDescriptor> {
        self.entries.get(&category).copied()
    }

    /// The guaranteed fallback entry.
    pub fn default_style(&self) -> StyleDescriptor {
        self.default
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_dark_theme() {
        let table = StyleTable::build(&Theme::dark());
        assert_eq!(table.len(), Theme::dark().styles.len());

        let keyword = table.get(TokenCategory::Keyword).unwrap();
        assert!(keyword.bold);
        assert!(keyword.foreground.is_some());

        // whitespace declares no attributes at all
        let ws = table.get(TokenCategory::Whitespace).unwrap();
        assert!(ws.is_plain());
    }

    #[test]
    fn test_empty_color_means_absent() {
        let theme = Theme {
            name: "t".into(),
            is_dark: true,
            styles: vec![CategoryStyle::new(TokenCategory::Comment).italic()],
        };
        let table = StyleTable::build(&theme);
        let style = table.get(TokenCategory::Comment).unwrap();
        assert!(style.foreground.is_none());
        assert!(style.background.is_none());
        assert!(style.italic);
    }

    #[test]
    fn test_unparseable_color_is_dropped() {
        let theme = Theme {
            name: "t".into(),
            is_dark: true,
            styles: vec![CategoryStyle::new(TokenCategory::String).color("not-a-color").bold()],
        };
        let table = StyleTable::build(&theme);
        let style = table.get(TokenCategory::String).unwrap();
        assert!(style.foreground.is_none());
        assert!(style.bold);
    }

    #[test]
    fn test_missing_category_lookup() {
        let theme = Theme {
            name: "t".into(),
            is_dark: true,
            styles: vec![],
        };
        let table = StyleTable::build(&theme);
        assert!(table.is_empty());
        assert!(table.get(TokenCategory::Tag).is_none());
        assert!(table.default_style().is_plain());
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let a = StyleTable::build(&Theme::dark());
        let b = StyleTable::build(&Theme::dark());
        for category in TokenCategory::ALL {
            assert_eq!(a.get(*category), b.get(*category));
        }
    }
}
