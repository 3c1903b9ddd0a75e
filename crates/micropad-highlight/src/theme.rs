//! Theme model: the enumerable set of per-category visual attributes.
//!
//! ## Learning: Builder Pattern
//!
//! Category styles use a small consuming builder:
//! ```rust,ignore
//! CategoryStyle::new(TokenCategory::Keyword).color("#cc7832").bold()
//! ```
//!
//! A theme is data, not behavior: a named list of
//! `(category, color-or-empty, bgcolor-or-empty, bold, italic, underline)`
//! tuples. Empty color strings mean "no color specified", which the style
//! table turns into an absent attribute rather than a black one.

use micropad_syntax::TokenCategory;
use serde::{Deserialize, Serialize};

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a `#rrggbb` hex color (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        ))
    }

    /// Converts to 8-bit channels (for terminal escape sequences).
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

/// Visual attributes for one lexical category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStyle {
    pub category: TokenCategory,
    /// Foreground color as `#rrggbb`, or empty for none.
    #[serde(default)]
    pub color: String,
    /// Background color as `#rrggbb`, or empty for none.
    #[serde(default)]
    pub bgcolor: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
}

impl CategoryStyle {
    pub fn new(category: TokenCategory) -> Self {
        Self {
            category,
            color: String::new(),
            bgcolor: String::new(),
            bold: false,
            italic: false,
            underline: false,
        }
    }

    pub fn color(mut self, hex: &str) -> Self {
        self.color = hex.to_owned();
        self
    }

    pub fn bgcolor(mut self, hex: &str) -> Self {
        self.bgcolor = hex.to_owned();
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// A named highlighting theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,

    /// Is this a dark theme?
    pub is_dark: bool,

    /// Per-category style tuples
    pub styles: Vec<CategoryStyle>,
}

impl Theme {
    /// Creates the default dark theme.
    pub fn dark() -> Self {
        use TokenCategory::*;
        Self {
            name: "Micropad Dark".to_string(),
            is_dark: true,
            styles: vec![
                CategoryStyle::new(Keyword).color("#cc7832").bold(),
                CategoryStyle::new(Name).color("#e8e8e8"),
                CategoryStyle::new(Builtin).color("#8ec07c"),
                CategoryStyle::new(Constant).color("#9876aa"),
                CategoryStyle::new(Number).color("#6897bb"),
                CategoryStyle::new(String).color("#6a8759"),
                CategoryStyle::new(Comment).color("#808080").italic(),
                CategoryStyle::new(Operator).color("#d8d8d8"),
                CategoryStyle::new(Punctuation).color("#b0b0b0"),
                CategoryStyle::new(Tag).color("#e8bf6a"),
                CategoryStyle::new(Attribute).color("#bababa"),
                CategoryStyle::new(Whitespace),
                CategoryStyle::new(Text).color("#e8e8e8"),
            ],
        }
    }

    /// Creates a light theme.
    pub fn light() -> Self {
        use TokenCategory::*;
        Self {
            name: "Micropad Light".to_string(),
            is_dark: false,
            styles: vec![
                CategoryStyle::new(Keyword).color("#0033b3").bold(),
                CategoryStyle::new(Name).color("#202020"),
                CategoryStyle::new(Builtin).color("#426e2c"),
                CategoryStyle::new(Constant).color("#871094"),
                CategoryStyle::new(Number).color("#1750eb"),
                CategoryStyle::new(String).color("#067d17"),
                CategoryStyle::new(Comment).color("#8c8c8c").italic(),
                CategoryStyle::new(Operator).color("#303030"),
                CategoryStyle::new(Punctuation).color("#505050"),
                CategoryStyle::new(Tag).color("#0033b3"),
                CategoryStyle::new(Attribute).color("#174ad4"),
                CategoryStyle::new(Whitespace),
                CategoryStyle::new(Text).color("#202020"),
            ],
        }
    }

    /// Loads a theme from a JSON file.
    pub fn load(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Saves the theme to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
