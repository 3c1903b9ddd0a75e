//! Block highlighting engine.
//!
//! ## Learning: Traits at the Seam
//!
//! The display/editing surface is a trait, not a concrete widget. The engine
//! only needs four things from it: a full-text snapshot, the block layout,
//! and a way to apply one character's style. Tests drive the engine with a
//! recording mock; the binary drives it with a terminal renderer.

use micropad_syntax::{ensure_supported, tokenize};

use crate::flatten::flatten;
use crate::style::{StyleDescriptor, StyleTable};
use crate::theme::Theme;
use crate::{HighlightError, HighlightResult};

/// The display/editing surface the engine styles.
///
/// All offsets and positions are in characters, not bytes. A block is a
/// contiguous run of document characters (typically one line, excluding its
/// terminator) at an absolute start offset.
pub trait HighlightSurface {
    /// Full current document text. Taken once per pass as an immutable
    /// snapshot; the surface may change underneath afterwards, which the
    /// engine tolerates by bounds-checking every application.
    fn full_text(&self) -> String;

    /// Number of blocks currently known to the surface.
    fn block_count(&self) -> usize;

    /// Absolute char offset of the block's first character.
    fn block_start(&self, index: usize) -> usize;

    /// The block's current text.
    fn block_text(&self, index: usize) -> String;

    /// Applies a style to the single character at `pos` within the block.
    fn set_char_style(&mut self, index: usize, pos: usize, style: StyleDescriptor);
}

/// Drives the lex → flatten → apply pipeline against a surface.
///
/// Single-threaded and synchronous: a pass runs to completion on the calling
/// thread before control returns. The active language and the style table
/// are only ever mutated through the explicit `set_language` / `set_theme`
/// actions.
#[derive(Debug)]
pub struct HighlightEngine {
    language: String,
    theme: Theme,
    table: StyleTable,
}

impl HighlightEngine {
    /// Creates an engine for a language and theme.
    ///
    /// Fails with `UnsupportedLanguage` before any state exists, so a bad
    /// identifier can never leave a half-initialized engine behind.
    pub fn new(language: &str, theme: Theme) -> HighlightResult<Self> {
        ensure_supported(language)?;
        let table = StyleTable::build(&theme);
        Ok(Self {
            language: language.to_owned(),
            theme,
            table,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Switches the active language and rehighlights the whole surface.
    ///
    /// On an unknown identifier the previous language stays active and the
    /// surface is left untouched.
    pub fn set_language(
        &mut self,
        language: &str,
        surface: &mut dyn HighlightSurface,
    ) -> HighlightResult<()> {
        ensure_supported(language)?;
        tracing::debug!(from = %self.language, to = language, "switching highlighting language");
        self.language = language.to_owned();
        self.table = StyleTable::build(&self.theme);
        self.rehighlight(surface)
    }

    /// Swaps in a new theme and rehighlights the whole surface.
    pub fn set_theme(
        &mut self,
        theme: Theme,
        surface: &mut dyn HighlightSurface,
    ) -> HighlightResult<()> {
        self.table = StyleTable::build(&theme);
        self.theme = theme;
        self.rehighlight(surface)
    }

    /// Restyles one changed block.
    ///
    /// The whole document is re-lexed and re-flattened per call; only the
    /// styles belonging to this block are applied, every other block's
    /// applied styling is left alone. Offsets past the end of the flat
    /// sequence (the document shrank between snapshot and apply) are
    /// silently skipped.
    pub fn highlight_block(
        &self,
        surface: &mut dyn HighlightSurface,
        index: usize,
    ) -> HighlightResult<()> {
        let styles = self.flat_styles(&surface.full_text())?;
        self.apply_to_block(surface, index, &styles);
        Ok(())
    }

    /// The "force rehighlight" path: restyles every block, as used after a
    /// language or theme switch and after loading new text.
    ///
    /// The flat style sequence is computed once and shared across blocks;
    /// blocks are applied independently, so order does not matter.
    pub fn rehighlight(&self, surface: &mut dyn HighlightSurface) -> HighlightResult<()> {
        let styles = self.flat_styles(&surface.full_text())?;
        for index in 0..surface.block_count() {
            self.apply_to_block(surface, index, &styles);
        }
        Ok(())
    }

    /// Lexes a document snapshot and flattens it to one style per character.
    pub fn flat_styles(&self, snapshot: &str) -> HighlightResult<Vec<StyleDescriptor>> {
        let text = normalized_snapshot(snapshot);
        let tokens = tokenize(&text, &self.language).map_err(HighlightError::from)?;
        Ok(flatten(&tokens, &self.table))
    }

    fn apply_to_block(
        &self,
        surface: &mut dyn HighlightSurface,
        index: usize,
        styles: &[StyleDescriptor],
    ) {
        let start = surface.block_start(index);
        let text = surface.block_text(index);
        for (pos, _) in text.chars().enumerate() {
            if let Some(style) = styles.get(start + pos) {
                surface.set_char_style(index, pos, *style);
            }
        }
    }
}

/// Appends the single trailing line terminator before lexing.
///
/// The text container never guarantees a terminated final line, and the
/// lexers' final-line handling (line comments, unterminated strings) assumes
/// one. The extra character only ever styles a position past every block's
/// range, so block offset math is unaffected. This normalization is
/// deliberate, documented behavior, not an artifact.
fn normalized_snapshot(text: &str) -> String {
    let mut text = text.to_owned();
    text.push('\n');
    text
}
