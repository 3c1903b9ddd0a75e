//! # Micropad Highlight
//!
//! The bridge between a tokenizing lexer and a rich-text display.
//!
//! ```text
//! edit notification (block start, block text)
//!        │
//!        ▼
//! ┌───────────────────┐   snapshot    ┌──────────────────┐
//! │  HighlightEngine  │──────────────▶│  micropad-syntax │
//! │                   │◀──────────────│  tokenize()      │
//! │  StyleTable       │    tokens     └──────────────────┘
//! │  flatten()        │
//! └───────────────────┘
//!        │ styles[block_start + i] per char i
//!        ▼
//! ┌───────────────────┐
//! │ HighlightSurface  │ (display/editing surface, external)
//! └───────────────────┘
//! ```
//!
//! The token stream is flattened into one style per character of the whole
//! document; a block pass then applies exactly the slice that belongs to the
//! changed block. Styles are plain values: the table is built once per
//! language/theme activation and swapped wholesale, never mutated in place.

pub mod engine;
pub mod flatten;
pub mod style;
pub mod theme;

pub use engine::{HighlightEngine, HighlightSurface};
pub use flatten::flatten;
pub use style::{StyleDescriptor, StyleTable};
pub use theme::{CategoryStyle, Color, Theme};

use micropad_syntax::SyntaxError;

/// Result type for highlighting operations.
pub type HighlightResult<T> = Result<T, HighlightError>;

/// Errors that can abort a highlighting operation.
///
/// A missing style-table entry is deliberately not here: a single unstyled
/// category must never abort display of the rest of the document, so it is
/// degraded locally instead (see [`flatten`]).
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
