//! Terminal display surface.
//!
//! Owns the document text split into line blocks (a block is one line,
//! excluding its terminator; starts are absolute char offsets) and the
//! per-character styles the engine has applied. Rendering emits ANSI
//! truecolor escape sequences, merging runs of equal style.

use micropad_highlight::{HighlightSurface, StyleDescriptor};

struct Block {
    start: usize,
    text: String,
}

pub struct TerminalSurface {
    text: String,
    blocks: Vec<Block>,
    styles: Vec<Vec<Option<StyleDescriptor>>>,
}

impl TerminalSurface {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut blocks = Vec::new();
        let mut start = 0;
        for line in text.split('\n') {
            let chars = line.chars().count();
            blocks.push(Block {
                start,
                text: line.to_owned(),
            });
            start += chars + 1; // line terminator
        }
        let styles = blocks
            .iter()
            .map(|b| vec![None; b.text.chars().count()])
            .collect();
        Self {
            text,
            blocks,
            styles,
        }
    }

    /// Renders the document with its applied styles as ANSI escapes.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (block, styles) in self.blocks.iter().zip(&self.styles) {
            let mut current: Option<StyleDescriptor> = None;
            for (ch, style) in block.text.chars().zip(styles) {
                let style = style.unwrap_or(StyleDescriptor::PLAIN);
                if current != Some(style) {
                    if current.is_some() {
                        out.push_str("\x1b[0m");
                    }
                    out.push_str(&sgr_sequence(&style));
                    current = Some(style);
                }
                out.push(ch);
            }
            if current.is_some() {
                out.push_str("\x1b[0m");
            }
            out.push('\n');
        }
        out
    }
}

fn sgr_sequence(style: &StyleDescriptor) -> String {
    let mut params: Vec<String> = Vec::new();
    if style.bold {
        params.push("1".to_string());
    }
    if style.italic {
        params.push("3".to_string());
    }
    if style.underline {
        params.push("4".to_string());
    }
    if let Some(color) = style.foreground {
        let (r, g, b) = color.to_rgb8();
        params.push(format!("38;2;{r};{g};{b}"));
    }
    if let Some(color) = style.background {
        let (r, g, b) = color.to_rgb8();
        params.push(format!("48;2;{r};{g};{b}"));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("\x1b[{}m", params.join(";"))
    }
}

impl HighlightSurface for TerminalSurface {
    fn full_text(&self) -> String {
        self.text.clone()
    }

    fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn block_start(&self, index: usize) -> usize {
        self.blocks[index].start
    }

    fn block_text(&self, index: usize) -> String {
        self.blocks[index].text.clone()
    }

    fn set_char_style(&mut self, index: usize, pos: usize, style: StyleDescriptor) {
        if let Some(slot) = self.styles.get_mut(index).and_then(|b| b.get_mut(pos)) {
            *slot = Some(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micropad_highlight::{HighlightEngine, Theme};

    #[test]
    fn test_block_layout() {
        let surface = TerminalSurface::new("ab\ncdé\n");
        assert_eq!(surface.block_count(), 3); // trailing newline: final empty block
        assert_eq!(surface.block_start(0), 0);
        assert_eq!(surface.block_start(1), 3);
        assert_eq!(surface.block_start(2), 7); // "cdé" is 3 chars, not 4 bytes
        assert_eq!(surface.block_text(1), "cdé");
    }

    #[test]
    fn test_out_of_range_application_is_ignored() {
        let mut surface = TerminalSurface::new("ab");
        surface.set_char_style(0, 99, StyleDescriptor::PLAIN);
        surface.set_char_style(99, 0, StyleDescriptor::PLAIN);
        assert_eq!(surface.render(), "ab\x1b[0m\n");
    }

    #[test]
    fn test_render_emits_color_escapes() {
        let engine = HighlightEngine::new("python", Theme::dark()).unwrap();
        let mut surface = TerminalSurface::new("x = 1");
        engine.rehighlight(&mut surface).unwrap();

        let rendered = surface.render();
        assert!(rendered.contains("\x1b[38;2;"));
        assert!(rendered.contains('x'));
        assert!(rendered.contains('1'));
    }
}
