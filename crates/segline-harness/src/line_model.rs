#![forbid(unsafe_code)]

//! Single-line terminal model for checking presenter output.
//!
//! Decodes SGR sequences and records the style each printed character ends
//! up with, so tests can assert on what a terminal would show instead of on
//! raw escape bytes.
//!
//! # Supported Sequences
//! - SGR reset, bold, italic, underline and their resets (22/23/24)
//! - Indexed colors `38;5;n` / `48;5;n`
//! - Base colors `30-37`, `90-97`, `40-47`, `100-107` (decoded to indices 0-15)
//! - Default colors `39` / `49`
//!
//! Other CSI sequences are consumed and ignored.
//!
//! # Example
//! ```
//! use segline_harness::LineModel;
//!
//! let mut model = LineModel::new();
//! model.feed_str("$\x1b[1;38;5;15;48;5;4m hi \x1b[0m");
//! assert_eq!(model.text(), "$ hi ");
//! assert!(model.style_at(2).unwrap().bold);
//! assert_eq!(model.style_at(2).unwrap().bg, Some(4));
//! assert!(model.style_at(0).unwrap().is_default());
//! ```

/// Style state tracked by the model. Colors are 256-color indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModelStyle {
    pub fg: Option<u8>,
    pub bg: Option<u8>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl ModelStyle {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// One printed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelCell {
    pub ch: char,
    pub style: ModelStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    Ground,
    Escape,
    Csi,
}

/// A line of styled characters built from raw output.
#[derive(Debug, Clone)]
pub struct LineModel {
    cells: Vec<ModelCell>,
    current_style: ModelStyle,
    state: ParserState,
    csi_params: Vec<u16>,
    csi_current: u16,
}

impl Default for LineModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LineModel {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            current_style: ModelStyle::default(),
            state: ParserState::Ground,
            csi_params: Vec::new(),
            csi_current: 0,
        }
    }

    /// Decode `bytes` as UTF-8 (lossily) and feed them.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.feed_str(&String::from_utf8_lossy(bytes));
    }

    pub fn feed_str(&mut self, s: &str) {
        for ch in s.chars() {
            self.advance(ch);
        }
    }

    /// Printed characters, unstyled.
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }

    pub fn cells(&self) -> &[ModelCell] {
        &self.cells
    }

    pub fn style_at(&self, x: usize) -> Option<ModelStyle> {
        self.cells.get(x).map(|c| c.style)
    }

    /// Style in effect after the last byte. Default once the output resets.
    pub fn current_style(&self) -> ModelStyle {
        self.current_style
    }

    /// Consecutive characters sharing a style.
    pub fn runs(&self) -> Vec<(String, ModelStyle)> {
        let mut runs: Vec<(String, ModelStyle)> = Vec::new();
        for cell in &self.cells {
            match runs.last_mut() {
                Some((text, style)) if *style == cell.style => text.push(cell.ch),
                _ => runs.push((cell.ch.to_string(), cell.style)),
            }
        }
        runs
    }

    fn advance(&mut self, ch: char) {
        match self.state {
            ParserState::Ground => self.ground(ch),
            ParserState::Escape => self.escape(ch),
            ParserState::Csi => self.csi(ch),
        }
    }

    fn ground(&mut self, ch: char) {
        match ch {
            '\x1b' => self.state = ParserState::Escape,
            c if c.is_control() => {}
            c => self.cells.push(ModelCell {
                ch: c,
                style: self.current_style,
            }),
        }
    }

    fn escape(&mut self, ch: char) {
        if ch == '[' {
            self.state = ParserState::Csi;
            self.csi_params.clear();
            self.csi_current = 0;
        } else {
            self.state = ParserState::Ground;
        }
    }

    fn csi(&mut self, ch: char) {
        match ch {
            '0'..='9' => {
                let digit = ch as u16 - '0' as u16;
                self.csi_current = self.csi_current.saturating_mul(10).saturating_add(digit);
            }
            ';' => {
                self.csi_params.push(self.csi_current);
                self.csi_current = 0;
            }
            'm' => {
                self.csi_params.push(self.csi_current);
                self.apply_sgr();
                self.state = ParserState::Ground;
            }
            _ => self.state = ParserState::Ground,
        }
    }

    fn apply_sgr(&mut self) {
        let params = std::mem::take(&mut self.csi_params);
        let mut i = 0;
        while i < params.len() {
            let style = &mut self.current_style;
            match params[i] {
                0 => *style = ModelStyle::default(),
                1 => style.bold = true,
                3 => style.italic = true,
                4 => style.underline = true,
                22 => style.bold = false,
                23 => style.italic = false,
                24 => style.underline = false,
                code @ 30..=37 => style.fg = Some((code - 30) as u8),
                code @ 90..=97 => style.fg = Some((code - 90 + 8) as u8),
                code @ 40..=47 => style.bg = Some((code - 40) as u8),
                code @ 100..=107 => style.bg = Some((code - 100 + 8) as u8),
                38 | 48 => {
                    // Only the 256-color form: 38;5;n / 48;5;n
                    if params.get(i + 1) == Some(&5) {
                        if let Some(&idx) = params.get(i + 2) {
                            let idx = idx.min(255) as u8;
                            if params[i] == 38 {
                                style.fg = Some(idx);
                            } else {
                                style.bg = Some(idx);
                            }
                        }
                        i += 2;
                    }
                }
                39 => style.fg = None,
                49 => style.bg = None,
                _ => {}
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text() {
        let mut m = LineModel::new();
        m.feed(b"Hello");
        assert_eq!(m.text(), "Hello");
        assert!(m.cells().iter().all(|c| c.style.is_default()));
    }

    #[test]
    fn multibyte_glyphs_are_single_cells() {
        let mut m = LineModel::new();
        m.feed_str("a\u{e0b0}b");
        assert_eq!(m.cells().len(), 3);
        assert_eq!(m.cells()[1].ch, '\u{e0b0}');
    }

    #[test]
    fn indexed_colors() {
        let mut m = LineModel::new();
        m.feed_str("\x1b[38;5;208;48;5;236mx");
        let style = m.style_at(0).unwrap();
        assert_eq!(style.fg, Some(208));
        assert_eq!(style.bg, Some(236));
    }

    #[test]
    fn base_colors() {
        let mut m = LineModel::new();
        m.feed_str("\x1b[31;104mx\x1b[97;40my");
        assert_eq!(m.style_at(0).unwrap().fg, Some(1));
        assert_eq!(m.style_at(0).unwrap().bg, Some(12));
        assert_eq!(m.style_at(1).unwrap().fg, Some(15));
        assert_eq!(m.style_at(1).unwrap().bg, Some(0));
    }

    #[test]
    fn attributes_and_resets() {
        let mut m = LineModel::new();
        m.feed_str("\x1b[1;3;4ma\x1b[22;23mb\x1b[0mc");
        let a = m.style_at(0).unwrap();
        assert!(a.bold && a.italic && a.underline);
        let b = m.style_at(1).unwrap();
        assert!(!b.bold && !b.italic && b.underline);
        assert!(m.style_at(2).unwrap().is_default());
    }

    #[test]
    fn default_color_codes() {
        let mut m = LineModel::new();
        m.feed_str("\x1b[38;5;1;48;5;2m\x1b[39;49mx");
        assert!(m.style_at(0).unwrap().is_default());
    }

    #[test]
    fn bare_reset() {
        let mut m = LineModel::new();
        m.feed_str("\x1b[1m\x1b[mx");
        assert!(m.style_at(0).unwrap().is_default());
    }

    #[test]
    fn runs_group_by_style() {
        let mut m = LineModel::new();
        m.feed_str("ab\x1b[1mcd\x1b[0me");
        let runs = m.runs();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].0, "ab");
        assert_eq!(runs[1].0, "cd");
        assert!(runs[1].1.bold);
        assert_eq!(runs[2].0, "e");
    }

    #[test]
    fn unknown_csi_is_swallowed() {
        let mut m = LineModel::new();
        m.feed_str("a\x1b[2Kb");
        assert_eq!(m.text(), "ab");
    }
}
