#![forbid(unsafe_code)]

//! ANSI presentation of styled chunks.
//!
//! Each styled chunk becomes `SGR(params) text SGR(0)`; plain chunks are
//! written as-is. The whole line is encoded before anything reaches the sink,
//! so a sink sees one ordered `write_all` per render.
//!
//! Shell prompts need escape sequences marked as zero-width, which
//! [`PromptEscape`] takes care of.

use std::fmt::Write as _;
use std::io::{self, Write};

use segline_style::{ColorProfile, ColorValue, ansi16_index};

use crate::config::RenderConfig;
use crate::emit::{StyledChunk, emit_all};
use crate::error::RenderError;
use crate::unit::RenderUnit;

const SGR_RESET: &str = "\x1b[0m";

/// How non-printing sequences are marked for the consuming shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PromptEscape {
    /// Raw escapes, for writing straight to a terminal.
    #[default]
    None,
    /// `\[` ... `\]`. Literal `\`, `$` and `` ` `` are backslash-escaped so
    /// segment text is never expanded by `promptvars`.
    ///
    /// Bash prints an escaped `$` as `#` for root.
    Bash,
    /// `%{` ... `%}`, with literal percent signs doubled.
    Zsh,
}

impl PromptEscape {
    fn open(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Bash => "\\[",
            Self::Zsh => "%{",
        }
    }

    fn close(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Bash => "\\]",
            Self::Zsh => "%}",
        }
    }

    fn push_text(self, out: &mut String, text: &str) {
        match self {
            Self::None => out.push_str(text),
            Self::Bash => {
                for ch in text.chars() {
                    if matches!(ch, '\\' | '$' | '`') {
                        out.push('\\');
                    }
                    out.push(ch);
                }
            }
            Self::Zsh => out.push_str(&text.replace('%', "%%")),
        }
    }
}

#[derive(Clone, Copy)]
enum Layer {
    Fg,
    Bg,
}

/// Encodes chunks into escape sequences and writes them to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presenter {
    profile: ColorProfile,
    escape: PromptEscape,
}

impl Presenter {
    pub fn new(profile: ColorProfile, escape: PromptEscape) -> Self {
        Self { profile, escape }
    }

    pub fn from_config(cfg: &RenderConfig) -> Self {
        Self::new(cfg.profile, cfg.escape)
    }

    /// Encode a full line.
    pub fn encode(&self, chunks: &[StyledChunk]) -> String {
        let mut out = String::new();
        for chunk in chunks {
            self.encode_chunk(&mut out, chunk);
        }
        out
    }

    /// Append one chunk to `out`.
    pub fn encode_chunk(&self, out: &mut String, chunk: &StyledChunk) {
        let params = self.sgr_params(chunk);
        if params.is_empty() {
            self.escape.push_text(out, &chunk.text);
            return;
        }
        out.push_str(self.escape.open());
        let _ = write!(out, "\x1b[{params}m");
        out.push_str(self.escape.close());
        self.escape.push_text(out, &chunk.text);
        out.push_str(self.escape.open());
        out.push_str(SGR_RESET);
        out.push_str(self.escape.close());
    }

    /// Encode and write a full line, then flush.
    pub fn write<W: Write + ?Sized>(&self, sink: &mut W, chunks: &[StyledChunk]) -> io::Result<()> {
        let encoded = self.encode(chunks);
        tracing::debug!(chunks = chunks.len(), bytes = encoded.len(), "writing segments");
        sink.write_all(encoded.as_bytes())?;
        sink.flush()
    }

    fn sgr_params(&self, chunk: &StyledChunk) -> String {
        let mut params: Vec<String> = chunk.attrs.sgr_codes().map(|c| c.to_string()).collect();
        if let Some(fg) = chunk.fg.and_then(|c| self.color_param(c, Layer::Fg)) {
            params.push(fg);
        }
        if let Some(bg) = chunk.bg.and_then(|c| self.color_param(c, Layer::Bg)) {
            params.push(bg);
        }
        params.join(";")
    }

    fn color_param(&self, color: ColorValue, layer: Layer) -> Option<String> {
        let idx = color.index();
        match self.profile {
            ColorProfile::Ansi256 => Some(match layer {
                Layer::Fg => format!("38;5;{idx}"),
                Layer::Bg => format!("48;5;{idx}"),
            }),
            ColorProfile::Ansi16 => {
                let idx = ansi16_index(idx);
                let (base, bright) = match layer {
                    Layer::Fg => (30, 90),
                    Layer::Bg => (40, 100),
                };
                let code = if idx < 8 {
                    base + u16::from(idx)
                } else {
                    bright + u16::from(idx - 8)
                };
                Some(code.to_string())
            }
            ColorProfile::Mono => None,
        }
    }
}

/// Style every unit and write the line to `sink`.
///
/// Configuration errors are raised before the sink sees a single byte.
pub fn emit_and_write<W: Write + ?Sized>(
    sink: &mut W,
    cfg: &RenderConfig,
    units: &[RenderUnit],
) -> Result<(), RenderError> {
    let chunks = emit_all(cfg, units)?;
    Presenter::from_config(cfg).write(sink, &chunks)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use segline_style::{Attrs, Rgb};

    fn chunk(text: &str, fg: u8, bg: u8, attrs: Attrs) -> StyledChunk {
        StyledChunk {
            text: text.into(),
            fg: Some(ColorValue::Indexed(fg)),
            bg: Some(ColorValue::Indexed(bg)),
            attrs,
        }
    }

    #[test]
    fn plain_chunk_is_raw_text() {
        let out = Presenter::default().encode(&[StyledChunk::plain("$ ")]);
        assert_eq!(out, "$ ");
    }

    #[test]
    fn ansi256_encoding() {
        let out = Presenter::default().encode(&[chunk(" hi ", 15, 4, Attrs::BOLD)]);
        assert_eq!(out, "\x1b[1;38;5;15;48;5;4m hi \x1b[0m");
    }

    #[test]
    fn true_color_entries_use_their_fallback() {
        let c = StyledChunk {
            text: "x".into(),
            fg: Some(ColorValue::TrueColor {
                rgb: Rgb::new(255, 135, 0),
                fallback: 208,
            }),
            bg: None,
            attrs: Attrs::empty(),
        };
        assert_eq!(Presenter::default().encode(&[c]), "\x1b[38;5;208mx\x1b[0m");
    }

    #[test]
    fn ansi16_encoding() {
        let p = Presenter::new(ColorProfile::Ansi16, PromptEscape::None);
        assert_eq!(p.encode(&[chunk("x", 15, 4, Attrs::empty())]), "\x1b[97;44mx\x1b[0m");
        // 196 is pure red in the cube, nearest base color is bright red.
        assert_eq!(p.encode(&[chunk("x", 196, 0, Attrs::empty())]), "\x1b[91;40mx\x1b[0m");
    }

    #[test]
    fn mono_keeps_attributes_only() {
        let p = Presenter::new(ColorProfile::Mono, PromptEscape::None);
        assert_eq!(p.encode(&[chunk("x", 15, 4, Attrs::UNDERLINE)]), "\x1b[4mx\x1b[0m");
        assert_eq!(p.encode(&[chunk("y", 15, 4, Attrs::empty())]), "y");
    }

    #[test]
    fn bash_escaping() {
        let p = Presenter::new(ColorProfile::Ansi256, PromptEscape::Bash);
        assert_eq!(
            p.encode(&[chunk("a\\b", 1, 2, Attrs::empty())]),
            "\\[\x1b[38;5;1;48;5;2m\\]a\\\\b\\[\x1b[0m\\]"
        );
    }

    #[test]
    fn bash_text_is_never_expanded() {
        let p = Presenter::new(ColorProfile::Ansi256, PromptEscape::Bash);
        assert_eq!(
            p.encode(&[StyledChunk::plain("$(id)`whoami`")]),
            "\\$(id)\\`whoami\\`"
        );
        assert_eq!(
            p.encode(&[chunk("${HOME}", 1, 2, Attrs::empty())]),
            "\\[\x1b[38;5;1;48;5;2m\\]\\${HOME}\\[\x1b[0m\\]"
        );
    }

    #[test]
    fn zsh_escaping() {
        let p = Presenter::new(ColorProfile::Ansi256, PromptEscape::Zsh);
        assert_eq!(
            p.encode(&[chunk("50%", 1, 2, Attrs::empty())]),
            "%{\x1b[38;5;1;48;5;2m%}50%%%{\x1b[0m%}"
        );
        assert_eq!(p.encode(&[StyledChunk::plain("%")]), "%%");
    }

    #[test]
    fn write_goes_to_sink_in_order() {
        let mut sink = Vec::new();
        Presenter::default()
            .write(&mut sink, &[StyledChunk::plain("a"), StyledChunk::plain("b")])
            .unwrap();
        assert_eq!(sink, b"ab");
    }
}
