#![forbid(unsafe_code)]

//! Segment layout.
//!
//! Expands a segment list into the full line of units, in this order:
//!
//! 1. One literal space on the segment touching the margin (first segment
//!    on the left side, last on the right side).
//! 2. `num_spaces` spaces on every segment, on the side facing away from
//!    the margin.
//! 3. A divider between every adjacent pair.
//! 4. A boundary divider between the outermost segment and the background,
//!    appended on the left side and prepended on the right side.
//!
//! N segments always give 2N units.

use segline_style::BACKGROUND;

use crate::config::RenderConfig;
use crate::divider::make_divider;
use crate::error::RenderError;
use crate::side::Side;
use crate::unit::{RenderUnit, Segment};

/// Lay out `segments` for one side of the display.
///
/// Pure: the same inputs always give the same units, and nothing is written
/// anywhere. Fails on an empty list and on any configuration error.
pub fn render_segments(
    cfg: &RenderConfig,
    side: Side,
    segments: &[Segment],
) -> Result<Vec<RenderUnit>, RenderError> {
    let _span = tracing::debug_span!("render_segments", %side, count = segments.len()).entered();

    if segments.is_empty() {
        tracing::debug!(%side, "refusing to render an empty segment list");
        return Err(RenderError::EmptySegmentList { side });
    }

    let padded = pad_segments(cfg, side, segments);

    let mut units = Vec::with_capacity(padded.len() * 2);
    for (i, seg) in padded.iter().enumerate() {
        units.push(RenderUnit::Segment(seg.clone()));
        if let Some(next) = padded.get(i + 1) {
            units.push(RenderUnit::Divider(make_divider(cfg, side, seg, next)?));
        }
    }

    let background = Segment::new(BACKGROUND, "");
    let (first, last) = (&padded[0], &padded[padded.len() - 1]);
    let (l, r) = side.select((last, &background), (&background, first));
    let boundary = RenderUnit::Divider(make_divider(cfg, side, l, r)?);
    let at = side.select(units.len(), 0);
    units.insert(at, boundary);

    tracing::debug!(units = units.len(), "segments laid out");
    Ok(units)
}

/// Apply edge padding and symmetric padding.
fn pad_segments(cfg: &RenderConfig, side: Side, segments: &[Segment]) -> Vec<Segment> {
    let mut padded = segments.to_vec();

    let edge = side.select(0, padded.len() - 1);
    let (before, after) = side.select((" ", ""), ("", " "));
    pad_text(&mut padded[edge].text, before, after);

    let spaces = " ".repeat(cfg.num_spaces);
    let (before, after) = side.select(("", spaces.as_str()), (spaces.as_str(), ""));
    for seg in &mut padded {
        pad_text(&mut seg.text, before, after);
    }

    padded
}

fn pad_text(text: &mut String, before: &str, after: &str) {
    text.insert_str(0, before);
    text.push_str(after);
}
