#![forbid(unsafe_code)]

//! Divider synthesis.
//!
//! A divider sits between two units. Its kind depends on whether the two
//! backgrounds match once resolved to concrete colors; style sheet names are
//! never compared.
//!
//! - **Hard**: fg is the background of the unit nearer the margin (`prev`),
//!   bg is the background of the other one (`next`).
//! - **Soft**: colors come from `"<prev group>:divider"` if the sheet has it,
//!   else from `prev`'s own group.

use segline_style::{ColorValue, ResolvedStyle, StyleError, resolve_entry, resolve_or_background};

use crate::config::RenderConfig;
use crate::glyphs::DividerKind;
use crate::side::Side;
use crate::unit::{Divider, Segment};

/// Suffix of the style group overriding soft divider colors.
pub const DIVIDER_GROUP_SUFFIX: &str = ":divider";

/// Build the divider for two adjacent units given in list order.
///
/// `l` precedes `r` in the segment list. On the right side the list runs
/// away from the right margin, so `r` is the one nearer the margin.
pub fn make_divider(
    cfg: &RenderConfig,
    side: Side,
    l: &Segment,
    r: &Segment,
) -> Result<Divider, StyleError> {
    let (prev, next) = side.select((l, r), (r, l));
    let prev_back = background_of(cfg, prev)?;
    let next_back = background_of(cfg, next)?;

    let kind = if prev_back == next_back {
        DividerKind::Soft
    } else {
        DividerKind::Hard
    };

    let (fg, bg) = match kind {
        DividerKind::Hard => (prev_back, next_back),
        DividerKind::Soft => {
            let style = soft_divider_style(cfg, &prev.group)?;
            (style.fg, style.bg)
        }
    };

    tracing::trace!(
        %side,
        ?kind,
        prev = %prev.group,
        next = %next.group,
        fg = fg.index(),
        bg = bg.index(),
        "synthesized divider"
    );

    Ok(Divider {
        fg,
        bg,
        text: cfg.glyphs.get(side, kind).to_owned(),
        kind,
    })
}

/// Concrete background of a segment, via the `background` group fallback.
pub fn background_of(cfg: &RenderConfig, seg: &Segment) -> Result<ColorValue, StyleError> {
    resolve_or_background(&cfg.sheet, &cfg.palette, &seg.group).map(|style| style.bg)
}

/// Style for a soft divider following a unit of `group`.
///
/// An unstyled group has nothing to look up and takes the `background`
/// group, like its background color did.
fn soft_divider_style(cfg: &RenderConfig, group: &str) -> Result<ResolvedStyle, StyleError> {
    if group.is_empty() {
        return resolve_or_background(&cfg.sheet, &cfg.palette, group);
    }
    let override_key = format!("{group}{DIVIDER_GROUP_SUFFIX}");
    let entry = match cfg.sheet.get(&override_key) {
        Some(entry) => entry,
        None => cfg.sheet.require(group)?,
    };
    resolve_entry(&cfg.palette, entry)
}
