//! Property-based invariant tests for color reduction and style lookup.
//!
//! 1. Reducing any 256-color index lands on one of the 16 base colors, and
//!    base colors map to themselves.
//! 2. With a `background` color in the palette, the fallback resolver never
//!    fails on unknown group or color names.

use proptest::prelude::*;
use segline_style::{
    Attrs, ColorValue, Palette, StyleEntry, StyleSheet, ansi16_index, resolve,
    resolve_or_background,
};

const COLORS: [&str; 4] = ["white", "blue", "nope", "background"];
const ATTRS: [&str; 3] = ["bold", "italic", "underline"];

fn palette() -> Palette {
    Palette::new()
        .with_index("white", 15)
        .with_index("blue", 4)
        .with_index("background", 236)
}

fn sheet_strategy() -> impl Strategy<Value = StyleSheet> {
    proptest::collection::vec(
        (
            "[a-d]",
            0..COLORS.len(),
            0..COLORS.len(),
            proptest::collection::vec(0..ATTRS.len(), 0..3),
        ),
        0..5,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .fold(StyleSheet::new(), |sheet, (group, fg, bg, attrs)| {
                let entry = attrs
                    .into_iter()
                    .fold(StyleEntry::new(COLORS[fg], COLORS[bg]), |e, a| {
                        e.attr(ATTRS[a])
                    });
                sheet.with(group, entry)
            })
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Color reduction
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ansi16_reduction_stays_in_range(idx in any::<u8>()) {
        let base = ansi16_index(idx);
        prop_assert!(base < 16);
        if idx < 16 {
            prop_assert_eq!(base, idx);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Background fallback
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fallback_resolution_never_fails(
        sheet in sheet_strategy(),
        key in "[a-f]{0,2}",
    ) {
        let style = resolve_or_background(&sheet, &palette(), &key).unwrap();
        prop_assert!(Attrs::all().contains(style.attrs));
        if sheet.get(&key).is_none() || key.is_empty() {
            prop_assert_eq!(style.bg, ColorValue::Indexed(236));
        }
    }
}

proptest! {
    #[test]
    fn strict_resolution_agrees_with_fallback_for_known_groups(
        sheet in sheet_strategy(),
        key in "[a-d]",
    ) {
        let palette = palette();
        match resolve(&sheet, &palette, &key) {
            Ok(Some(style)) => {
                prop_assert_eq!(style, resolve_or_background(&sheet, &palette, &key).unwrap());
            }
            Ok(None) => prop_assert!(false, "non-empty key resolved to nothing"),
            Err(_) => prop_assert!(sheet.get(&key).is_none()),
        }
    }
}
