#![cfg(feature = "serde")]

//! Style sheets and palettes loaded from JSON by the surrounding program.

use segline_style::{Attrs, ColorValue, Palette, Rgb, StyleSheet, resolve};

const SHEET: &str = r#"{
    "time": { "fg": "white", "bg": "blue", "attrs": ["bold", "underline"] },
    "cwd": { "fg": "black", "bg": "warm" }
}"#;

const PALETTE: &str = r#"{
    "white": 15,
    "black": 0,
    "blue": 4,
    "background": 236,
    "warm": { "rgb": { "r": 255, "g": 135, "b": 0 }, "fallback": 208 }
}"#;

#[test]
fn sheet_and_palette_from_json() {
    let sheet: StyleSheet = serde_json::from_str(SHEET).unwrap();
    let palette: Palette = serde_json::from_str(PALETTE).unwrap();
    assert_eq!(sheet.len(), 2);
    assert_eq!(palette.len(), 5);

    let time = resolve(&sheet, &palette, "time").unwrap().unwrap();
    assert_eq!(time.attrs, Attrs::BOLD | Attrs::UNDERLINE);

    let cwd = resolve(&sheet, &palette, "cwd").unwrap().unwrap();
    assert_eq!(cwd.attrs, Attrs::empty());
    assert_eq!(
        cwd.bg,
        ColorValue::TrueColor {
            rgb: Rgb::new(255, 135, 0),
            fallback: 208
        }
    );
    assert_eq!(cwd.bg.index(), 208);
}

#[test]
fn entry_without_colors_is_rejected() {
    let err = serde_json::from_str::<StyleSheet>(r#"{ "time": { "fg": "white" } }"#);
    assert!(err.is_err());
}
