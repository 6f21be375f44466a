//! Render a two-sided prompt to stdout.
//!
//! Run: `cargo run -p segline-harness --example prompt [left|right] [bash|zsh]`

use std::io;

use segline::prelude::*;

fn config(escape: PromptEscape) -> RenderConfig {
    let sheet = StyleSheet::new()
        .with("user", StyleEntry::new("white", "blue").attr("bold"))
        .with("cwd", StyleEntry::new("gray", "dark"))
        .with("cwd:divider", StyleEntry::new("light", "dark"))
        .with("git", StyleEntry::new("gray", "dark").attr("italic"))
        .with("status", StyleEntry::new("white", "red").attr("bold"))
        .with("time", StyleEntry::new("black", "light"));
    let palette = Palette::new()
        .with_index("white", 231)
        .with_index("black", 16)
        .with_index("gray", 250)
        .with_index("light", 245)
        .with_index("dark", 238)
        .with_index("blue", 31)
        .with_index("red", 160)
        .with_index("background", 236);
    RenderConfig::new(sheet, palette).with_escape(escape)
}

fn main() -> Result<(), RenderError> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let side = match args.next().as_deref() {
        Some("right") => Side::Right,
        _ => Side::Left,
    };
    let escape = match args.next().as_deref() {
        Some("bash") => PromptEscape::Bash,
        Some("zsh") => PromptEscape::Zsh,
        _ => PromptEscape::None,
    };
    let cfg = config(escape);

    let segments = match side {
        Side::Left => vec![
            Segment::new("user", "me"),
            Segment::new("cwd", "~"),
            Segment::new("cwd", "src"),
            Segment::new("git", "main"),
        ],
        Side::Right => vec![Segment::new("status", "1"), Segment::new("time", "12:00")],
    };

    render_to(&mut io::stdout(), &cfg, side, &segments)?;
    println!();
    Ok(())
}
