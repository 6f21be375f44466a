#![forbid(unsafe_code)]

//! Undo shell prompt escaping so the raw terminal stream can be modelled.

/// Shell whose prompt escaping to undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// `\[` `\]` markers, `\\`, `\$` and ``\` `` for the literal characters.
    Bash,
    /// `%{` `%}` markers, `%%` for a literal percent sign.
    Zsh,
}

impl Shell {
    const fn escape_char(self) -> char {
        match self {
            Self::Bash => '\\',
            Self::Zsh => '%',
        }
    }

    /// Characters that appear escaped in literal text.
    fn is_escaped_literal(self, ch: char) -> bool {
        match self {
            Self::Bash => matches!(ch, '\\' | '$' | '`'),
            Self::Zsh => ch == '%',
        }
    }

    const fn markers(self) -> (char, char) {
        match self {
            Self::Bash => ('[', ']'),
            Self::Zsh => ('{', '}'),
        }
    }
}

/// Strip zero-width markers and unescape literal text.
///
/// Returns the stream the shell would hand to the terminal.
pub fn unwrap_prompt(shell: Shell, prompt: &str) -> String {
    let esc = shell.escape_char();
    let (open, close) = shell.markers();
    let mut out = String::with_capacity(prompt.len());
    let mut chars = prompt.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != esc {
            out.push(ch);
            continue;
        }
        match chars.peek().copied() {
            Some(next) if next == open || next == close => {
                chars.next();
            }
            Some(next) if shell.is_escaped_literal(next) => {
                chars.next();
                out.push(next);
            }
            _ => out.push(esc),
        }
    }
    out
}

/// Whether every `open` marker is closed before the next one opens.
pub fn markers_balanced(shell: Shell, prompt: &str) -> bool {
    let esc = shell.escape_char();
    let (open, close) = shell.markers();
    let mut depth = 0u32;
    let mut chars = prompt.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != esc {
            continue;
        }
        match chars.next() {
            Some(c) if c == open => {
                if depth > 0 {
                    return false;
                }
                depth += 1;
            }
            Some(c) if c == close => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}
