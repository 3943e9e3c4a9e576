//! Body sanitization before text reaches the terminal.
//!
//! Page bodies come from arbitrary content packs. Escape sequences embedded in
//! them could move the cursor, retitle the window or rewrite the palette, so
//! the view strips them here. Everything else is passed through untouched.

use std::borrow::Cow;

const ESC: char = '\u{1b}';
const BEL: char = '\u{07}';
const TAB_WIDTH: usize = 4;

/// Strip terminal control sequences and control characters from `body`.
///
/// * CSI (`ESC [ ... final`) and OSC (`ESC ] ... BEL | ESC \`) sequences are
///   removed entirely, as are other two-character escapes.
/// * Tabs become spaces; `\r` and other C0/C1 controls are dropped.
/// * Newlines are kept.
///
/// Borrows when there is nothing to strip.
pub fn sanitize_body(body: &str) -> Cow<'_, str> {
    if !body.chars().any(needs_sanitizing) {
        return Cow::Borrowed(body);
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESC => match chars.next() {
                Some('[') => {
                    // Parameters and intermediates, then one final byte in @..=~
                    for c in chars.by_ref() {
                        if ('@'..='~').contains(&c) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    while let Some(c) = chars.next() {
                        if c == BEL {
                            break;
                        }
                        if c == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            },
            '\n' => out.push('\n'),
            '\t' => out.push_str(&" ".repeat(TAB_WIDTH)),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    Cow::Owned(out)
}

fn needs_sanitizing(c: char) -> bool {
    c != '\n' && c.is_control()
}
