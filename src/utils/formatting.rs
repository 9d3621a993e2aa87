//! Formatting utilities used for terminal output.

use unicode_width::UnicodeWidthStr;

/// Pad `s` on the right to `width` terminal columns. Emoji and other wide
/// characters count for their displayed width, not their byte length.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}
