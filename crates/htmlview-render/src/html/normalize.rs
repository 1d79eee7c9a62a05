//! Line break normalization shared by the parser input and the range lookup.
//!
//! Whitespace collapsing during flattening would turn a `<br>` into a single
//! space, so every `<br>` is swapped for a placeholder character before
//! parsing and the placeholder is turned into `\n` afterwards. Document text
//! and element text must both go through [`restore_line_breaks`], otherwise
//! element text is never found in the document text.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Private-use character standing in for `<br>` while parsing.
pub const LINE_BREAK_PLACEHOLDER: char = '\u{E000}';

fn line_break_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("line break pattern is valid"))
}

/// Replace `<br>`, `<br/>` and `<br />` (any case) with the placeholder.
pub fn normalize_line_breaks(html: &str) -> Cow<'_, str> {
    let mut buf = [0u8; 4];
    let placeholder: &str = LINE_BREAK_PLACEHOLDER.encode_utf8(&mut buf);
    line_break_pattern().replace_all(html, placeholder)
}

/// Turn placeholders back into newline characters.
pub fn restore_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains(LINE_BREAK_PLACEHOLDER) {
        Cow::Owned(text.replace(LINE_BREAK_PLACEHOLDER, "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
