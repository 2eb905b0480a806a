//! Lossy whitespace minification.
//!
//! Drops blank lines, trims every remaining line and rejoins with
//! `\n`. Indentation and original line endings are not preserved.

/// Characters treated as line breaks.
///
/// Covers `\n`, `\r\n` (as two breaks with an empty line between,
/// which is dropped anyway), lone `\r`, and the Unicode line and
/// paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Minify `content`.
///
/// The output never contains an empty line or a line with leading or
/// trailing whitespace, and `minify(minify(x)) == minify(x)`.
pub fn minify(content: &str) -> String {
    let mut out = String::with_capacity(content.len());

    for line in content.split(is_line_break) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(trimmed);
    }

    out
}
