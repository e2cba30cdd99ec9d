//! Code generation utilities.
//!
//! Shared indentation and line-splitting helpers.

/// One level of indentation in both output formats
pub const INDENT_UNIT: &str = "  ";

/// Push `level` indentation units onto `output`
pub(super) fn indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str(INDENT_UNIT);
    }
}

/// Characters that end a line. Besides `\n` and `\r` this includes the
/// vertical tab, form feed, the file/group/record separators, NEL and the
/// Unicode line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines, keeping empty ones. `\r\n` counts as a single
/// break. A trailing line break does not produce a final empty line, and empty
/// text has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((index, c)) => {
                lines.push(&rest[..index]);
                let break_len = if rest[index..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                rest = &rest[index + break_len..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}
