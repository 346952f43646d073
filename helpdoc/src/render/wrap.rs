//! Greedy word wrapping.
//!
//! Widths are display widths (via `unicode-width`), so wide characters count double and
//! combining marks count zero. Tokens are never split: a word wider than the remaining room
//! goes on a line of its own, even if that line overflows.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into lines no wider than `width`, each prefixed with `indent` spaces.
///
/// Whitespace (including tabs and newlines) only separates tokens; it is never copied
/// into the output. Returns no lines for blank input.
pub fn wrap(text: &str, width: usize, indent: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for token in text.split_whitespace() {
        let token_width = UnicodeWidthStr::width(token);

        if line.is_empty() {
            line.push_str(token);
            line_width = token_width;
        } else if indent + line_width + 1 + token_width <= width {
            line.push(' ');
            line.push_str(token);
            line_width += 1 + token_width;
        } else {
            lines.push(format!("{pad}{line}"));
            line = token.to_string();
            line_width = token_width;
        }
    }

    if !line.is_empty() {
        lines.push(format!("{pad}{line}"));
    }

    lines
}

/// Replace tabs with spaces up to the next multiple of `tabs` columns.
pub fn expand_tabs(line: &str, tabs: usize) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }

    let tabs = tabs.max(1);
    let mut expanded = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let fill = tabs - column % tabs;
            expanded.extend(std::iter::repeat(' ').take(fill));
            column += fill;
        } else {
            expanded.push(c);
            column += UnicodeWidthChar::width(c).unwrap_or(0);
        }
    }
    expanded
}

/// Display width of a string.
pub(crate) fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}
