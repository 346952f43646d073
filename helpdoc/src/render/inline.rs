//! Inline rendering
//!
//! Help files are plain text, so inline markup is flattened into decorations the viewer
//! either highlights or leaves readable:
//!
//! | Inline         | Output           |
//! |----------------|------------------|
//! | Text           | unchanged        |
//! | Emphasis       | `_text_`         |
//! | Strong         | `**text**`       |
//! | Strikethrough  | `~~text~~`       |
//! | Code           | `` `code` ``     |
//! | Link           | `text (url)`     |
//! | Image          | `alt (src)`      |
//! | Hard break     | newline          |
//! | Soft break     | space            |
//!
//! Single asterisks are never used: `*word*` defines a tag in the viewer. Literal text that
//! would read as a tag (an escaped `\*word\*` in the source) is wrapped in backticks, so
//! the closing star is no longer followed by whitespace.

use crate::ir::nodes::Inline;

/// Render a run of inline nodes into one string.
///
/// The result may contain `\n` where the source had hard line breaks; callers wrap each
/// segment separately.
pub fn render_inline(content: &[Inline]) -> String {
    let mut output = String::new();
    for node in content {
        push_inline(node, &mut output);
    }
    quote_stray_tags(&output)
}

/// Render inline nodes to a single line, folding breaks and runs of whitespace.
pub fn render_inline_line(content: &[Inline]) -> String {
    render_inline(content)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_inline(node: &Inline, output: &mut String) {
    match node {
        Inline::Text(text) => output.push_str(text),
        Inline::Emphasis(children) => push_delimited(output, "_", children),
        Inline::Strong(children) => push_delimited(output, "**", children),
        Inline::Strikethrough(children) => push_delimited(output, "~~", children),
        Inline::Code(code) => {
            output.push('`');
            output.push_str(code);
            output.push('`');
        }
        Inline::Link(link) => push_target(output, &render_inline_line(&link.content), &link.url),
        Inline::Image(image) => push_target(output, image.alt.trim(), &image.src),
        Inline::LineBreak => output.push('\n'),
        Inline::SoftBreak => output.push(' '),
        Inline::Html(html) => output.push_str(html),
    }
}

fn push_delimited(output: &mut String, delimiter: &str, children: &[Inline]) {
    output.push_str(delimiter);
    for child in children {
        push_inline(child, output);
    }
    output.push_str(delimiter);
}

/// `text (target)`, or just the target when the text adds nothing.
fn push_target(output: &mut String, text: &str, target: &str) {
    if text.is_empty() || text == target {
        output.push_str(target);
    } else if target.is_empty() {
        output.push_str(text);
    } else {
        output.push_str(text);
        output.push_str(" (");
        output.push_str(target);
        output.push(')');
    }
}

/// Wrap every whitespace-separated word that the viewer would take as a `*tag*`
/// definition in backticks. Whitespace is copied through unchanged.
fn quote_stray_tags(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut word_start = None;
    for (index, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                push_word(&text[start..index], &mut output);
            }
            output.push(c);
        } else if word_start.is_none() {
            word_start = Some(index);
        }
    }
    if let Some(start) = word_start {
        push_word(&text[start..], &mut output);
    }
    output
}

fn push_word(word: &str, output: &mut String) {
    if defines_tag(word) {
        output.push('`');
        output.push_str(word);
        output.push('`');
    } else {
        output.push_str(word);
    }
}

/// A word ending in `*name*`, where `name` is printable ASCII other than `"` and `*`.
fn defines_tag(word: &str) -> bool {
    let Some(body) = word.strip_suffix('*') else {
        return false;
    };
    match body.rfind('*') {
        Some(open) => {
            let name = &body[open + 1..];
            !name.is_empty()
                && name
                    .bytes()
                    .all(|b| b.is_ascii_graphic() && b != b'"' && b != b'*')
        }
        None => false,
    }
}
