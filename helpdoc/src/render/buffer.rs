//! Append-only output buffer.

/// Lines of rendered output.
///
/// Trailing whitespace is stripped on the way in. [`OutputBuffer::blank`] never produces a
/// leading blank line or two blank lines in a row, so blocks can ask for separation without
/// knowing what came before them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct OutputBuffer {
    lines: Vec<String>,
}

impl OutputBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        let mut line = line.into();
        line.truncate(line.trim_end().len());
        self.lines.push(line);
    }

    pub(crate) fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        for line in lines {
            self.push(line);
        }
    }

    /// Request a separating blank line.
    pub(crate) fn blank(&mut self) {
        if matches!(self.lines.last(), Some(last) if !last.is_empty()) {
            self.lines.push(String::new());
        }
    }

    pub(crate) fn append(&mut self, other: OutputBuffer) {
        self.lines.extend(other.lines);
    }

    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Join into newline-terminated text, dropping trailing blank lines.
    pub(crate) fn into_text(mut self) -> String {
        while matches!(self.lines.last(), Some(last) if last.is_empty()) {
            self.lines.pop();
        }
        let mut text = self.lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }
}
