//! Block rendering
//!
//! Each block variant lays itself out independently; the only state shared between blocks
//! is the tag registry, the heading records and the chapter counters. Nesting depth is a
//! [`Scope`] passed by value, so leaving a list item or quote restores the outer indent
//! without any bookkeeping.

use super::buffer::OutputBuffer;
use super::inline::{render_inline, render_inline_line};
use super::tags::TagRegistry;
use super::wrap::{display_width, expand_tabs, wrap};
use super::RenderConfig;
use crate::ir::nodes::{
    Block, CodeBlock, Heading, List, ListKind, Paragraph, Table, TableCellAlignment, TableRow,
};
use tracing::debug;

const BULLET_MARKER: &str = "-";

/// Extra indent for code block content.
const CODE_OFFSET: usize = 4;

/// Indent added for each block quote level.
const QUOTE_STEP: usize = 4;

const MAX_HEADING_LEVEL: usize = 6;

/// A heading as it was rendered. Feeds the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeadingRecord {
    pub level: u8,
    pub text: String,
    pub tag: String,
    /// Dotted section number, e.g. `1.2.`
    pub chapter: String,
}

/// Where a block sits: its indent column and whether it is inside a tight list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Scope {
    pub indent: usize,
    pub tight: bool,
}

impl Scope {
    fn nested(self, step: usize, tight: bool) -> Self {
        Scope {
            indent: self.indent + step,
            tight,
        }
    }

    fn pad(self) -> String {
        " ".repeat(self.indent)
    }
}

pub(crate) struct BlockRenderer<'a> {
    config: &'a RenderConfig,
    tags: &'a mut TagRegistry,
    headings: Vec<HeadingRecord>,
    /// Levels of the open headings, outermost first. Depth is the stack length.
    open_levels: Vec<u8>,
    /// Section counter per depth.
    chapters: [usize; MAX_HEADING_LEVEL],
}

impl<'a> BlockRenderer<'a> {
    pub(crate) fn new(config: &'a RenderConfig, tags: &'a mut TagRegistry) -> Self {
        Self {
            config,
            tags,
            headings: Vec::new(),
            open_levels: Vec::new(),
            chapters: [0; MAX_HEADING_LEVEL],
        }
    }

    pub(crate) fn into_headings(self) -> Vec<HeadingRecord> {
        self.headings
    }

    pub(crate) fn render_blocks(&mut self, blocks: &[Block], scope: Scope, out: &mut OutputBuffer) {
        for block in blocks {
            self.render_block(block, scope, out);
        }
    }

    pub(crate) fn render_block(&mut self, block: &Block, scope: Scope, out: &mut OutputBuffer) {
        match block {
            Block::Heading(heading) => self.render_heading(heading, scope, out),
            Block::Paragraph(paragraph) => self.render_paragraph(paragraph, scope, out),
            Block::List(list) => self.render_list(list, scope, out),
            Block::CodeBlock(code) => self.render_code_block(code, scope, out),
            Block::BlockQuote(quote) => {
                self.render_blocks(&quote.children, scope.nested(QUOTE_STEP, false), out)
            }
            Block::Table(table) => self.render_table(table, scope, out),
            Block::ThematicBreak => {
                out.blank();
                out.push("-".repeat(self.config.cols));
                separate(scope, out);
            }
            Block::Html(html) => {
                debug!(bytes = html.len(), "dropping HTML block");
            }
        }
    }

    fn render_heading(&mut self, heading: &Heading, scope: Scope, out: &mut OutputBuffer) {
        let text = render_inline_line(&heading.content);
        let tag = self.tags.reserve(&text);
        let chapter = self.next_chapter(heading.level);

        out.blank();
        // Rules span the full width, so only headings at the left margin get one
        if !self.config.flags.no_rules && !self.headings.is_empty() && scope.indent == 0 {
            let rule = if heading.level == 1 { "=" } else { "-" };
            out.push(rule.repeat(self.config.cols));
        }

        let title = format!("{}{chapter} {}", scope.pad(), text.to_uppercase());
        out.push(split_line(
            &title,
            &format!("*{tag}*"),
            ' ',
            self.config.cols,
        ));
        out.blank();

        self.headings.push(HeadingRecord {
            level: heading.level,
            text,
            tag,
            chapter,
        });
    }

    /// Advance the section counters for a heading at `level` and format its number.
    ///
    /// Numbering follows nesting, not raw levels: a level the document skips takes no
    /// place in the number, so `#`, `###`, `##` count as `1.`, `1.1.`, `1.2.`.
    fn next_chapter(&mut self, level: u8) -> String {
        assert!(
            (1..=MAX_HEADING_LEVEL).contains(&usize::from(level)),
            "heading level {level} out of range"
        );

        while self.open_levels.last().is_some_and(|open| *open >= level) {
            self.open_levels.pop();
        }
        self.open_levels.push(level);
        let depth = self.open_levels.len();

        self.chapters[depth - 1] += 1;
        for count in &mut self.chapters[depth..] {
            *count = 0;
        }

        let mut chapter = String::new();
        for count in &self.chapters[..depth] {
            chapter.push_str(&count.to_string());
            chapter.push('.');
        }
        chapter
    }

    fn render_paragraph(&mut self, paragraph: &Paragraph, scope: Scope, out: &mut OutputBuffer) {
        let text = render_inline(&paragraph.content);
        for segment in text.split('\n') {
            out.extend(wrap(segment, self.config.cols, scope.indent));
        }
        separate(scope, out);
    }

    fn render_list(&mut self, list: &List, scope: Scope, out: &mut OutputBuffer) {
        let markers: Vec<String> = list
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| list_marker(list.kind, index, item.task))
            .collect();

        // Every item shares one content column, so continuation lines line up
        let step = markers
            .iter()
            .map(|marker| display_width(marker))
            .max()
            .unwrap_or(1)
            + 1;
        let inner = scope.nested(step, list.tight);

        for (item, marker) in list.items.iter().zip(&markers) {
            let mut item_out = OutputBuffer::new();
            self.render_blocks(&item.children, inner, &mut item_out);

            let mut lines = item_out.into_lines();
            place_marker(&mut lines, scope.indent, step, marker);
            out.extend(lines);

            if !list.tight {
                out.blank();
            }
        }
        separate(scope, out);
    }

    fn render_code_block(&mut self, code: &CodeBlock, scope: Scope, out: &mut OutputBuffer) {
        // `>` at the end of a line opens an example; `<` in column 0 closes it
        out.push(format!("{}>", scope.pad()));
        let pad = " ".repeat(scope.indent + CODE_OFFSET);
        for line in code.content.lines() {
            let line = expand_tabs(line, self.config.tabs);
            if line.trim().is_empty() {
                out.push(String::new());
            } else {
                out.push(format!("{pad}{line}"));
            }
        }
        out.push("<");
        separate(scope, out);
    }

    fn render_table(&mut self, table: &Table, scope: Scope, out: &mut OutputBuffer) {
        let header = table.header.as_ref().map(render_row);
        let rows: Vec<Vec<String>> = table.rows.iter().map(render_row).collect();

        let columns = header
            .iter()
            .chain(rows.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        if columns == 0 {
            return;
        }

        let mut widths = vec![0; columns];
        for row in header.iter().chain(rows.iter()) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(display_width(cell));
            }
        }

        let pad = scope.pad();
        if let Some(header) = &header {
            out.push(format!(
                "{pad}{}",
                format_row(header, &widths, &table.alignments)
            ));
            let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
            out.push(format!("{pad}{}", separator.join("-+-")));
        }
        for row in &rows {
            out.push(format!("{pad}{}", format_row(row, &widths, &table.alignments)));
        }
        separate(scope, out);
    }
}

/// Blank line after a block, except between the blocks of a tight list item.
fn separate(scope: Scope, out: &mut OutputBuffer) {
    if !scope.tight {
        out.blank();
    }
}

fn list_marker(kind: ListKind, index: usize, task: Option<bool>) -> String {
    let mut marker = match kind {
        ListKind::Bullet => BULLET_MARKER.to_string(),
        ListKind::Ordered { start, delimiter } => format!("{}{delimiter}", start + index),
    };
    match task {
        Some(true) => marker.push_str(" [x]"),
        Some(false) => marker.push_str(" [ ]"),
        None => {}
    }
    marker
}

/// Put `marker` in the hanging indent of an item's first line.
fn place_marker(lines: &mut Vec<String>, indent: usize, step: usize, marker: &str) {
    let head = format!("{}{marker:<step$}", " ".repeat(indent));
    let content_start = indent + step;

    match lines.first_mut() {
        Some(first)
            if first.len() >= content_start
                && first.as_bytes()[..content_start].iter().all(|b| *b == b' ') =>
        {
            first.replace_range(..content_start, &head);
        }
        _ => lines.insert(0, head),
    }
}

fn render_row(row: &TableRow) -> Vec<String> {
    row.cells
        .iter()
        .map(|cell| render_inline_line(cell))
        .collect()
}

fn format_row(cells: &[String], widths: &[usize], alignments: &[TableCellAlignment]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let cell = cells.get(index).map(String::as_str).unwrap_or("");
            let align = alignments
                .get(index)
                .copied()
                .unwrap_or(TableCellAlignment::None);
            align_cell(cell, *width, align)
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn align_cell(cell: &str, width: usize, align: TableCellAlignment) -> String {
    let fill = width.saturating_sub(display_width(cell));
    match align {
        TableCellAlignment::Right => format!("{}{cell}", " ".repeat(fill)),
        TableCellAlignment::Center => {
            let left = fill / 2;
            format!("{}{cell}{}", " ".repeat(left), " ".repeat(fill - left))
        }
        TableCellAlignment::Left | TableCellAlignment::None => {
            format!("{cell}{}", " ".repeat(fill))
        }
    }
}

/// `left` and `right` on one line, with `right` ending at column `width`.
///
/// The gap is `fill` characters bordered by single spaces. When both sides do not fit they
/// are separated by one space and the line overflows.
pub(crate) fn split_line(left: &str, right: &str, fill: char, width: usize) -> String {
    if right.is_empty() {
        return left.to_string();
    }
    let used = display_width(left) + display_width(right) + 2;
    if used <= width {
        let gap: String = std::iter::repeat(fill).take(width - used).collect();
        format!("{left} {gap} {right}")
    } else {
        format!("{left} {right}")
    }
}
