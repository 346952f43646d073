//! Markdown parsing (Markdown → IR)
//!
//! Pipeline: Markdown string → Comrak AST → IR tree.
//! Comrak does all of the actual parsing; this module only adapts its node
//! values into the closed [`Block`]/[`Inline`] enums the renderer matches on.

use crate::ir::nodes::{
    Block, BlockQuote, CodeBlock, Document, Heading, Image, Inline, Link, List, ListItem,
    ListKind, Paragraph, Table, TableCellAlignment, TableRow,
};
use comrak::nodes::{AstNode, ListDelimType, ListType, NodeValue, TableAlignment};
use comrak::{parse_document, Arena, ComrakOptions};
use tracing::debug;

/// Parse a Markdown string into an IR document.
pub fn parse_from_markdown(source: &str) -> Document {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    Document {
        children: collect_blocks(root),
    }
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.front_matter_delimiter = Some("---".to_string());
    options
}

/// Convert the block children of `node` into IR blocks.
fn collect_blocks<'a>(node: &'a AstNode<'a>) -> Vec<Block> {
    node.children().filter_map(convert_block).collect()
}

fn convert_block<'a>(node: &'a AstNode<'a>) -> Option<Block> {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Heading(heading) => Some(Block::Heading(Heading {
            level: heading.level.clamp(1, 6),
            content: collect_inlines(node),
        })),

        NodeValue::Paragraph => Some(Block::Paragraph(Paragraph {
            content: collect_inlines(node),
        })),

        NodeValue::List(list) => {
            let kind = match list.list_type {
                ListType::Bullet => ListKind::Bullet,
                ListType::Ordered => ListKind::Ordered {
                    start: list.start,
                    delimiter: match list.delimiter {
                        ListDelimType::Period => '.',
                        ListDelimType::Paren => ')',
                    },
                },
            };
            let items = node.children().filter_map(convert_list_item).collect();
            Some(Block::List(List {
                kind,
                tight: list.tight,
                items,
            }))
        }

        // The info string is dropped: examples in help files carry no language
        NodeValue::CodeBlock(code_block) => Some(Block::CodeBlock(CodeBlock {
            content: code_block.literal.clone(),
        })),

        NodeValue::BlockQuote => Some(Block::BlockQuote(BlockQuote {
            children: collect_blocks(node),
        })),

        NodeValue::Table(table) => {
            let alignments = table
                .alignments
                .iter()
                .map(|align| match align {
                    TableAlignment::Left => TableCellAlignment::Left,
                    TableAlignment::Right => TableCellAlignment::Right,
                    TableAlignment::Center => TableCellAlignment::Center,
                    TableAlignment::None => TableCellAlignment::None,
                })
                .collect();

            let mut header = None;
            let mut rows = Vec::new();
            for child in node.children() {
                if let NodeValue::TableRow(is_header) = child.data.borrow().value {
                    let row = TableRow {
                        cells: child.children().map(collect_inlines).collect(),
                    };
                    if is_header && header.is_none() {
                        header = Some(row);
                    } else {
                        rows.push(row);
                    }
                }
            }

            Some(Block::Table(Table {
                alignments,
                header,
                rows,
            }))
        }

        NodeValue::ThematicBreak => Some(Block::ThematicBreak),

        NodeValue::HtmlBlock(html) => Some(Block::Html(html.literal.clone())),

        NodeValue::FrontMatter(_) => None,

        other => {
            debug!(node = ?other, "skipping unsupported block node");
            None
        }
    }
}

fn convert_list_item<'a>(node: &'a AstNode<'a>) -> Option<ListItem> {
    let task = match &node.data.borrow().value {
        NodeValue::Item(_) => None,
        NodeValue::TaskItem(symbol) => Some(symbol.is_some()),
        _ => return None,
    };

    Some(ListItem {
        task,
        children: collect_blocks(node),
    })
}

/// Convert the inline children of `node` into IR inlines.
fn collect_inlines<'a>(node: &'a AstNode<'a>) -> Vec<Inline> {
    let mut content = Vec::new();
    for child in node.children() {
        collect_inline(child, &mut content);
    }
    content
}

fn collect_inline<'a>(node: &'a AstNode<'a>, content: &mut Vec<Inline>) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Text(text) => content.push(Inline::Text(text.clone())),

        NodeValue::Emph => content.push(Inline::Emphasis(collect_inlines(node))),

        NodeValue::Strong => content.push(Inline::Strong(collect_inlines(node))),

        NodeValue::Strikethrough => content.push(Inline::Strikethrough(collect_inlines(node))),

        NodeValue::Code(code) => content.push(Inline::Code(code.literal.clone())),

        NodeValue::Link(link) => content.push(Inline::Link(Link {
            url: link.url.clone(),
            content: collect_inlines(node),
        })),

        NodeValue::Image(link) => content.push(Inline::Image(Image {
            src: link.url.clone(),
            alt: collect_text_from_children(node),
        })),

        NodeValue::LineBreak => content.push(Inline::LineBreak),

        NodeValue::SoftBreak => content.push(Inline::SoftBreak),

        NodeValue::HtmlInline(html) => content.push(Inline::Html(html.clone())),

        _ => {
            // Unknown inline types keep their text so nothing silently vanishes
            let text = collect_text_from_children(node);
            if !text.is_empty() {
                content.push(Inline::Text(text));
            }
        }
    }
}

fn collect_text_from_children<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.children() {
        collect_text_content(child, &mut text);
    }
    text
}

/// Collect plain text content from a node and its descendants.
fn collect_text_content<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::Code(code) => output.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text_content(child, output);
            }
        }
    }
}
