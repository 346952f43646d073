//! Whole-document rendering: header line, table of contents, body and modeline.

use super::block::{split_line, BlockRenderer, HeadingRecord, Scope};
use super::buffer::OutputBuffer;
use super::tags::TagRegistry;
use super::{RenderConfig, RenderedDocument};
use crate::ir::nodes::Document;
use tracing::debug;

/// Indent per heading level in the table of contents.
const TOC_INDENT: usize = 2;

/// Render `doc` as a help file.
///
/// The body is rendered first; the table of contents is built from the headings it
/// recorded and placed in front of it, so turning the TOC off never changes the body.
pub fn render(doc: &Document, config: &RenderConfig) -> RenderedDocument {
    let mut tags = TagRegistry::new(config.tag_style(), config.tag_prefix.as_deref());
    if let Some(title) = &config.title {
        tags.insert_verbatim(title);
    }

    let mut body = OutputBuffer::new();
    let mut blocks = BlockRenderer::new(config, &mut tags);
    blocks.render_blocks(&doc.children, Scope::default(), &mut body);
    let headings = blocks.into_headings();
    debug!(
        blocks = doc.children.len(),
        headings = headings.len(),
        "rendered document body"
    );

    let mut out = OutputBuffer::new();
    write_header(config, &mut out);
    if !config.flags.no_toc {
        write_toc(config, &headings, &mut out);
    }
    out.append(body);
    if config.modeline {
        out.blank();
        out.push(format!(
            "vim:tw={}:ts={}:ft=help:norl:",
            config.cols, config.tabs
        ));
    }

    RenderedDocument {
        text: out.into_text(),
        tags: tags.into_tags(),
    }
}

/// `*name.txt*    description`
fn write_header(config: &RenderConfig, out: &mut OutputBuffer) {
    let description = config.description.as_deref().unwrap_or("").trim();
    let line = match &config.title {
        Some(title) => split_line(&format!("*{title}*"), description, ' ', config.cols),
        None => description.to_string(),
    };
    if !line.is_empty() {
        out.push(line);
        out.blank();
    }
}

fn write_toc(config: &RenderConfig, headings: &[HeadingRecord], out: &mut OutputBuffer) {
    if headings.is_empty() {
        return;
    }
    for heading in headings {
        let indent = " ".repeat(TOC_INDENT * usize::from(heading.level.saturating_sub(1)));
        let left = format!("{indent}{} {}", heading.chapter, heading.text);
        out.push(split_line(
            &left,
            &format!("|{}|", heading.tag),
            '.',
            config.cols,
        ));
    }
    out.blank();
}
