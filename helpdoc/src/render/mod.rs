//! Vim help file rendering (IR → text)
//!
//!     The renderer walks an IR [`Document`] once, top to bottom, and produces the laid out
//!     help text together with the set of tags it generated. Pieces, leaf first:
//!
//!     - tags.rs:      TagRegistry, unique tag names derived from heading text
//!     - wrap.rs:      greedy word wrapping and tab expansion
//!     - inline.rs:    inline spans → one plain string
//!     - buffer.rs:    append-only line buffer
//!     - block.rs:     one block node → lines (headings, lists, code, tables...)
//!     - document.rs:  header line, table of contents, body, modeline
//!
//!     Layout of a rendered file:
//!
//!         *name.txt*                                    description
//!
//!         1. Intro ....................................... |name-intro|
//!           1.1. Usage ................................... |name-usage|
//!
//!         1. INTRO                                           *name-intro*
//!
//!         Body text wrapped at the column width.
//!
//!         vim:tw=79:ts=8:ft=help:norl:
//!
//!     Rendering cannot fail. The IR is trusted to be well formed.

mod block;
mod buffer;
mod document;
pub mod inline;
pub mod tags;
pub mod wrap;

pub use document::render;
pub use inline::render_inline;
pub use tags::{TagRegistry, TagStyle};
pub use wrap::{expand_tabs, wrap};

use std::collections::BTreeSet;

/// Default layout width.
pub const DEFAULT_COLS: usize = 79;

/// Default tab width.
pub const DEFAULT_TABS: usize = 8;

/// Switches that alter what gets emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderFlags {
    /// Do not emit the table of contents.
    pub no_toc: bool,
    /// Do not emit rules above headings.
    pub no_rules: bool,
    /// Build tags in PascalCase instead of snake_case.
    pub pascal: bool,
}

/// Configuration for a single render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Column width used for wrapping and right alignment.
    pub cols: usize,

    /// Tab width used when expanding tabs in verbatim content.
    pub tabs: usize,

    pub flags: RenderFlags,

    /// Help file name shown as `*name*` on the first line.
    pub title: Option<String>,

    /// Short description shown on the first line, right aligned.
    pub description: Option<String>,

    /// Namespace prepended to every heading tag (`prefix-heading`).
    pub tag_prefix: Option<String>,

    /// Whether to close the file with a `vim:` modeline.
    pub modeline: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            tabs: DEFAULT_TABS,
            flags: RenderFlags::default(),
            title: None,
            description: None,
            tag_prefix: None,
            modeline: true,
        }
    }
}

impl RenderConfig {
    /// Configuration for a help file called `file_name` (e.g. `plugin.txt`).
    ///
    /// The file name becomes the title and its stem the tag prefix.
    pub fn for_help_file(file_name: &str) -> Self {
        let mut config = Self::default();
        config.set_help_file(file_name);
        config
    }

    /// Fill in title and tag prefix from a help file name, keeping any that are already set.
    pub fn set_help_file(&mut self, file_name: &str) {
        if file_name.is_empty() {
            return;
        }
        let stem = match file_name.rfind('.') {
            Some(index) if index > 0 => &file_name[..index],
            _ => file_name,
        };
        self.title.get_or_insert_with(|| file_name.to_string());
        self.tag_prefix.get_or_insert_with(|| stem.to_string());
    }

    pub fn tag_style(&self) -> TagStyle {
        if self.flags.pascal {
            TagStyle::Pascal
        } else {
            TagStyle::Snake
        }
    }
}

/// Output of a render: the help text and every tag defined in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub text: String,
    /// Sorted, unique.
    pub tags: BTreeSet<String>,
}
