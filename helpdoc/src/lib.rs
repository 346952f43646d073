//! Markdown to Vim help file conversion
//!
//!     This crate turns a Markdown document into a plain-text help file laid out for the
//!     editor's `:help` viewer: a title line, a table of contents linking to every heading,
//!     wrapped body text, `>`/`<` delimited code examples, and a sidecar `tags` index the
//!     viewer uses for jump-to-definition.
//!
//!     This is a pure lib apart from the publish module's file writes. It powers the
//!     md2help binary but assumes no shell environment: no printing, no env vars.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # HelpdocError, file level failures
//!     ├── ir                      # Intermediate Representation (closed block/inline enums)
//!     ├── markdown                # comrak AST → IR
//!     ├── render                  # IR → help text + tag set
//!     │   ├── tags.rs
//!     │   ├── wrap.rs
//!     │   ├── inline.rs
//!     │   ├── buffer.rs
//!     │   ├── block.rs
//!     │   └── document.rs
//!     ├── tagfile.rs              # tag set → `tags` index
//!     ├── publish.rs              # read, render, write
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # includes the modules below
//!     ├── render.rs               # full document layouts
//!     ├── tags.rs                 # tag uniqueness and the index file
//!     └── wrap.rs                 # wrapper properties
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to
//!     include these in the mod.
//!
//! Core Algorithms
//!
//!     Rendering is a single recursive walk over the IR. Indentation is passed down as a
//!     value, so a nested list or quote never has to undo anything on the way out. Headings
//!     are recorded as they are rendered and the table of contents is built from those
//!     records afterwards, then placed in front of the body.
//!
//!     Rendering never fails. Only reading and writing files can, see [`error::HelpdocError`].

pub mod error;
pub mod ir;
pub mod markdown;
pub mod publish;
pub mod render;
pub mod tagfile;

pub use error::HelpdocError;
pub use markdown::parse_from_markdown;
pub use publish::{publish, PublishResult, PublishSpec};
pub use render::{render, RenderConfig, RenderFlags, RenderedDocument};
pub use tagfile::format_tag_index;

/// Parse Markdown and render it in one step.
pub fn convert(source: &str, config: &RenderConfig) -> RenderedDocument {
    render(&parse_from_markdown(source), config)
}
