//! Markdown input
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing. It is CommonMark compliant
//! and supports the GFM extensions help files commonly come from (tables,
//! strikethrough, autolinks, task lists).
//!
//! # Element Mapping Table
//!
//! | Markdown                | IR                        | Help file rendering                 |
//! |-------------------------|---------------------------|-------------------------------------|
//! | Heading (# ## ###)      | `Block::Heading`          | Rule, numbered title, `*tag*`       |
//! | Paragraph               | `Block::Paragraph`        | Word wrapped at the column width    |
//! | List (- or 1. 2. 3.)    | `Block::List`             | Marker + hanging indent             |
//! | Code block (```)        | `Block::CodeBlock`        | `>` ... `<` example block           |
//! | Block quote (>)         | `Block::BlockQuote`       | Indented                            |
//! | Table                   | `Block::Table`            | Column-aligned grid                 |
//! | Thematic break (---)    | `Block::ThematicBreak`    | Full-width rule                     |
//! | HTML block              | `Block::Html`             | Dropped                             |
//! | Front matter            | (none)                    | Dropped                             |

pub mod parser;

pub use parser::parse_from_markdown;
