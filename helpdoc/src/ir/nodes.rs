//! Core data structures for the Intermediate Representation (IR).

/// Represents the root of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub children: Vec<Block>,
}

/// A block-level node.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    List(List),
    CodeBlock(CodeBlock),
    BlockQuote(BlockQuote),
    Table(Table),
    ThematicBreak,
    /// Raw HTML blocks are kept so the renderer can decide what to do with them.
    Html(String),
}

/// Represents a heading with a specific level.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    /// 1 through 6.
    pub level: u8,
    pub content: Vec<Inline>,
}

/// Represents a paragraph of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub content: Vec<Inline>,
}

/// Represents a list of items.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub kind: ListKind,
    /// Tight lists carry no blank lines between their items.
    pub tight: bool,
    pub items: Vec<ListItem>,
}

/// Ordered or bullet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered { start: usize, delimiter: char },
}

/// Represents an item in a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    /// `Some(checked)` for task list items.
    pub task: Option<bool>,
    pub children: Vec<Block>,
}

/// Represents a block of verbatim text.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub content: String,
}

/// Represents a quoted group of blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockQuote {
    pub children: Vec<Block>,
}

/// Represents a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub alignments: Vec<TableCellAlignment>,
    pub header: Option<TableRow>,
    pub rows: Vec<TableRow>,
}

/// Represents a table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<Vec<Inline>>,
}

/// Alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCellAlignment {
    Left,
    Center,
    Right,
    None,
}

/// Represents inline content, such as text, emphasis, links, etc.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Code(String),
    Link(Link),
    Image(Image),
    /// Hard line break; forces a wrap point.
    LineBreak,
    /// Source line break inside a paragraph; renders as a space.
    SoftBreak,
    Html(String),
}

/// Represents a hyperlink.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub url: String,
    pub content: Vec<Inline>,
}

/// Represents an image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

impl Inline {
    /// Shorthand for a plain text node.
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(value.into())
    }
}
