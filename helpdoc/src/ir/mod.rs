//! Intermediate Representation (IR) for Markdown documents.
//!
//! This is the tree the renderer consumes. It is built once by the Markdown
//! adapter (see [`crate::markdown`]) and never mutated afterwards.

pub mod nodes;
