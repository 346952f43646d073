//! Sidecar tag index.
//!
//! The viewer resolves `|tag|` jumps through a `tags` file next to the help files. Each line
//! is `tag<TAB>file<TAB>/*tag*`: the tag, the help file that defines it, and a search
//! pattern locating the definition. Lines must be sorted by tag name.

use std::collections::BTreeSet;

/// Default file name of the tag index.
pub const TAGS_FILE_NAME: &str = "tags";

/// Build the tag index for `tags` defined in the help file `file_name`.
pub fn format_tag_index(tags: &BTreeSet<String>, file_name: &str) -> String {
    // BTreeSet iterates in byte order, which is the order the viewer expects
    let mut index = String::new();
    for tag in tags {
        index.push_str(&format!("{tag}\t{file_name}\t/*{tag}*\n"));
    }
    index
}
