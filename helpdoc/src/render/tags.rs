//! Tag generation
//!
//! Tags are the `*name*` anchors the help viewer jumps to. Every heading gets one, derived
//! from its text. Names must be unique across the file, so the registry remembers every tag
//! it handed out and suffixes repeats with `_2`, `_3`, ...

use std::collections::BTreeSet;
use tracing::trace;

/// Fallback name for headings whose text has no tag-safe characters.
const EMPTY_TAG: &str = "section";

/// Case style applied to the words of a tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagStyle {
    /// `getting_started`
    #[default]
    Snake,
    /// `GettingStarted`
    Pascal,
}

/// Set of tags defined by one render. Only grows.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    style: TagStyle,
    prefix: Option<String>,
    tags: BTreeSet<String>,
}

impl TagRegistry {
    pub fn new(style: TagStyle, prefix: Option<&str>) -> Self {
        let prefix = prefix
            .map(|prefix| normalize(prefix, style))
            .filter(|prefix| !prefix.is_empty());
        Self {
            style,
            prefix,
            tags: BTreeSet::new(),
        }
    }

    /// Derive a tag from `candidate`, make it unique, record it and return it.
    pub fn reserve(&mut self, candidate: &str) -> String {
        let mut name = normalize(candidate, self.style);
        if name.is_empty() {
            name = EMPTY_TAG.to_string();
        }
        let base = match &self.prefix {
            Some(prefix) => format!("{prefix}-{name}"),
            None => name,
        };

        let mut tag = base.clone();
        let mut counter = 2;
        while self.tags.contains(&tag) {
            tag = format!("{base}_{counter}");
            counter += 1;
        }

        trace!(candidate, %tag, "reserved tag");
        self.tags.insert(tag.clone());
        tag
    }

    /// Record a tag exactly as given (e.g. the help file name). Returns false if it was
    /// already present.
    pub fn insert_verbatim(&mut self, tag: &str) -> bool {
        self.tags.insert(tag.to_string())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn into_tags(self) -> BTreeSet<String> {
        self.tags
    }
}

/// Turn free text into a tag name.
///
/// Words are split on whitespace and underscores. Only alphanumerics, `-` and `.` survive
/// inside a word; `*`, `|` and friends would break the viewer's tag syntax.
pub fn normalize(text: &str, style: TagStyle) -> String {
    let words = text
        .split(|c: char| c.is_whitespace() || c == '_')
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '.')
                .collect::<String>()
        })
        .map(|word| word.trim_matches(|c| c == '-' || c == '.').to_string())
        .filter(|word| !word.is_empty());

    match style {
        TagStyle::Snake => words
            .map(|word| word.to_lowercase())
            .collect::<Vec<_>>()
            .join("_"),
        TagStyle::Pascal => words.map(|word| capitalize(&word)).collect(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_lowercases_and_joins_words() {
        assert_eq!(normalize("Getting Started", TagStyle::Snake), "getting_started");
        assert_eq!(normalize("  Multiple   Spaces ", TagStyle::Snake), "multiple_spaces");
    }

    #[test]
    fn pascal_case_capitalizes_words() {
        assert_eq!(normalize("getting started", TagStyle::Pascal), "GettingStarted");
        assert_eq!(normalize("use `foo` *now*", TagStyle::Pascal), "UseFooNow");
    }

    #[test]
    fn strips_characters_that_break_tags() {
        assert_eq!(normalize("What's |new|?", TagStyle::Snake), "whats_new");
        assert_eq!(normalize("Version 1.2", TagStyle::Snake), "version_1.2");
        assert_eq!(normalize("-- options --", TagStyle::Snake), "options");
    }

    #[test]
    fn repeated_candidates_get_numeric_suffixes() {
        let mut registry = TagRegistry::default();
        assert_eq!(registry.reserve("Setup"), "setup");
        assert_eq!(registry.reserve("Setup"), "setup_2");
        assert_eq!(registry.reserve("Setup"), "setup_3");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn suffix_skips_names_already_taken() {
        let mut registry = TagRegistry::default();
        assert_eq!(registry.reserve("Setup 2"), "setup_2");
        assert_eq!(registry.reserve("Setup"), "setup");
        assert_eq!(registry.reserve("Setup"), "setup_3");
    }

    #[test]
    fn prefix_is_normalized_with_the_same_style() {
        let mut snake = TagRegistry::new(TagStyle::Snake, Some("MyPlugin"));
        assert_eq!(snake.reserve("Usage"), "myplugin-usage");

        let mut pascal = TagRegistry::new(TagStyle::Pascal, Some("my plugin"));
        assert_eq!(pascal.reserve("basic usage"), "MyPlugin-BasicUsage");
    }

    #[test]
    fn empty_candidate_falls_back() {
        let mut registry = TagRegistry::default();
        assert_eq!(registry.reserve("!!!"), "section");
        assert_eq!(registry.reserve(""), "section_2");
    }

    #[test]
    fn verbatim_tags_participate_in_uniqueness() {
        let mut registry = TagRegistry::default();
        assert!(registry.insert_verbatim("intro"));
        assert!(!registry.insert_verbatim("intro"));
        assert_eq!(registry.reserve("Intro"), "intro_2");
        assert!(registry.contains("intro_2"));
    }

    #[test]
    fn iteration_is_sorted() {
        let mut registry = TagRegistry::default();
        registry.reserve("zeta");
        registry.reserve("alpha");
        registry.reserve("Mid");
        let tags: Vec<&str> = registry.iter().collect();
        assert_eq!(tags, vec!["alpha", "mid", "zeta"]);
    }
}
