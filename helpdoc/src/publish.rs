//! File publishing pipeline.
//!
//! Reads a Markdown file, renders it as a help file and writes the result, optionally
//! followed by a `tags` index next to it. This is the only part of the crate that touches
//! the filesystem; the CLI is a thin shell over [`publish`].

use crate::error::HelpdocError;
use crate::markdown::parse_from_markdown;
use crate::render::{render, RenderConfig};
use crate::tagfile::{format_tag_index, TAGS_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Specifies how to publish a help file.
///
/// ```ignore
/// let spec = PublishSpec::new("README.md", "doc/plugin.txt")
///     .with_config(config)
///     .with_tags(true);
/// ```
///
/// The output file name becomes the help title and its stem the tag prefix, unless the
/// config already sets them.
#[derive(Debug, Clone)]
pub struct PublishSpec {
    /// Markdown source file.
    pub input: PathBuf,
    /// Help file to write.
    pub output: PathBuf,
    pub config: RenderConfig,
    /// Write a tag index in the output's directory.
    pub generate_tags: bool,
    /// Name of the tag index file.
    pub tags_filename: String,
}

impl PublishSpec {
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            config: RenderConfig::default(),
            generate_tags: false,
            tags_filename: TAGS_FILE_NAME.to_string(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_tags(mut self, generate: bool) -> Self {
        self.generate_tags = generate;
        self
    }

    pub fn with_tags_filename(mut self, name: impl Into<String>) -> Self {
        self.tags_filename = name.into();
        self
    }
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    /// The help file written.
    pub output: PathBuf,
    /// The tag index written, if requested.
    pub tags_file: Option<PathBuf>,
    /// Number of tags defined in the help file.
    pub tag_count: usize,
}

/// Render `spec.input` into `spec.output`.
///
/// # Errors
///
/// Returns [`HelpdocError`] naming the offending path if:
/// - the input cannot be read
/// - the output cannot be written
/// - the tag index cannot be written
pub fn publish(spec: PublishSpec) -> Result<PublishResult, HelpdocError> {
    let source = fs::read_to_string(&spec.input)
        .map_err(|err| HelpdocError::read_input(&spec.input, err))?;

    let file_name = help_file_name(&spec.output);
    let mut config = spec.config;
    config.set_help_file(&file_name);

    let document = parse_from_markdown(&source);
    let rendered = render(&document, &config);

    fs::write(&spec.output, &rendered.text)
        .map_err(|err| HelpdocError::write_output(&spec.output, err))?;
    info!(
        input = %spec.input.display(),
        output = %spec.output.display(),
        tags = rendered.tags.len(),
        "wrote help file"
    );

    let tags_file = if spec.generate_tags {
        let path = tags_path(&spec.output, &spec.tags_filename);
        fs::write(&path, format_tag_index(&rendered.tags, &file_name))
            .map_err(|err| HelpdocError::write_tags(&path, err))?;
        info!(path = %path.display(), "wrote tag index");
        Some(path)
    } else {
        None
    };

    Ok(PublishResult {
        output: spec.output,
        tags_file,
        tag_count: rendered.tags.len(),
    })
}

fn help_file_name(output: &Path) -> String {
    output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn tags_path(output: &Path, tags_filename: &str) -> PathBuf {
    match output.parent() {
        Some(dir) => dir.join(tags_filename),
        None => PathBuf::from(tags_filename),
    }
}
