//! Shared configuration loader for md2help.
//!
//! `defaults/helpdoc.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults
//! via [`Loader`] before deserializing into [`HelpdocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use helpdoc::render::{RenderConfig, RenderFlags};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/helpdoc.default.toml");

/// Name of the optional per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "helpdoc.toml";

/// Top-level configuration consumed by md2help.
#[derive(Debug, Clone, Deserialize)]
pub struct HelpdocConfig {
    pub render: RenderSettings,
    pub tags: TagSettings,
}

impl HelpdocConfig {
    /// Reject values the renderer cannot lay out with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.cols == 0 {
            return Err(ConfigError::Message(
                "render.cols must be at least 1".to_string(),
            ));
        }
        if self.render.tabs == 0 {
            return Err(ConfigError::Message(
                "render.tabs must be at least 1".to_string(),
            ));
        }
        if self.tags.filename.trim().is_empty() {
            return Err(ConfigError::Message(
                "tags.filename must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Layout knobs, phrased positively as they read in a config file.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderSettings {
    pub cols: usize,
    pub tabs: usize,
    pub toc: bool,
    pub rules: bool,
    pub pascal: bool,
    pub modeline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagSettings {
    pub generate: bool,
    pub filename: String,
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        RenderConfig {
            cols: settings.cols,
            tabs: settings.tabs,
            flags: RenderFlags {
                no_toc: !settings.toc,
                no_rules: !settings.rules,
                pascal: settings.pascal,
            },
            modeline: settings.modeline,
            ..RenderConfig::default()
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize the resulting configuration and validate it.
    pub fn build(self) -> Result<HelpdocConfig, ConfigError> {
        let config: HelpdocConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<HelpdocConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render.cols, 79);
        assert_eq!(config.render.tabs, 8);
        assert!(config.render.toc);
        assert!(config.render.rules);
        assert!(!config.render.pascal);
        assert!(config.render.modeline);
        assert!(!config.tags.generate);
        assert_eq!(config.tags.filename, "tags");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("render.cols", 100_i64)
            .expect("override to apply")
            .set_override("render.toc", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.render.cols, 100);
        assert!(!config.render.toc);
    }

    #[test]
    fn user_file_is_layered_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("helpdoc.toml");
        fs::write(&path, "[render]\npascal = true\n\n[tags]\ngenerate = true\n").unwrap();

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert!(config.render.pascal);
        assert!(config.tags.generate);
        assert_eq!(config.render.cols, 79);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config = Loader::new()
            .with_optional_file(dir.path().join(PROJECT_CONFIG_FILE))
            .build()
            .expect("config to build");
        assert_eq!(config.render.cols, 79);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Loader::new().with_file(dir.path().join("absent.toml")).build();
        assert!(result.is_err());
    }

    #[test]
    fn zero_width_is_rejected() {
        let err = Loader::new()
            .set_override("render.cols", 0_i64)
            .expect("override to apply")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("render.cols"));

        let err = Loader::new()
            .set_override("render.tabs", 0_i64)
            .expect("override to apply")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("render.tabs"));
    }

    #[test]
    fn zero_cols_in_user_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("helpdoc.toml");
        fs::write(&path, "[render]\ncols = 0\n").unwrap();
        assert!(Loader::new().with_file(&path).build().is_err());
    }

    #[test]
    fn render_settings_convert_to_render_config() {
        let mut config = load_defaults().expect("defaults to deserialize");
        config.render.toc = false;
        config.render.pascal = true;
        let render: RenderConfig = (&config.render).into();
        assert_eq!(render.cols, 79);
        assert!(render.flags.no_toc);
        assert!(!render.flags.no_rules);
        assert!(render.flags.pascal);
        assert!(render.modeline);
        assert_eq!(render.title, None);
    }
}
