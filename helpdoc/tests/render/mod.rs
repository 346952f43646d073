//! End to end rendering: Markdown in, help text and tags out.

mod layout;
mod tags;

use helpdoc::RenderConfig;

/// A config with no header line and no modeline, so output is only TOC and body.
pub(crate) fn bare_config(cols: usize) -> RenderConfig {
    RenderConfig {
        cols,
        modeline: false,
        ..RenderConfig::default()
    }
}
