use std::borrow::Cow;

use crate::config::Config;

/// Used to render Markdown inputs.
///
/// A renderer holds a [`Config`] and can be reused for any number of
/// [`render`](MarkdownRenderer::render) calls. Every call owns its own
/// working state, so independent inputs may be rendered concurrently from
/// shared references.
#[derive(Clone, Debug, Default)]
pub struct MarkdownRenderer {
    pub(crate) config: Config,
}

impl MarkdownRenderer {
    /// Create a [`MarkdownRenderer`] with a custom [`Config`].
    ///
    /// ```rust
    /// # use markdown_render::{Config, MarkdownRenderer};
    /// let renderer = MarkdownRenderer::with_config(Config {
    ///     copy_buttons: false,
    ///     ..Default::default()
    /// });
    /// ```
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Allow or suppress copy buttons on `copy`-tagged fences.
    pub fn copy_buttons(&mut self, enabled: bool) -> &mut Self {
        self.config.copy_buttons = enabled;
        self
    }

    /// HTML-escape the text captured by the inline span rules.
    ///
    /// See [`Config::escape_spans`]; the default trusts span contents.
    pub fn escape_spans(&mut self, enabled: bool) -> &mut Self {
        self.config.escape_spans = enabled;
        self
    }

    /// Configure one level of beautifier indentation.
    ///
    /// When left alone, the default, indentation is two spaces per bracket
    /// depth.
    pub fn indent(&mut self, indent: impl Into<Cow<'static, str>>) -> &mut Self {
        self.config.indent = indent.into();
        self
    }
}
