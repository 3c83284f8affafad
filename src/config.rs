use std::borrow::Cow;

/// Rendering options, carried by a [`MarkdownRenderer`](crate::MarkdownRenderer).
#[derive(Clone, Debug)]
pub struct Config {
    /// Allow fences marked `copy` to render a copy button.
    ///
    /// This is a host capability flag: a host that does not ship the
    /// clipboard script can turn buttons off globally, and `copy` modifiers
    /// on fences are then ignored. Defaults to `true`.
    pub copy_buttons: bool,
    /// HTML-escape the text captured by the inline span rules (bold,
    /// italic, inline code, link labels and URLs).
    ///
    /// Off by default: inline rendering historically trusts the caller to
    /// pre-sanitize, and raw HTML in running text passes through unchanged.
    /// Turning this on is a behavior change, not a neutral refactor.
    pub escape_spans: bool,
    /// One level of indentation emitted by the code beautifier.
    /// Defaults to two spaces.
    pub indent: Cow<'static, str>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            copy_buttons: true,
            escape_spans: false,
            indent: "  ".into(),
        }
    }
}
