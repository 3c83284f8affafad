//! Convert Markdown to embeddable HTML fragments. [markdown_render] handles a
//! practical subset of Markdown (headings, lists, blockquotes, inline spans,
//! and fenced code blocks) and normalizes poorly formatted code samples with
//! a heuristic, language-aware beautifier.
//!
//! [markdown_render]: index.html
//!
//! # Getting Started
//!
//! ```rust
//! use markdown_render::render_markdown;
//!
//! let markdown = "# Hello\n\nThis is **bold** and *italic*.";
//!
//! let html = render_markdown(markdown)?;
//! assert_eq!(
//!     html,
//!     "<h1>Hello</h1>\n\n<p>This is <strong>bold</strong> and <em>italic</em>.</p>"
//! );
//! # Ok::<(), std::fmt::Error>(())
//! ```
//!
//! # Fenced code blocks
//!
//! Triple-backtick fences become self-contained snippets that later passes
//! cannot corrupt. A language tag selects the beautifier's line-break rules,
//! and a `copy` modifier adds a copy button backed by the snippet's
//! `data-code` attribute. A fence tagged `copy` alone keeps its exact
//! original formatting.
//!
//! ```rust
//! use markdown_render::render_markdown;
//!
//! let markdown = "```json copy\n{\"a\":1}\n```";
//!
//! let html = render_markdown(markdown)?;
//! assert!(html.contains("language-json"));
//! assert!(html.contains("has-copy-button"));
//! assert!(html.contains("&quot;a&quot;:1"));
//! # Ok::<(), std::fmt::Error>(())
//! ```
//!
//! # Using [`MarkdownRenderer`]
//!
//! The renderer type gives you more control over rendering.
//!
//! ```rust
//! use markdown_render::MarkdownRenderer;
//!
//! let mut renderer = MarkdownRenderer::default();
//! renderer.copy_buttons(false);
//!
//! let html = renderer.render("```copy\nsecret()\n```")?;
//! assert!(!html.contains("<button"));
//! # Ok::<(), std::fmt::Error>(())
//! ```

mod beautify;
mod block;
mod builder;
mod config;
mod escape;
mod fence;
mod inline;
mod renderer;
#[cfg(test)]
mod test;

pub use beautify::{beautify, Language};
pub use builder::MarkdownRenderer;
pub use config::Config;

/// Render a Markdown snippet with all the default settings.
///
/// Returns an empty string for empty input; the caller decides what
/// placeholder UI that maps to.
///
/// ```rust
/// # use markdown_render::render_markdown;
/// let markdown = "\
/// - learn the rules
/// - then bend them";
///
/// let html = render_markdown(markdown).unwrap();
/// assert_eq!(html, "<ul><li>learn the rules</li>\n<li>then bend them</li></ul>");
/// ```
pub fn render_markdown(input: &str) -> Result<String, std::fmt::Error> {
    MarkdownRenderer::default().render(input)
}

/// Render a Markdown snippet with user specified settings.
///
/// ```rust
/// # use markdown_render::{render_markdown_with_config, Config};
/// let config = Config {
///     escape_spans: true,
///     ..Default::default()
/// };
///
/// let html = render_markdown_with_config("*<dangerous>*", config).unwrap();
/// assert_eq!(html, "<p><em>&lt;dangerous&gt;</em></p>");
/// ```
pub fn render_markdown_with_config(
    input: &str,
    config: Config,
) -> Result<String, std::fmt::Error> {
    tracing::trace!(?config);
    MarkdownRenderer::with_config(config).render(input)
}
