use crate::{block, builder::MarkdownRenderer, fence};

impl MarkdownRenderer {
    /// Render Markdown input to an HTML fragment.
    ///
    /// The fragment is meant for direct embedding; the caller wraps it in
    /// its own container element. Empty input renders to an empty string.
    ///
    /// ```rust
    /// # use markdown_render::MarkdownRenderer;
    /// let renderer = MarkdownRenderer::default();
    /// let html = renderer.render("> stay curious").unwrap();
    /// assert_eq!(html, "<blockquote><p>stay curious</p></blockquote>");
    /// ```
    pub fn render(&self, input: &str) -> Result<String, std::fmt::Error> {
        if input.is_empty() {
            return Ok(String::new());
        }

        // Fences come out first so no later pass can touch code content;
        // placeholders go back in last, after every block and inline rule
        // has run.
        let (working, blocks) = fence::extract(input, &self.config);
        tracing::trace!(blocks = blocks.len(), "extracted fenced code blocks");

        let rendered = block::render_blocks(&working, &self.config)?;

        Ok(blocks.reassemble(&rendered))
    }
}
